use crate::api::game::GameConfig;
use crate::api::types::{LineIndex, Phase};
use crate::assets::data::GameData;
use crate::bridge::protocol::{DebugState, EndScreen, GameEvent, LineView, ViewState, PROTOCOL_VERSION};
use crate::core::engine::{ClickOutcome, EngineState, IgnoreReason};
use crate::core::names::NameSetState;
use crate::input::queue::InputEvent;

/// One loaded game: the immutable data plus the playthrough state and the
/// `Start -> Playing -> Ended` screen machine.
pub struct Session {
    data: GameData,
    config: GameConfig,
    state: EngineState,
    phase: Phase,
    end: Option<EndScreen>,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(data: GameData, config: GameConfig) -> Self {
        let state = EngineState::new(&data);
        Self {
            data,
            config,
            state,
            phase: Phase::Start,
            end: None,
            events: Vec::with_capacity(8),
        }
    }

    /// Apply one input event. Events that make no sense in the current phase
    /// are dropped.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::StartRequested => {
                if self.phase == Phase::Start {
                    self.restart();
                } else {
                    log::debug!("start ignored in phase {:?}", self.phase);
                }
            }
            InputEvent::RestartRequested => self.restart(),
            InputEvent::LineClicked(index) => self.click(index),
            InputEvent::VideoEnded => {
                if self.phase == Phase::Playing {
                    self.finish();
                } else {
                    log::debug!("video end ignored in phase {:?}", self.phase);
                }
            }
        }
    }

    /// Fresh playthrough.
    fn restart(&mut self) {
        self.state.reset(&self.data);
        self.end = None;
        self.phase = Phase::Playing;
        log::info!(
            "playing: {} names, {} lines",
            self.data.names.len(),
            self.data.line_count()
        );
        self.events.push(GameEvent::Reset { phase: self.phase });
    }

    fn click(&mut self, index: LineIndex) {
        let outcome = if self.phase == Phase::Playing {
            self.state.click(&self.data, index)
        } else {
            ClickOutcome::Ignored(IgnoreReason::NotPlaying)
        };

        if let Some(line) = self.data.line(index).filter(|_| outcome.revealed()) {
            self.events.push(GameEvent::LineRevealed {
                index,
                kind: line.kind(),
            });
        }

        match outcome {
            ClickOutcome::Ignored(reason) => {
                log::debug!("click on line {} ignored: {:?}", index, reason);
                self.events.push(GameEvent::ClickIgnored { index, reason });
            }
            ClickOutcome::Hint { side, removed } => {
                log::debug!(
                    "line {} removed {:?} from {:?}; history depth {}",
                    index,
                    removed,
                    side,
                    self.state.history().depth()
                );
                if let (Some(side), false) = (side, removed.is_empty()) {
                    log::debug!("{:?} has {} name(s) left", side, self.state.names().side(side).len());
                    self.events.push(GameEvent::NamesEliminated { side, removed });
                }
            }
            ClickOutcome::Generic { restored } => {
                log::debug!("line {} undo (restored: {})", index, restored);
                if restored {
                    self.events.push(GameEvent::NamesRestored);
                }
            }
        }
    }

    /// Evaluate the final state and move to the end screen.
    fn finish(&mut self) {
        let solved = self.state.is_solved();
        let end = EndScreen {
            solved,
            message: self.config.end_message(solved).to_string(),
        };
        log::info!("video ended, solved: {}", solved);
        self.phase = Phase::Ended;
        self.events.push(GameEvent::Ended(end.clone()));
        self.end = Some(end);
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn names(&self) -> &NameSetState {
        self.state.names()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn end_screen(&self) -> Option<&EndScreen> {
        self.end.as_ref()
    }

    /// Full render snapshot for the presentation layer.
    pub fn view(&self) -> ViewState<'_> {
        let lines = self
            .data
            .lyrics
            .iter()
            .zip(self.state.lines())
            .enumerate()
            .map(|(i, (line, line_state))| {
                let revealed = line_state.is_revealed();
                LineView {
                    index: LineIndex(i),
                    text: &line.text,
                    revealed,
                    kind: revealed.then_some(line.kind()),
                }
            })
            .collect();

        ViewState {
            version: PROTOCOL_VERSION,
            phase: self.phase,
            tu: &self.state.names().tu,
            jo: &self.state.names().jo,
            lines,
            end: self.end.as_ref(),
        }
    }

    pub fn debug_state(&self) -> DebugState<'_> {
        DebugState {
            phase: self.phase,
            tu: &self.state.names().tu,
            jo: &self.state.names().jo,
            history_depth: self.state.history().depth(),
            history: self.state.history().iter().collect(),
        }
    }
}
