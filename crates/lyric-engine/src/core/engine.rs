//! Lyric-click rules.
//!
//! Every line can be revealed once. Revealing a hint line snapshots both name
//! clouds and then filters one of them; revealing a generic line rolls back to
//! the most recent snapshot. All functions here are pure state transitions on
//! caller-owned state.

use serde::Serialize;

use crate::api::types::{LineIndex, LineKind, Side};
use crate::assets::data::{GameData, LyricLine};
use crate::core::history::HistoryStack;
use crate::core::names::NameSetState;

/// Per-line reveal flag. Once revealed, a line stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineState {
    revealed: bool,
}

impl LineState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Mark as revealed. Returns false if it already was.
    fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}

/// Why a click left everything untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    AlreadyRevealed,
    OutOfRange,
    NotPlaying,
}

/// Result of a single click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    /// A hint line was revealed. `removed` lists the names that were
    /// actually present and got filtered out.
    Hint { side: Option<Side>, removed: Vec<String> },
    /// A generic line was revealed. `restored` is false when there was no
    /// snapshot to roll back to.
    Generic { restored: bool },
}

impl ClickOutcome {
    /// Whether the line went from hidden to revealed.
    pub fn revealed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }

    /// Whether either name cloud may look different now.
    pub fn names_changed(&self) -> bool {
        match self {
            ClickOutcome::Ignored(_) => false,
            ClickOutcome::Hint { removed, .. } => !removed.is_empty(),
            ClickOutcome::Generic { restored } => *restored,
        }
    }
}

/// All mutable game state for one playthrough.
/// Only `click`, `undo` and `reset` change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineState {
    names: NameSetState,
    history: HistoryStack,
    lines: Vec<LineState>,
}

/// Fresh state: both clouds full, no history, every line hidden.
pub fn initialize(data: &GameData) -> EngineState {
    EngineState {
        names: NameSetState::full(&data.names),
        history: HistoryStack::new(),
        lines: vec![LineState::default(); data.line_count()],
    }
}

/// Apply a click on `line`.
pub fn handle_click(
    line: &LyricLine,
    line_state: &mut LineState,
    names: &mut NameSetState,
    history: &mut HistoryStack,
) -> ClickOutcome {
    if !line_state.reveal() {
        return ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed);
    }

    match line.kind() {
        LineKind::Generic => ClickOutcome::Generic {
            restored: undo(names, history),
        },
        LineKind::Hint => {
            history.push(names);
            let removed = match line.who {
                Some(side) => names.side_mut(side).remove_all(line.eliminated()),
                None if line.declared.is_some() => {
                    log::warn!("hint line {:?} has no target side", line.text);
                    Vec::new()
                }
                None => Vec::new(),
            };
            ClickOutcome::Hint {
                side: line.who,
                removed,
            }
        }
    }
}

/// Restore both clouds from the latest snapshot. Returns false (and changes
/// nothing) when the history is empty.
pub fn undo(names: &mut NameSetState, history: &mut HistoryStack) -> bool {
    match history.pop() {
        Some(snapshot) => {
            *names = snapshot;
            true
        }
        None => false,
    }
}

impl EngineState {
    pub fn new(data: &GameData) -> Self {
        initialize(data)
    }

    /// Back to the initial state for `data`.
    pub fn reset(&mut self, data: &GameData) {
        *self = initialize(data);
    }

    /// Click the line at `index`.
    pub fn click(&mut self, data: &GameData, index: LineIndex) -> ClickOutcome {
        let (Some(line), Some(line_state)) = (data.line(index), self.lines.get_mut(index.0)) else {
            log::warn!("click on line {} ignored: script has {} lines", index, data.line_count());
            return ClickOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        handle_click(line, line_state, &mut self.names, &mut self.history)
    }

    pub fn undo(&mut self) -> bool {
        undo(&mut self.names, &mut self.history)
    }

    pub fn names(&self) -> &NameSetState {
        &self.names
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn lines(&self) -> &[LineState] {
        &self.lines
    }

    pub fn is_revealed(&self, index: LineIndex) -> bool {
        self.lines.get(index.0).is_some_and(LineState::is_revealed)
    }

    pub fn is_solved(&self) -> bool {
        self.names.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(names: &[&str], lyrics: Vec<LyricLine>) -> GameData {
        GameData {
            names: names.iter().map(|n| n.to_string()).collect(),
            lyrics,
        }
    }

    fn tu(state: &EngineState) -> Vec<&str> {
        state.names().tu.iter().collect()
    }

    fn jo(state: &EngineState) -> Vec<&str> {
        state.names().jo.iter().collect()
    }

    #[test]
    fn initialize_fills_both_sides() {
        let d = data(&["A", "B"], vec![LyricLine::generic("x"), LyricLine::generic("y")]);
        let state = initialize(&d);
        assert_eq!(tu(&state), vec!["A", "B"]);
        assert_eq!(jo(&state), vec!["A", "B"]);
        assert!(state.history().is_empty());
        assert_eq!(state.lines().len(), 2);
        assert!(state.lines().iter().all(|l| !l.is_revealed()));
    }

    #[test]
    fn hint_then_generic_restores_everything() {
        let d = data(
            &["A", "B", "C"],
            vec![LyricLine::hint("h", Side::Tu, &["B", "C"]), LyricLine::generic("g")],
        );
        let mut state = initialize(&d);

        let outcome = state.click(&d, LineIndex(0));
        assert_eq!(
            outcome,
            ClickOutcome::Hint {
                side: Some(Side::Tu),
                removed: vec!["B".into(), "C".into()],
            }
        );
        assert_eq!(tu(&state), vec!["A"]);
        assert_eq!(jo(&state), vec!["A", "B", "C"]);
        assert_eq!(state.history().depth(), 1);

        let outcome = state.click(&d, LineIndex(1));
        assert_eq!(outcome, ClickOutcome::Generic { restored: true });
        assert_eq!(tu(&state), vec!["A", "B", "C"]);
        assert!(state.history().is_empty());
    }

    #[test]
    fn second_click_on_same_line_is_ignored() {
        let d = data(&["A", "B"], vec![LyricLine::hint("h", Side::Jo, &["A"])]);
        let mut state = initialize(&d);
        state.click(&d, LineIndex(0));
        let before = state.clone();

        let outcome = state.click(&d, LineIndex(0));
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed));
        assert!(!outcome.revealed());
        assert_eq!(state, before);
    }

    #[test]
    fn generic_with_empty_history_only_reveals() {
        let d = data(&["A", "B"], vec![LyricLine::generic("g")]);
        let mut state = initialize(&d);
        let outcome = state.click(&d, LineIndex(0));
        assert_eq!(outcome, ClickOutcome::Generic { restored: false });
        assert!(!outcome.names_changed());
        assert!(state.is_revealed(LineIndex(0)));
        assert_eq!(*state.names(), NameSetState::full(&d.names));
        assert!(state.history().is_empty());
    }

    #[test]
    fn generic_undoes_only_the_latest_hint() {
        let d = data(
            &["A", "B", "C", "D"],
            vec![
                LyricLine::hint("h1", Side::Tu, &["A"]),
                LyricLine::hint("h2", Side::Tu, &["B"]),
                LyricLine::generic("g"),
            ],
        );
        let mut state = initialize(&d);
        state.click(&d, LineIndex(0));
        state.click(&d, LineIndex(1));
        assert_eq!(state.history().depth(), 2);
        assert_eq!(tu(&state), vec!["C", "D"]);

        state.click(&d, LineIndex(2));
        assert_eq!(state.history().depth(), 1);
        assert_eq!(tu(&state), vec!["B", "C", "D"]);
    }

    #[test]
    fn each_hint_generic_pair_round_trips() {
        let d = data(
            &["A", "B", "C", "D"],
            vec![
                LyricLine::hint("h1", Side::Tu, &["A", "B"]),
                LyricLine::generic("g1"),
                LyricLine::hint("h2", Side::Jo, &["C"]),
                LyricLine::hint("h3", Side::Jo, &["D", "Z"]),
                LyricLine::generic("g2"),
                LyricLine::generic("g3"),
            ],
        );
        let mut state = initialize(&d);
        let mut seen = Vec::new();
        for i in 0..d.line_count() {
            let before = state.names().clone();
            let outcome = state.click(&d, LineIndex(i));
            match outcome {
                ClickOutcome::Hint { .. } => seen.push(before),
                ClickOutcome::Generic { restored: true } => {
                    assert_eq!(Some(state.names()), seen.pop().as_ref());
                }
                other => panic!("unexpected outcome {:?}", other),
            }
        }
        assert_eq!(*state.names(), NameSetState::full(&d.names));
    }

    #[test]
    fn hint_eliminating_absent_names_still_snapshots() {
        let d = data(&["A"], vec![LyricLine::hint("h", Side::Tu, &["Z"])]);
        let mut state = initialize(&d);
        let outcome = state.click(&d, LineIndex(0));
        assert!(!outcome.names_changed());
        assert_eq!(state.history().depth(), 1);
    }

    #[test]
    fn hint_without_side_snapshots_but_filters_nothing() {
        let mut line = LyricLine::hint("h", Side::Tu, &["A"]);
        line.who = None;
        let d = data(&["A"], vec![line]);
        let mut state = initialize(&d);
        let outcome = state.click(&d, LineIndex(0));
        assert_eq!(outcome, ClickOutcome::Hint { side: None, removed: vec![] });
        assert_eq!(state.history().depth(), 1);
        assert_eq!(tu(&state), vec!["A"]);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let d = data(&["A"], vec![]);
        let mut state = initialize(&d);
        assert_eq!(
            state.click(&d, LineIndex(3)),
            ClickOutcome::Ignored(IgnoreReason::OutOfRange)
        );
    }

    #[test]
    fn reaching_one_name_each_solves() {
        let d = data(
            &["Anna", "Marc"],
            vec![
                LyricLine::hint("h1", Side::Tu, &["Marc"]),
                LyricLine::hint("h2", Side::Jo, &["Anna"]),
            ],
        );
        let mut state = initialize(&d);
        state.click(&d, LineIndex(0));
        assert!(!state.is_solved());
        state.click(&d, LineIndex(1));
        assert!(state.is_solved());

        state.reset(&d);
        assert!(!state.is_solved());
        assert!(!state.is_revealed(LineIndex(0)));
    }

    #[test]
    fn untyped_line_snapshots_like_a_hint() {
        let json = r#"{
            "names": ["A", "B", "C"],
            "lyrics": [
                { "text": "one", "type": "pista", "who": "TU", "elimina": ["B", "C"] },
                { "text": "no type" },
                { "text": "undo", "type": "generic" }
            ]
        }"#;
        let d = GameData::from_json(json).unwrap();
        let mut state = initialize(&d);
        state.click(&d, LineIndex(0));

        let outcome = state.click(&d, LineIndex(1));
        assert_eq!(outcome, ClickOutcome::Hint { side: None, removed: vec![] });
        assert_eq!(state.history().depth(), 2);
        assert_eq!(tu(&state), vec!["A"]);

        // The generic line pops the untyped line's snapshot, not the pista's.
        state.click(&d, LineIndex(2));
        assert_eq!(state.history().depth(), 1);
        assert_eq!(tu(&state), vec!["A"]);
    }

    #[test]
    fn free_undo_on_empty_history_is_noop() {
        let d = data(&["A"], vec![]);
        let mut state = initialize(&d);
        assert!(!state.undo());
        assert_eq!(state, initialize(&d));
    }
}
