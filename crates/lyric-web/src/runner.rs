use lyric_engine::{
    DataError, Game, GameConfig, GameData, GameEvent, InputEvent, InputQueue, Session,
};

/// Generic game runner that wires a `Game` to a `Session`.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    config: GameConfig,
    input: InputQueue,
    session: Option<Session>,
    /// Events produced since the presentation last asked for them.
    pending: Vec<GameEvent>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            config,
            input: InputQueue::new(),
            session: None,
            pending: Vec::new(),
        }
    }

    /// Parse the data file and create the session. Replaces any previous
    /// session. On error the runner stays (or becomes) unloaded.
    pub fn load_data(&mut self, json: &str) -> Result<(), DataError> {
        self.session = None;
        let data = GameData::from_json(json)?;
        self.game.init(&data);
        self.session = Some(Session::new(data, self.config.clone()));
        self.pending.clear();
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Feed every queued input to the session and collect the resulting events.
    /// Input arriving before the data is loaded is dropped.
    pub fn flush(&mut self) {
        let events = self.input.drain();
        let Some(session) = self.session.as_mut() else {
            if !events.is_empty() {
                log::warn!("{} input event(s) dropped: game data not loaded", events.len());
            }
            return;
        };

        for event in events {
            session.apply(event);
        }
        for event in session.drain_events() {
            self.game.on_event(&event);
            self.pending.push(event);
        }
    }

    /// Push and process a single event.
    pub fn dispatch(&mut self, event: InputEvent) {
        self.push_input(event);
        self.flush();
    }

    /// Take the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ---- JSON accessors (read by the JS renderer via wasm_bindgen exports) ----

    /// Full view snapshot, or `null` before the data is loaded.
    pub fn view_json(&self) -> String {
        self.session
            .as_ref()
            .and_then(|s| serde_json::to_string(&s.view()).ok())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Pending events as a JSON array; clears them.
    pub fn events_json(&mut self) -> String {
        let events = self.take_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn debug_json(&self) -> String {
        self.session
            .as_ref()
            .and_then(|s| serde_json::to_string(&s.debug_state()).ok())
            .unwrap_or_else(|| "null".to_string())
    }
}
