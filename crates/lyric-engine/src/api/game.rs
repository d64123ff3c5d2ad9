use crate::assets::data::GameData;
use crate::bridge::protocol::GameEvent;

/// Default end-screen text when each side is down to one distinct name.
pub const DEFAULT_SOLVED_MESSAGE: &str = "Tu, que esperes esperant\ni Jo que espero anant anant!";

/// Default end-screen text for every other final state.
pub const DEFAULT_UNSOLVED_MESSAGE: &str = "No està resolt encara.\nTorna-ho a intentar.";

/// Configuration for a game, provided by the content crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// End-screen text shown when the puzzle is solved.
    pub solved_message: String,
    /// End-screen text shown otherwise.
    pub unsolved_message: String,
    /// Asset path the browser loader fetches the data file from.
    pub data_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            solved_message: DEFAULT_SOLVED_MESSAGE.to_string(),
            unsolved_message: DEFAULT_UNSOLVED_MESSAGE.to_string(),
            data_path: "data/joc.json".to_string(),
        }
    }
}

impl GameConfig {
    /// Pick the end-screen text for a completion result.
    pub fn end_message(&self, solved: bool) -> &str {
        if solved {
            &self.solved_message
        } else {
            &self.unsolved_message
        }
    }
}

/// The contract a concrete game fulfills. The engine owns all state;
/// a game only supplies content settings and may observe what happens.
pub trait Game {
    /// Return game configuration. Called once before data is loaded.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Called once after the data file has been parsed and validated.
    fn init(&mut self, _data: &GameData) {}

    /// Called for every event the session emits, in order.
    fn on_event(&mut self, _event: &GameEvent) {}
}
