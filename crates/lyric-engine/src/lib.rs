pub mod api;
pub mod core;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig};
pub use api::types::{LineIndex, LineKind, Phase, Side};
pub use assets::data::{DataError, GameData, LyricLine};
pub use core::engine::{
    handle_click, initialize, undo, ClickOutcome, EngineState, IgnoreReason, LineState,
};
pub use core::history::HistoryStack;
pub use core::names::{is_solved, NameSet, NameSetState};
pub use core::session::Session;
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{DebugState, EndScreen, GameEvent, LineView, ViewState, PROTOCOL_VERSION};
