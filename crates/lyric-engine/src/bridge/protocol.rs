//! JSON messages exchanged with the presentation layer.
//! Must stay in sync with the JS renderer.
//!
//! The presentation reads two kinds of payload:
//! ```text
//! ViewState  - full snapshot, used after load, start and restart
//! GameEvent  - incremental changes produced by the last input, drained per call
//! ```

use serde::Serialize;

use crate::api::types::{LineIndex, LineKind, Phase, Side};
use crate::core::engine::IgnoreReason;
use crate::core::names::{NameSet, NameSetState};

/// Protocol version written into every `ViewState`.
pub const PROTOCOL_VERSION: u32 = 1;

/// End-screen result: which message to show and whether it counts as solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndScreen {
    pub solved: bool,
    pub message: String,
}

/// One lyric line as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView<'a> {
    pub index: LineIndex,
    pub text: &'a str,
    pub revealed: bool,
    /// Only present once revealed, so hints are not given away by styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<LineKind>,
}

/// Full render snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState<'a> {
    pub version: u32,
    pub phase: Phase,
    pub tu: &'a NameSet,
    pub jo: &'a NameSet,
    pub lines: Vec<LineView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'a EndScreen>,
}

/// Internal state dump for debugging in the browser console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugState<'a> {
    pub phase: Phase,
    pub tu: &'a NameSet,
    pub jo: &'a NameSet,
    pub history_depth: usize,
    pub history: Vec<&'a NameSetState>,
}

/// Change notifications, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// State was (re)initialized; re-render everything.
    Reset { phase: Phase },
    /// A line was revealed for the first time.
    LineRevealed { index: LineIndex, kind: LineKind },
    /// A hint line filtered names from `side`.
    NamesEliminated { side: Side, removed: Vec<String> },
    /// A generic line rolled both clouds back to a snapshot.
    NamesRestored,
    /// A click was absorbed without changing anything.
    ClickIgnored { index: LineIndex, reason: IgnoreReason },
    /// The video ended; show the end screen.
    Ended(EndScreen),
}
