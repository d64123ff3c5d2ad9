use crate::api::types::LineIndex;

/// Input events the session understands.
/// Presentation-agnostic: the browser layer translates DOM events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The start button was pressed.
    StartRequested,
    /// A lyric line was clicked.
    LineClicked(LineIndex),
    /// The video reached its end.
    VideoEnded,
    /// The restart button was pressed.
    RestartRequested,
}

/// A queue of input events.
/// JS pushes events into the queue; the runner drains them in order.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
