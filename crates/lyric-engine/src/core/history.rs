use serde::Serialize;

use crate::core::names::NameSetState;

/// Snapshots of both name clouds, one per hint line applied and not yet undone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryStack {
    snapshots: Vec<NameSetState>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::with_capacity(16),
        }
    }

    /// Save a copy of `state`. Called right before a hint line mutates it.
    pub fn push(&mut self, state: &NameSetState) {
        self.snapshots.push(state.clone());
    }

    /// Take the most recent snapshot. `None` when nothing is left to undo.
    pub fn pop(&mut self) -> Option<NameSetState> {
        self.snapshots.pop()
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &NameSetState> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(names: &[&str]) -> NameSetState {
        let owned: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        NameSetState::full(&owned)
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut h = HistoryStack::new();
        h.push(&state(&["A", "B"]));
        h.push(&state(&["A"]));
        assert_eq!(h.depth(), 2);
        assert_eq!(h.pop(), Some(state(&["A"])));
        assert_eq!(h.pop(), Some(state(&["A", "B"])));
        assert!(h.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut h = HistoryStack::new();
        assert_eq!(h.pop(), None);
        assert_eq!(h.depth(), 0);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut h = HistoryStack::new();
        let mut live = state(&["A", "B"]);
        h.push(&live);
        live.tu.remove_all(&["A".to_string()]);
        assert_eq!(h.iter().next(), Some(&state(&["A", "B"])));
    }
}
