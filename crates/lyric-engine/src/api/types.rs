use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a lyric line in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineIndex(pub usize);

impl fmt::Display for LineIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two name clouds a hint line talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "TU", alias = "tu")]
    Tu,
    #[serde(rename = "JO", alias = "jo")]
    Jo,
}

/// How a lyric line behaves once it is revealed.
/// Content files written in Catalan call hint lines "pista".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Snapshots, then eliminates names from one side.
    #[serde(alias = "pista")]
    Hint,
    /// Undoes the most recent hint.
    Generic,
}

/// Session-level screen phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Start,
    Playing,
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_uses_uppercase_tags() {
        assert_eq!(serde_json::to_string(&Side::Tu).unwrap(), "\"TU\"");
        let jo: Side = serde_json::from_str("\"JO\"").unwrap();
        assert_eq!(jo, Side::Jo);
    }

    #[test]
    fn pista_is_a_hint() {
        let kind: LineKind = serde_json::from_str("\"pista\"").unwrap();
        assert_eq!(kind, LineKind::Hint);
        let kind: LineKind = serde_json::from_str("\"generic\"").unwrap();
        assert_eq!(kind, LineKind::Generic);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<LineKind>("\"chorus\"").is_err());
    }
}
