use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::{LineIndex, LineKind, Side};

/// Everything a session needs: the candidate names and the lyric script.
/// Loaded once from a JSON file and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// Universe of candidate names, in display order.
    #[serde(default)]
    pub names: Vec<String>,
    /// The lyric script, in playback order.
    #[serde(default)]
    pub lyrics: Vec<LyricLine>,
}

/// A single lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
    #[serde(default)]
    pub text: String,
    /// Declared `type`. Only an explicit "generic" undoes; a line without a
    /// type goes down the hint path, see [`LyricLine::kind`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<LineKind>,
    /// Target side of a hint line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who: Option<Side>,
    /// Names a hint line removes from `who`. Catalan files call it "elimina".
    #[serde(default, alias = "elimina", skip_serializing_if = "Option::is_none")]
    pub eliminate: Option<Vec<String>>,
}

impl LyricLine {
    pub fn hint(text: impl Into<String>, who: Side, eliminate: &[&str]) -> Self {
        Self {
            text: text.into(),
            declared: Some(LineKind::Hint),
            who: Some(who),
            eliminate: Some(eliminate.iter().map(|n| n.to_string()).collect()),
        }
    }

    pub fn generic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            declared: Some(LineKind::Generic),
            who: None,
            eliminate: None,
        }
    }

    /// Effective behavior. Untyped lines act as hints: they push a snapshot
    /// and filter whatever `who`/`eliminate` they carry, usually nothing.
    pub fn kind(&self) -> LineKind {
        self.declared.unwrap_or(LineKind::Hint)
    }

    /// Names to eliminate; empty for generic lines.
    pub fn eliminated(&self) -> &[String] {
        match self.kind() {
            LineKind::Hint => self.eliminate.as_deref().unwrap_or(&[]),
            LineKind::Generic => &[],
        }
    }
}

/// Reasons a data file is rejected.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid game data json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("name {0:?} appears more than once")]
    DuplicateName(String),
    #[error("name #{index} is empty")]
    EmptyName { index: usize },
    #[error("hint line {line} has no `who`")]
    MissingWho { line: LineIndex },
    #[error("hint line {line} has no `eliminate` list")]
    MissingEliminate { line: LineIndex },
}

impl GameData {
    /// Parse and validate a data file.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: GameData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check the invariants the engine relies on: names are unique and
    /// non-empty, and every line declared as a hint says who it targets and
    /// what it removes. Untyped lines are not checked.
    ///
    /// Hint lines that mention names outside `names` are accepted; removing
    /// an absent name is a no-op.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::with_capacity(self.names.len());
        for (index, name) in self.names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DataError::EmptyName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(DataError::DuplicateName(name.clone()));
            }
        }

        for (i, line) in self.lyrics.iter().enumerate() {
            if line.declared != Some(LineKind::Hint) {
                continue;
            }
            let index = LineIndex(i);
            if line.who.is_none() {
                return Err(DataError::MissingWho { line: index });
            }
            let Some(eliminate) = &line.eliminate else {
                return Err(DataError::MissingEliminate { line: index });
            };
            for name in eliminate.iter().filter(|n| !seen.contains(n.as_str())) {
                log::warn!("hint line {} eliminates unknown name {:?}", i, name);
            }
        }
        Ok(())
    }

    pub fn line(&self, index: LineIndex) -> Option<&LyricLine> {
        self.lyrics.get(index.0)
    }

    pub fn line_count(&self) -> usize {
        self.lyrics.len()
    }
}
