use serde::{Deserialize, Serialize};

use crate::api::types::Side;

/// Ordered set of candidate names.
/// Built from validated `GameData::names`, so entries are unique; filtering
/// keeps the original order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameSet {
    names: Vec<String>,
}

impl NameSet {
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }

    /// Remove every name listed in `eliminate`. Names not present are skipped.
    /// Returns the names that were actually removed, in set order.
    pub fn remove_all(&mut self, eliminate: &[String]) -> Vec<String> {
        let mut removed = Vec::new();
        self.names.retain(|name| {
            if eliminate.contains(name) {
                removed.push(name.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// The remaining name, if exactly one is left.
    pub fn single(&self) -> Option<&str> {
        match self.names.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The two name clouds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameSetState {
    pub tu: NameSet,
    pub jo: NameSet,
}

impl NameSetState {
    /// Both sides start with the full list.
    pub fn full(names: &[String]) -> Self {
        Self {
            tu: NameSet::new(names),
            jo: NameSet::new(names),
        }
    }

    pub fn side(&self, side: Side) -> &NameSet {
        match side {
            Side::Tu => &self.tu,
            Side::Jo => &self.jo,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut NameSet {
        match side {
            Side::Tu => &mut self.tu,
            Side::Jo => &mut self.jo,
        }
    }

    pub fn is_solved(&self) -> bool {
        is_solved(&self.tu, &self.jo)
    }
}

/// Solved means each side is down to exactly one name and they differ.
pub fn is_solved(tu: &NameSet, jo: &NameSet) -> bool {
    match (tu.single(), jo.single()) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}
