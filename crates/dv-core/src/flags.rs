use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named boolean switches that persist for the whole game: doors unlocked,
/// puzzles solved, guardians defeated. Unset flags read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameFlags(BTreeMap<String, bool>);

impl GameFlags {
    /// Create an empty flag table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a flag is set.
    pub fn is_set(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Set a flag to the given value.
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.0.insert(name.into(), value);
    }

    /// Iterate over every flag that has ever been written.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of flags that have been written.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no flag has been written yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
