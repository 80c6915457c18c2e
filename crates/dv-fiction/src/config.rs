//! Configuration for an interactive fiction session.

use std::path::PathBuf;

use dv_core::{CoreError, CoreResult};

use crate::narrator::Verbosity;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible combat.
    pub seed: u64,
    /// Directory save files are written to and read from.
    pub save_dir: PathBuf,
    /// Initial description verbosity.
    pub verbosity: Verbosity,
    /// Moves per healed wound point (at least 1).
    pub heal_interval: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            save_dir: PathBuf::from("."),
            verbosity: Verbosity::Brief,
            heal_interval: 30,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the save directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Set the initial verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the healing interval (clamped to at least 1).
    pub fn with_heal_interval(mut self, moves: u32) -> Self {
        self.heal_interval = moves.max(1);
        self
    }

    /// Where a save called `name` lives.
    ///
    /// Names must be a single plain file name: no separators, no `..`,
    /// nothing absolute.
    pub fn save_path(&self, name: &str) -> CoreResult<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && !name.contains("..")
            && !name.contains(['/', '\\', ':']);
        if !plain {
            return Err(CoreError::InvalidSaveName(name.to_string()));
        }
        Ok(self.save_dir.join(format!("{name}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.save_dir, PathBuf::from("."));
        assert_eq!(cfg.verbosity, Verbosity::Brief);
        assert_eq!(cfg.heal_interval, 30);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(7)
            .with_save_dir("/tmp/saves")
            .with_verbosity(Verbosity::Verbose)
            .with_heal_interval(5);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.save_dir, PathBuf::from("/tmp/saves"));
        assert_eq!(cfg.verbosity, Verbosity::Verbose);
        assert_eq!(cfg.heal_interval, 5);
    }

    #[test]
    fn heal_interval_clamped() {
        assert_eq!(SessionConfig::default().with_heal_interval(0).heal_interval, 1);
    }

    #[test]
    fn save_path_joins_dir() {
        let cfg = SessionConfig::default().with_save_dir("saves");
        assert_eq!(
            cfg.save_path("slot_1").unwrap(),
            PathBuf::from("saves/slot_1.json")
        );
    }

    #[test]
    fn save_names_stay_inside_the_dir() {
        let cfg = SessionConfig::default().with_save_dir("saves");
        for name in ["../escaped", "/tmp/abs", "a/b", "a\\b", "..", ""] {
            assert!(
                matches!(cfg.save_path(name), Err(CoreError::InvalidSaveName(_))),
                "{name}"
            );
        }
    }
}
