//! Narrator configuration.

/// How much of a room is described on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Room names only.
    Superbrief,
    /// Full descriptions on the first visit only.
    #[default]
    Brief,
    /// Full descriptions every time.
    Verbose,
}

impl Verbosity {
    /// Whether arriving somewhere prints the long description.
    pub fn describes_fully(self, first_visit: bool) -> bool {
        match self {
            Self::Superbrief => false,
            Self::Brief => first_visit,
            Self::Verbose => true,
        }
    }
}

/// Configuration for the narrator.
#[derive(Debug, Clone, Default)]
pub struct NarratorConfig {
    /// The verbosity level.
    pub verbosity: Verbosity,
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}
