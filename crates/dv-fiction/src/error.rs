use dv_core::CoreError;
use dv_mechanics::MechError;

/// Alias for `Result<T, FictionError>`.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised while running an interactive fiction session.
#[derive(Debug, thiserror::Error)]
pub enum FictionError {
    /// Input could not be turned into a command.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The world model rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Combat resolution failed.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// Writing a save file failed.
    #[error("Save failed: {0}")]
    SaveFailed(#[source] CoreError),

    /// Reading or applying a save file failed.
    #[error("Restore failed: {0}")]
    RestoreFailed(#[source] CoreError),
}

/// Why a line of input could not be parsed.
///
/// The `Display` text is shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing left after normalization.
    #[error("I beg your pardon?")]
    Empty,

    /// The first word is not a known verb.
    #[error("I don't know the word \"{word}\".{}", suggestion_suffix(.suggestion))]
    UnknownWord {
        /// The unrecognized word.
        word: String,
        /// A close verb, if one exists.
        suggestion: Option<String>,
    },

    /// An object phrase names nothing in the vocabulary.
    #[error("You used the word \"{0}\" in a way that I don't understand.")]
    UnknownObject(String),

    /// A word after the direct object is not a preposition.
    #[error("I don't understand how to use \"{0}\" here.")]
    NotPreposition(String),

    /// A preposition with nothing after it.
    #[error("What do you want to {verb} {preposition}?")]
    DanglingPreposition {
        /// The verb as typed.
        verb: String,
        /// The preposition left hanging.
        preposition: String,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" Did you mean \"{s}\"?"))
        .unwrap_or_default()
}
