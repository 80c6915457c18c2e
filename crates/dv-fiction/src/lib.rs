//! Interactive fiction runtime for Delve.
//!
//! Turns lines of player input into commands and commands into prose. The
//! [`Vocabulary`] knows every verb and object word, the [`Parser`] resolves
//! a line against it (remembering what "it" means), and a
//! [`FictionSession`] dispatches each command against the world, runs the
//! end-of-turn clock and villains, and narrates the result.

/// Session configuration.
pub mod config;
/// Error types for the fiction runtime.
pub mod error;
mod handlers;
/// Room, item and inventory descriptions.
pub mod narrator;
/// Command parsing and object resolution.
pub mod parser;
/// The running game.
pub mod session;
/// Verbs, prepositions and object words.
pub mod vocabulary;

#[cfg(test)]
mod testing;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult, ParseError};
pub use narrator::{Narrator, NarratorConfig, Verbosity};
pub use parser::{Command, ObjectRef, Parser};
pub use session::{FictionSession, GameStatus};
pub use vocabulary::{ObjectId, Verb, Vocabulary};
