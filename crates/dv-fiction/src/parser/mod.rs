//! Turning a line of text into a [`Command`].

mod command;
mod grammar;
mod resolver;

pub use command::{Command, ObjectRef};
pub use grammar::Parser;
pub use resolver::{resolve_phrase, suggest_verb};
