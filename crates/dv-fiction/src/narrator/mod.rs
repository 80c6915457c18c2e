//! Descriptions of rooms, items and the player's belongings.

mod config;
mod describe;

pub use config::{NarratorConfig, Verbosity};
pub use describe::{Narrator, PITCH_BLACK, glow_message, with_article};
