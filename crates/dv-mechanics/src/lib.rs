//! Combat resolution engine for Delve.
//!
//! Strength arithmetic, the outcome tables, and the rules for applying an
//! outcome to the world. Randomness comes in through [`Roller`], so every
//! exchange can be replayed with a seeded or scripted source.

pub mod combat;
pub mod dice;
pub mod error;
pub mod strength;

pub use combat::{Blow, CombatEngine, Outcome, TableId, select_table};
pub use dice::{Roller, Scripted};
pub use error::{MechError, MechResult};
pub use strength::{DISTRACTED_CAP, STRENGTH_MAX, STRENGTH_MIN, hero_strength, villain_strength};
