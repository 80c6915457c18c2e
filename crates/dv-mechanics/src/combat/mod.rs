//! Combat resolution.
//!
//! One exchange is one blow: pick a table from the two strengths, draw a
//! slot, maybe turn a stagger into a disarm, then apply the outcome.

pub mod engine;
pub mod messages;
pub mod table;

pub use engine::{Blow, CombatEngine, DISARM_ODDS};
pub use table::{Outcome, SLOTS, TableId, select_table};
