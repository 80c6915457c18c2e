//! Core types for Delve: rooms, items, actors, and the world model.
//!
//! This crate owns every entity of a running adventure and all the rules
//! about where things are: exits and their gate conditions, containment,
//! light and darkness, and inventory transfer. Entities live in flat tables
//! keyed by identifier; every cross-reference is an identifier lookup.
//!
//! A [`World`] can be built programmatically, deserialized from JSON, or
//! taken ready-made from [`sample::white_house`].

/// Non-player characters.
pub mod actor;
/// Compass and vertical directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Global boolean switches.
pub mod flags;
/// Typed string identifiers.
pub mod id;
/// Items and their capability flags.
pub mod item;
/// The player character.
pub mod player;
/// Rooms and exits.
pub mod room;
/// The bundled starter dungeon.
pub mod sample;
/// Save-game snapshots of the dynamic world state.
pub mod snapshot;
/// Consistency checks for authored content.
pub mod validate;
/// The central world model and its mutation rules.
pub mod world;

pub use actor::{Actor, ActorFlags, Weakness};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use flags::GameFlags;
pub use id::{ActorId, ItemId, RoomId};
pub use item::{Item, ItemFlags, Location};
pub use player::{DEFAULT_MAX_WEIGHT, Player};
pub use room::{Exit, Room, RoomFlags};
pub use snapshot::{SAVE_VERSION, Snapshot};
pub use validate::ValidationIssue;
pub use world::{
    Arrival, TakeError, ToggleOutcome, TransferError, TravelError, World, WorldMeta,
};
