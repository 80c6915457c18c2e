use std::path::PathBuf;

use crate::id::{ActorId, ItemId, RoomId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building, mutating, saving or restoring a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// The requested item does not exist.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The requested actor does not exist.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// An entity with the same identifier already exists.
    #[error("duplicate identifier: \"{0}\"")]
    DuplicateId(String),

    /// An item was placed somewhere it cannot live.
    #[error("item {item} cannot be placed in {location}")]
    InvalidLocation {
        /// The item being placed.
        item: ItemId,
        /// A description of the rejected location.
        location: String,
    },

    /// The save directory does not exist.
    #[error("save directory does not exist: {}", .0.display())]
    SaveDirMissing(PathBuf),

    /// A save name that would reach outside the save directory.
    #[error("invalid save name: \"{0}\"")]
    InvalidSaveName(String),

    /// A save file was written by an incompatible version.
    #[error("save file version {found} does not match expected version {expected}")]
    VersionMismatch {
        /// The version this build reads and writes.
        expected: u32,
        /// The version recorded in the file.
        found: u32,
    },

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A save or world file could not be (de)serialized.
    #[error("malformed data: {0}")]
    Json(#[from] serde_json::Error),
}
