//! Error types for the combat engine.

use dv_core::{ActorId, CoreError};

/// Errors that can occur during combat resolution.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The actor does not exist.
    #[error("unknown actor: {0}")]
    UnknownActor(ActorId),

    /// The actor is already dead.
    #[error("actor {0} is dead")]
    ActorDead(ActorId),

    /// The actor does not take part in combat.
    #[error("actor {0} does not fight")]
    NotAFighter(ActorId),

    /// Applying an outcome to the world failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for combat operations.
pub type MechResult<T> = Result<T, MechError>;
