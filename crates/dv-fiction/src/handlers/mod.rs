//! Verb handlers.
//!
//! Each handler takes the session and a parsed [`Command`] and returns the
//! text to show. Ordinary failures ("You can't see any such thing.") are
//! responses, not errors.

/// Resolve the direct object or return the refusal as the response.
macro_rules! direct_or_reply {
    ($session:expr, $command:expr, $verb:expr) => {
        match $session.direct_item($command, $verb) {
            Ok(id) => id,
            Err(reply) => return Ok(reply),
        }
    };
}

mod actors;
mod meta;
mod movement;
mod objects;

use dv_core::{ActorId, ItemId};

use crate::parser::{Command, ObjectRef};
use crate::session::FictionSession;
use crate::vocabulary::ObjectId;

pub(crate) const NOT_HERE: &str = "You can't see any such thing.";
pub(crate) const TOO_DARK: &str = "It's too dark to see.";

impl FictionSession {
    /// The reachable item an object phrase refers to.
    ///
    /// The vocabulary maps a shared word like "door" to one item; when that
    /// item isn't here, the phrase is looked up again by name among what is.
    pub(crate) fn resolve_item(&self, object: &ObjectRef) -> Option<ItemId> {
        if let ObjectId::Item(id) = &object.id
            && self.world.is_reachable(id)
        {
            return Some(id.clone());
        }
        self.world.find_item_by_name(&object.phrase)
    }

    /// The actor in the current room an object phrase refers to.
    pub(crate) fn resolve_actor(&self, object: &ObjectRef, living_only: bool) -> Option<ActorId> {
        let ObjectId::Actor(id) = &object.id else {
            return None;
        };
        let here = self.world.actor(id).is_some_and(|a| {
            a.location == self.world.player.location && (!living_only || a.is_alive())
        });
        if here {
            Some(id.clone())
        } else {
            self.world.find_actor_by_name(&object.phrase, living_only)
        }
    }

    /// The display name of an item or actor.
    pub(crate) fn name_of(&self, id: &ObjectId) -> String {
        match id {
            ObjectId::Item(item) => self.world.item(item).map(|i| i.name.clone()),
            ObjectId::Actor(actor) => self.world.actor(actor).map(|a| a.name.clone()),
        }
        .unwrap_or_else(|| id.to_string())
    }

    /// The display name of an item.
    pub(crate) fn item_name(&self, id: &ItemId) -> String {
        self.world
            .item(id)
            .map_or_else(|| id.to_string(), |i| i.name.clone())
    }

    /// Whether the player can see in the current room.
    pub(crate) fn can_see(&self) -> bool {
        self.world.is_lit(&self.world.player.location)
    }

    /// Resolve the direct object to a reachable item.
    ///
    /// `Err` carries the response to give when that fails.
    pub(crate) fn direct_item(&self, command: &Command, verb: &str) -> Result<ItemId, String> {
        let Some(object) = &command.direct else {
            return Err(format!("What do you want to {verb}?"));
        };
        if let ObjectId::Actor(_) = object.id
            && self.resolve_actor(object, false).is_some()
        {
            return Err(format!("You can't {verb} the {}.", self.name_of(&object.id)));
        }
        self.resolve_item(object).ok_or_else(|| NOT_HERE.to_string())
    }
}
