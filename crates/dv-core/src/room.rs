use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::flags::GameFlags;
use crate::id::{ActorId, ItemId, RoomId};

/// A directed, possibly conditional connection to another room.
///
/// An exit is either unconditional or gated by exactly one named game flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Destination room.
    pub to: RoomId,
    /// Flag that must be set for the exit to be passable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Shown when the condition is not met.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Exit {
    /// An unconditional exit to `to`.
    pub fn new(to: impl Into<RoomId>) -> Self {
        Self {
            to: to.into(),
            condition: None,
            message: None,
        }
    }

    /// Gate this exit on a game flag.
    pub fn when(mut self, flag: impl Into<String>) -> Self {
        self.condition = Some(flag.into());
        self
    }

    /// Message shown when the gate is closed.
    pub fn otherwise(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether the exit can be used with the given flags.
    pub fn is_passable(&self, flags: &GameFlags) -> bool {
        self.condition.as_deref().is_none_or(|f| flags.is_set(f))
    }
}

/// Lighting and terrain attributes of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomFlags {
    /// The room is lit on its own.
    pub provides_light: bool,
    /// The room cannot be entered without a light source.
    pub inherently_dark: bool,
    /// The room is outside.
    pub outdoors: bool,
}

/// A place the player can be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier.
    pub id: RoomId,
    /// Short display name, e.g. "Living Room".
    pub name: String,
    /// Long description shown on first visit or `look`.
    pub description: String,
    /// Exits keyed by direction.
    #[serde(default)]
    pub exits: BTreeMap<Direction, Exit>,
    /// Global scenery items that can be referred to from here.
    #[serde(default)]
    pub scenery: Vec<ItemId>,
    /// Lighting and terrain attributes.
    #[serde(default)]
    pub flags: RoomFlags,
    /// Cleared the first time the player enters.
    #[serde(default = "first_visit_default")]
    pub first_visit: bool,
    /// Items lying directly in the room. Derived from item locations.
    #[serde(skip)]
    pub items: BTreeSet<ItemId>,
    /// Actors standing in the room. Derived from actor locations.
    #[serde(skip)]
    pub actors: BTreeSet<ActorId>,
}

fn first_visit_default() -> bool {
    true
}

impl Room {
    /// Create an unlit room with no exits.
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            scenery: Vec::new(),
            flags: RoomFlags::default(),
            first_visit: true,
            items: BTreeSet::new(),
            actors: BTreeSet::new(),
        }
    }

    /// Add an exit.
    pub fn exit(mut self, direction: Direction, exit: Exit) -> Self {
        self.exits.insert(direction, exit);
        self
    }

    /// Make the room light on its own.
    pub fn lit(mut self) -> Self {
        self.flags.provides_light = true;
        self
    }

    /// Require a light source to enter.
    pub fn dark(mut self) -> Self {
        self.flags.inherently_dark = true;
        self.flags.provides_light = false;
        self
    }

    /// Mark the room as outside (and naturally lit).
    pub fn outdoors(mut self) -> Self {
        self.flags.outdoors = true;
        self.flags.provides_light = true;
        self
    }

    /// Make a global scenery item reachable from this room.
    pub fn with_scenery(mut self, item: impl Into<ItemId>) -> Self {
        self.scenery.push(item.into());
        self
    }

    /// Look up the exit in a direction.
    pub fn exit_to(&self, direction: Direction) -> Option<&Exit> {
        self.exits.get(&direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_exit_is_always_passable() {
        let exit = Exit::new("kitchen");
        assert!(exit.is_passable(&GameFlags::new()));
    }

    #[test]
    fn gated_exit_follows_flag() {
        let exit = Exit::new("cellar")
            .when("trap_door_open")
            .otherwise("The trap door is closed.");
        let mut flags = GameFlags::new();
        assert!(!exit.is_passable(&flags));
        flags.set("trap_door_open", true);
        assert!(exit.is_passable(&flags));
        assert_eq!(exit.message.as_deref(), Some("The trap door is closed."));
    }

    #[test]
    fn builder_sets_flags() {
        let room = Room::new("cellar", "Cellar", "A damp cellar.")
            .dark()
            .exit(Direction::Up, Exit::new("living-room"));
        assert!(room.flags.inherently_dark);
        assert!(!room.flags.provides_light);
        assert!(room.first_visit);
        assert_eq!(room.exit_to(Direction::Up).unwrap().to, RoomId::from("living-room"));
        assert!(room.exit_to(Direction::Down).is_none());
    }
}
