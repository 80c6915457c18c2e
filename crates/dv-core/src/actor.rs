use serde::{Deserialize, Serialize};

use crate::id::{ActorId, ItemId, RoomId};

/// Behavioural flags of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorFlags {
    /// Attacks the player unprovoked.
    pub aggressive: bool,
    /// Will not fight back.
    pub friendly: bool,
    /// Still alive. Actors are never removed, only killed.
    pub alive: bool,
    /// Answers `talk`.
    pub can_talk: bool,
    /// Takes part in combat.
    pub can_fight: bool,
}

impl Default for ActorFlags {
    fn default() -> Self {
        Self {
            aggressive: false,
            friendly: false,
            alive: true,
            can_talk: false,
            can_fight: false,
        }
    }
}

/// A weapon that weakens a particular actor while the player carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weakness {
    /// The weapon the actor fears.
    pub weapon: ItemId,
    /// How much the actor's strength drops.
    pub amount: i32,
}

/// A non-player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Stable identifier.
    pub id: ActorId,
    /// Display name, e.g. "troll".
    pub name: String,
    /// Shown by `examine`.
    pub description: String,
    /// Room the actor stands in.
    pub location: RoomId,
    /// Behavioural flags.
    #[serde(default)]
    pub flags: ActorFlags,
    /// Combat strength. Zero or less means dead.
    #[serde(default)]
    pub strength: i32,
    /// Weapon the actor fights with; must also be in `inventory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<ItemId>,
    /// Items the actor carries, in pick-up order.
    #[serde(skip)]
    pub inventory: Vec<ItemId>,
    /// Provoked into fighting.
    #[serde(default)]
    pub hostile: bool,
    /// Skips its next counter-attack.
    #[serde(default)]
    pub staggered: bool,
    /// Strength capped for the next exchange.
    #[serde(default)]
    pub distracted: bool,
    /// Weapon that weakens this actor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weakness: Option<Weakness>,
    /// Reply to `talk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    /// Game flag set when the actor dies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_flag: Option<String>,
}

impl Actor {
    /// Create a living, passive actor.
    pub fn new(
        id: impl Into<ActorId>,
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<RoomId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            location: location.into(),
            flags: ActorFlags::default(),
            strength: 0,
            weapon: None,
            inventory: Vec::new(),
            hostile: false,
            staggered: false,
            distracted: false,
            weakness: None,
            greeting: None,
            death_flag: None,
        }
    }

    /// A fighting actor with the given base strength.
    pub fn fighter(mut self, strength: i32) -> Self {
        self.flags.can_fight = true;
        self.strength = strength;
        self
    }

    /// Attacks on sight.
    pub fn aggressive(mut self) -> Self {
        self.flags.aggressive = true;
        self
    }

    /// Will not fight back.
    pub fn friendly(mut self) -> Self {
        self.flags.friendly = true;
        self
    }

    /// Answers `talk` with `greeting`.
    pub fn talks(mut self, greeting: impl Into<String>) -> Self {
        self.flags.can_talk = true;
        self.greeting = Some(greeting.into());
        self
    }

    /// Fights with `weapon`. The weapon item must be placed with the actor.
    pub fn wielding(mut self, weapon: impl Into<ItemId>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    /// Weakened by `amount` while the player carries `weapon`.
    pub fn weak_to(mut self, weapon: impl Into<ItemId>, amount: i32) -> Self {
        self.weakness = Some(Weakness {
            weapon: weapon.into(),
            amount,
        });
        self
    }

    /// Set `flag` when this actor dies.
    pub fn on_death(mut self, flag: impl Into<String>) -> Self {
        self.death_flag = Some(flag.into());
        self
    }

    /// Whether the actor is alive.
    pub fn is_alive(&self) -> bool {
        self.flags.alive
    }

    /// Whether the actor will start or join a fight this turn.
    pub fn is_threat(&self) -> bool {
        self.flags.alive
            && self.flags.can_fight
            && !self.flags.friendly
            && (self.flags.aggressive || self.hostile)
    }

    /// Mark the actor dead. Inventory is left for the world to release.
    pub fn kill(&mut self) {
        self.strength = 0;
        self.flags.alive = false;
        self.hostile = false;
        self.staggered = false;
        self.distracted = false;
    }
}
