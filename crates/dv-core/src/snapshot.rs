//! Save games.
//!
//! A [`Snapshot`] holds only the dynamic part of a world. Restoring applies
//! it onto a freshly built world of the same adventure; names, descriptions
//! and connectivity always come from the world itself.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::actor::ActorFlags;
use crate::error::{CoreError, CoreResult};
use crate::flags::GameFlags;
use crate::id::{ActorId, ItemId, RoomId};
use crate::item::{ItemFlags, Location};
use crate::world::World;

/// Save format version written by this build.
pub const SAVE_VERSION: u32 = 1;

/// Saved player fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Health; zero means dead.
    pub health: i32,
    /// Wound penalty.
    pub wounds: i32,
    /// Carrying limit.
    pub max_weight: u32,
    /// Carried items in pick-up order.
    pub inventory: Vec<ItemId>,
}

/// Saved item fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    /// Where the item is.
    pub location: Location,
    /// Capability and state flags.
    pub flags: ItemFlags,
    /// Remaining fuel.
    pub fuel: i32,
    /// Glow level.
    pub glow: u8,
}

/// Saved actor fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorState {
    /// Room the actor is in.
    pub location: RoomId,
    /// Behavioural flags.
    pub flags: ActorFlags,
    /// Combat strength.
    pub strength: i32,
    /// Wielded weapon.
    pub weapon: Option<ItemId>,
    /// Carried items in pick-up order.
    pub inventory: Vec<ItemId>,
    /// Provoked into fighting.
    pub hostile: bool,
    /// Skips its next counter-attack.
    pub staggered: bool,
    /// Strength capped for the next exchange.
    pub distracted: bool,
}

/// The dynamic state of a world at one moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Save format version.
    pub version: u32,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Name of the adventure the snapshot belongs to.
    pub world: String,
    /// Room the player is in.
    pub location: RoomId,
    /// Points scored.
    pub score: i32,
    /// Moves taken.
    pub moves: u32,
    /// Every game flag.
    pub flags: GameFlags,
    /// Player fields.
    pub player: PlayerState,
    /// Rooms already entered.
    pub visited: BTreeSet<RoomId>,
    /// Per-item state.
    pub items: BTreeMap<ItemId, ItemState>,
    /// Per-actor state.
    pub actors: BTreeMap<ActorId, ActorState>,
}

impl World {
    /// Capture the dynamic state of this world.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SAVE_VERSION,
            saved_at: Utc::now(),
            world: self.meta.name.clone(),
            location: self.player.location.clone(),
            score: self.player.score,
            moves: self.player.moves,
            flags: self.flags.clone(),
            player: PlayerState {
                health: self.player.health,
                wounds: self.player.wounds,
                max_weight: self.player.max_weight,
                inventory: self.player.inventory.clone(),
            },
            visited: self.visited(),
            items: self
                .items()
                .map(|i| {
                    let state = ItemState {
                        location: i.location.clone(),
                        flags: i.flags,
                        fuel: i.fuel,
                        glow: i.glow,
                    };
                    (i.id.clone(), state)
                })
                .collect(),
            actors: self
                .actors()
                .map(|a| {
                    let state = ActorState {
                        location: a.location.clone(),
                        flags: a.flags,
                        strength: a.strength,
                        weapon: a.weapon.clone(),
                        inventory: a.inventory.clone(),
                        hostile: a.hostile,
                        staggered: a.staggered,
                        distracted: a.distracted,
                    };
                    (a.id.clone(), state)
                })
                .collect(),
        }
    }

    /// Apply a snapshot onto this world.
    ///
    /// Every identifier in the snapshot is checked first; on error nothing
    /// has been changed.
    pub fn restore(&mut self, snapshot: Snapshot) -> CoreResult<()> {
        if snapshot.version != SAVE_VERSION {
            return Err(CoreError::VersionMismatch {
                expected: SAVE_VERSION,
                found: snapshot.version,
            });
        }
        self.check_snapshot(&snapshot)?;

        self.player.location = snapshot.location;
        self.player.score = snapshot.score;
        self.player.moves = snapshot.moves;
        self.player.health = snapshot.player.health;
        self.player.wounds = snapshot.player.wounds;
        self.player.max_weight = snapshot.player.max_weight;
        self.player.inventory = snapshot.player.inventory;
        self.flags = snapshot.flags;

        let room_ids: Vec<RoomId> = self.rooms().map(|r| r.id.clone()).collect();
        for id in room_ids {
            if let Some(room) = self.room_mut(&id) {
                room.first_visit = !snapshot.visited.contains(&id);
            }
        }
        for (id, state) in snapshot.items {
            if let Some(item) = self.item_mut(&id) {
                item.location = state.location;
                item.flags = state.flags;
                item.fuel = state.fuel;
                item.glow = state.glow;
            }
        }
        for (id, state) in snapshot.actors {
            if let Some(actor) = self.actor_mut(&id) {
                actor.location = state.location;
                actor.flags = state.flags;
                actor.strength = state.strength;
                actor.weapon = state.weapon;
                actor.inventory = state.inventory;
                actor.hostile = state.hostile;
                actor.staggered = state.staggered;
                actor.distracted = state.distracted;
            }
        }
        self.reindex();
        info!("restored game at move {}", self.player.moves);
        Ok(())
    }

    fn check_snapshot(&self, snapshot: &Snapshot) -> CoreResult<()> {
        self.require_room(&snapshot.location)?;
        for id in &snapshot.visited {
            self.require_room(id)?;
        }
        for id in &snapshot.player.inventory {
            self.require_item(id)?;
        }
        for (id, state) in &snapshot.items {
            self.require_item(id)?;
            match &state.location {
                Location::Room(r) => self.require_room(r)?,
                Location::Item(c) => self.require_item(c)?,
                Location::Actor(a) => self.require_actor(a)?,
                Location::Inventory | Location::Global | Location::Nowhere => {}
            }
        }
        for (id, state) in &snapshot.actors {
            self.require_actor(id)?;
            self.require_room(&state.location)?;
            for item in state.inventory.iter().chain(state.weapon.iter()) {
                self.require_item(item)?;
            }
        }
        Ok(())
    }

    fn require_room(&self, id: &RoomId) -> CoreResult<()> {
        self.room(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::RoomNotFound(id.clone()))
    }

    fn require_item(&self, id: &ItemId) -> CoreResult<()> {
        self.item(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::ItemNotFound(id.clone()))
    }

    fn require_actor(&self, id: &ActorId) -> CoreResult<()> {
        self.actor(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::ActorNotFound(id.clone()))
    }
}

/// Write a snapshot as JSON. The parent directory must already exist.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> CoreResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.is_dir()
    {
        return Err(CoreError::SaveDirMissing(dir.to_path_buf()));
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    info!("saved game to {}", path.display());
    Ok(())
}

/// Read a snapshot, checking the version before the rest of the file.
pub fn load_snapshot(path: &Path) -> CoreResult<Snapshot> {
    let json = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let found = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0);
    if found != u64::from(SAVE_VERSION) {
        return Err(CoreError::VersionMismatch {
            expected: SAVE_VERSION,
            found: u32::try_from(found).unwrap_or(u32::MAX),
        });
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;
    use crate::direction::Direction;
    use crate::item::Item;
    use crate::room::{Exit, Room};
    use crate::world::WorldMeta;

    fn world() -> World {
        let mut world = World::new(WorldMeta::new("Test", "hall", 10));
        world
            .add_room(Room::new("hall", "Hall", "").lit().exit(Direction::North, Exit::new("den")))
            .unwrap();
        world.add_room(Room::new("den", "Den", "").lit()).unwrap();
        world
            .add_item(Item::new("lamp", "lamp", "").takeable().light_source(50).in_room("hall"))
            .unwrap();
        world
            .add_actor(Actor::new("ogre", "ogre", "", "den").fighter(4).wielding("club"))
            .unwrap();
        world
            .add_item(Item::new("club", "club", "").weapon().held_by("ogre"))
            .unwrap();
        world
    }

    #[test]
    fn restore_brings_back_dynamic_state() {
        let mut played = world();
        played.take_item(&ItemId::from("lamp")).unwrap();
        played.item_mut(&ItemId::from("lamp")).unwrap().flags.lit = true;
        played.travel(Direction::North).unwrap();
        played.flags.set("met_ogre", true);
        played.actor_mut(&ActorId::from("ogre")).unwrap().strength = 1;
        played.tick(30);
        let snapshot = played.snapshot();

        let mut fresh = world();
        fresh.restore(snapshot).unwrap();
        assert_eq!(fresh.player.location, RoomId::from("den"));
        assert_eq!(fresh.player.inventory, vec![ItemId::from("lamp")]);
        assert!(fresh.item(&ItemId::from("lamp")).unwrap().flags.lit);
        assert_eq!(fresh.item(&ItemId::from("lamp")).unwrap().fuel, 49);
        assert!(fresh.flags.is_set("met_ogre"));
        assert_eq!(fresh.actor(&ActorId::from("ogre")).unwrap().strength, 1);
        assert!(!fresh.room(&RoomId::from("den")).unwrap().first_visit);
        assert!(fresh.room(&RoomId::from("hall")).unwrap().items.is_empty());
        assert_eq!(fresh.player.moves, 1);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let mut fresh = world();
        let mut snapshot = fresh.snapshot();
        snapshot.version = 99;
        let err = fresh.restore(snapshot).unwrap_err();
        assert!(matches!(err, CoreError::VersionMismatch { found: 99, .. }));
    }

    #[test]
    fn unknown_ids_leave_world_untouched() {
        let mut played = world();
        let mut snapshot = played.snapshot();
        snapshot.score = 7;
        snapshot.location = RoomId::from("attic");
        assert!(played.restore(snapshot).is_err());
        assert_eq!(played.player.score, 0);
        assert_eq!(played.player.location, RoomId::from("hall"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.sav");
        let mut played = world();
        played.take_item(&ItemId::from("lamp")).unwrap();
        save_snapshot(&played.snapshot(), &path).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        let mut fresh = world();
        fresh.restore(loaded).unwrap();
        assert!(fresh.player.carries(&ItemId::from("lamp")));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("game.sav");
        let err = save_snapshot(&world().snapshot(), &path).unwrap_err();
        assert!(matches!(err, CoreError::SaveDirMissing(_)));
    }

    #[test]
    fn load_checks_version_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.sav");
        fs::write(&path, r#"{"version": 0, "something": "else"}"#).unwrap();
        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, CoreError::VersionMismatch { found: 0, .. }));
    }
}
