use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::flags::GameFlags;
use crate::id::{ActorId, ItemId, RoomId};
use crate::item::{Item, Location};
use crate::player::Player;
use crate::room::Room;

/// Fuel level at which a light source starts to warn.
const DIM_WARNING: i32 = 20;

/// Metadata about the world itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title of the adventure.
    pub name: String,
    /// Text shown when a game starts.
    #[serde(default)]
    pub intro: String,
    /// Room the player starts in.
    pub start: RoomId,
    /// Score that wins the game.
    pub max_score: i32,
}

impl WorldMeta {
    /// Metadata with an empty intro.
    pub fn new(name: impl Into<String>, start: impl Into<RoomId>, max_score: i32) -> Self {
        Self {
            name: name.into(),
            intro: String::new(),
            start: start.into(),
            max_score,
        }
    }

    /// Set the intro text.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }
}

/// Why the player could not move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TravelError {
    /// No exit in that direction.
    #[error("You can't go that way.")]
    NoExit,
    /// The exit's condition is not met.
    #[error("{0}")]
    Blocked(String),
    /// The exit leads to a room that does not exist.
    #[error("You can't go that way.")]
    MissingRoom(RoomId),
    /// The destination is dark and the player has no light.
    #[error("It is pitch black in there. Without a light you would surely be eaten by a grue.")]
    TooDark,
}

/// A completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// Room the player is now in.
    pub room: RoomId,
    /// Whether this was the first time the player entered it.
    pub first_visit: bool,
}

/// Result of opening or closing something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The open flag changed.
    Changed,
    /// It was already open.
    AlreadyOpen,
    /// It was already closed.
    AlreadyClosed,
    /// Not a container or door.
    NotOpenable,
}

/// Why an item could not be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TakeError {
    /// Not reachable from here.
    #[error("You can't see any such thing.")]
    NotHere,
    /// Already in the inventory.
    #[error("You already have that!")]
    AlreadyCarried,
    /// Fixed in place.
    #[error("You can't take that.")]
    NotTakeable,
    /// Would exceed the carrying limit.
    #[error("Your load is too heavy.")]
    TooHeavy,
}

/// Why an item could not be dropped, put or given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The player does not have the item.
    #[error("You're not carrying that.")]
    NotCarried,
    /// The target is not here.
    #[error("You can't see any such thing.")]
    TargetNotHere,
    /// The target cannot hold things.
    #[error("You can't put anything in that.")]
    NotContainer,
    /// The container is closed.
    #[error("It's closed.")]
    Closed,
    /// The container is full.
    #[error("There's no room.")]
    NoRoom,
    /// An item cannot contain itself.
    #[error("You can't do that.")]
    IntoItself,
}

/// The world model: an arena of rooms, items and actors addressed by id.
///
/// Item locations are the source of truth; `Room::items`, `Player::inventory`
/// and `Actor::inventory` are indexes kept in step by [`World::move_item`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Metadata about the adventure.
    pub meta: WorldMeta,
    rooms: BTreeMap<RoomId, Room>,
    items: BTreeMap<ItemId, Item>,
    actors: BTreeMap<ActorId, Actor>,
    /// The adventurer.
    pub player: Player,
    /// Persistent switches.
    #[serde(default)]
    pub flags: GameFlags,
}

impl World {
    /// An empty world with the player at `meta.start`.
    pub fn new(meta: WorldMeta) -> Self {
        let player = Player::new(meta.start.clone());
        Self {
            meta,
            rooms: BTreeMap::new(),
            items: BTreeMap::new(),
            actors: BTreeMap::new(),
            player,
            flags: GameFlags::new(),
        }
    }

    /// Parse a world from JSON and rebuild its indexes.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let mut world: World = serde_json::from_str(json)?;
        world.reindex();
        Ok(world)
    }

    /// Serialize the world as pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a room.
    pub fn add_room(&mut self, room: Room) -> CoreResult<()> {
        if self.rooms.contains_key(&room.id) {
            return Err(CoreError::DuplicateId(room.id.to_string()));
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    /// Add an item. Its location must already exist.
    pub fn add_item(&mut self, item: Item) -> CoreResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(CoreError::DuplicateId(item.id.to_string()));
        }
        self.check_destination(&item.id, &item.location)?;
        let id = item.id.clone();
        let location = item.location.clone();
        self.items.insert(id.clone(), item);
        self.attach(&id, &location);
        Ok(())
    }

    /// Add an actor. Its room must already exist.
    pub fn add_actor(&mut self, actor: Actor) -> CoreResult<()> {
        if self.actors.contains_key(&actor.id) {
            return Err(CoreError::DuplicateId(actor.id.to_string()));
        }
        let room = self
            .rooms
            .get_mut(&actor.location)
            .ok_or_else(|| CoreError::RoomNotFound(actor.location.clone()))?;
        room.actors.insert(actor.id.clone());
        self.actors.insert(actor.id.clone(), actor);
        Ok(())
    }

    /// Rebuild every derived index from item and actor locations.
    ///
    /// Existing inventory order is kept for items still held; newly found
    /// items are appended in id order.
    pub fn reindex(&mut self) {
        for room in self.rooms.values_mut() {
            room.items.clear();
            room.actors.clear();
        }
        for actor in self.actors.values() {
            match self.rooms.get_mut(&actor.location) {
                Some(room) => {
                    room.actors.insert(actor.id.clone());
                }
                None => warn!("actor {} stands in missing room {}", actor.id, actor.location),
            }
        }

        let items = &self.items;
        self.player
            .inventory
            .retain(|id| items.get(id).is_some_and(|i| i.location == Location::Inventory));
        for actor in self.actors.values_mut() {
            let here = Location::Actor(actor.id.clone());
            actor
                .inventory
                .retain(|id| items.get(id).is_some_and(|i| i.location == here));
        }

        for item in self.items.values() {
            match &item.location {
                Location::Room(r) => match self.rooms.get_mut(r) {
                    Some(room) => {
                        room.items.insert(item.id.clone());
                    }
                    None => warn!("item {} lies in missing room {r}", item.id),
                },
                Location::Inventory => {
                    if !self.player.inventory.contains(&item.id) {
                        self.player.inventory.push(item.id.clone());
                    }
                }
                Location::Actor(a) => match self.actors.get_mut(a) {
                    Some(actor) => {
                        if !actor.inventory.contains(&item.id) {
                            actor.inventory.push(item.id.clone());
                        }
                    }
                    None => warn!("item {} held by missing actor {a}", item.id),
                },
                Location::Item(_) | Location::Global | Location::Nowhere => {}
            }
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a room by id.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get a mutable room by id.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Get an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Get a mutable item by id. Use [`World::move_item`] to change location.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    /// Get an actor by id.
    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Get a mutable actor by id.
    pub fn actor_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// All items in id order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// All actors in id order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// The room the player is in.
    pub fn current_room(&self) -> CoreResult<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| CoreError::RoomNotFound(self.player.location.clone()))
    }

    /// Items whose location is the container `id`, in id order.
    pub fn contents(&self, id: &ItemId) -> Vec<ItemId> {
        let here = Location::Item(id.clone());
        self.items
            .values()
            .filter(|i| i.location == here)
            .map(|i| i.id.clone())
            .collect()
    }

    /// Follow container links up to the outermost location.
    pub fn root_location(&self, id: &ItemId) -> Option<Location> {
        let mut current = self.items.get(id)?;
        for _ in 0..=self.items.len() {
            match &current.location {
                Location::Item(parent) => current = self.items.get(parent)?,
                other => return Some(other.clone()),
            }
        }
        warn!("containment cycle through item {id}");
        None
    }

    /// Whether the player can touch `id` right now.
    ///
    /// Reachable means: in the current room, carried, global scenery listed
    /// by the current room, or inside an open or transparent container that
    /// is itself reachable. Invisible items are never reachable.
    pub fn is_reachable(&self, id: &ItemId) -> bool {
        let Some(mut item) = self.items.get(id) else {
            return false;
        };
        if item.flags.invisible {
            return false;
        }
        for _ in 0..=self.items.len() {
            match &item.location {
                Location::Room(r) => return *r == self.player.location,
                Location::Inventory => return true,
                Location::Global => {
                    return self
                        .rooms
                        .get(&self.player.location)
                        .is_some_and(|room| room.scenery.contains(&item.id));
                }
                Location::Actor(_) | Location::Nowhere => return false,
                Location::Item(parent) => match self.items.get(parent) {
                    Some(container) if container.shows_contents() => item = container,
                    _ => return false,
                },
            }
        }
        false
    }

    /// Find a reachable item by id, name or alias.
    ///
    /// Items around the player are preferred over carried ones.
    pub fn find_item_by_name(&self, name: &str) -> Option<ItemId> {
        let mut carried = None;
        for item in self.items.values() {
            if !(item.id.as_str().eq_ignore_ascii_case(name) || item.answers_to(name)) {
                continue;
            }
            if !self.is_reachable(&item.id) {
                continue;
            }
            if self.root_location(&item.id) == Some(Location::Inventory) {
                carried.get_or_insert_with(|| item.id.clone());
            } else {
                return Some(item.id.clone());
            }
        }
        carried
    }

    /// Find an actor in the current room by display name or id.
    pub fn find_actor_by_name(&self, name: &str, living_only: bool) -> Option<ActorId> {
        let room = self.rooms.get(&self.player.location)?;
        room.actors
            .iter()
            .filter_map(|id| self.actors.get(id))
            .filter(|a| !living_only || a.is_alive())
            .find(|a| a.name.eq_ignore_ascii_case(name) || a.id.as_str().eq_ignore_ascii_case(name))
            .map(|a| a.id.clone())
    }

    /// Whether the player carries `id`, directly or in a carried container.
    pub fn is_carried(&self, id: &ItemId) -> bool {
        self.root_location(id) == Some(Location::Inventory)
    }

    /// Weight of an item plus everything inside it.
    pub fn total_weight(&self, id: &ItemId) -> u32 {
        let own = self.items.get(id).map_or(0, |i| i.weight);
        own + self
            .contents(id)
            .iter()
            .map(|c| self.total_weight(c))
            .sum::<u32>()
    }

    /// Total weight the player carries.
    pub fn carried_weight(&self) -> u32 {
        self.player
            .inventory
            .iter()
            .map(|id| self.total_weight(id))
            .sum()
    }

    /// The first weapon in the player's inventory.
    pub fn player_weapon(&self) -> Option<ItemId> {
        self.player
            .inventory
            .iter()
            .find(|id| self.items.get(*id).is_some_and(|i| i.flags.weapon))
            .cloned()
    }

    /// Whether `room` is lit by itself or by a light the player carries.
    ///
    /// A carried light counts when nested in open or transparent
    /// containers, the same way [`World::is_reachable`] sees through them.
    pub fn is_lit(&self, room: &RoomId) -> bool {
        if self.rooms.get(room).is_some_and(|r| r.flags.provides_light) {
            return true;
        }
        self.items
            .values()
            .filter(|i| i.gives_light())
            .any(|i| self.is_carried(&i.id) && self.is_reachable(&i.id))
    }

    /// Living actors in the current room, in id order.
    pub fn actors_here(&self) -> Vec<ActorId> {
        self.rooms
            .get(&self.player.location)
            .map(|room| {
                room.actors
                    .iter()
                    .filter(|id| self.actors.get(*id).is_some_and(Actor::is_alive))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Move the player one step.
    ///
    /// Fails without changing anything when there is no exit, the exit's
    /// condition is unmet, the destination is missing, or the destination is
    /// dark and the player carries no light.
    pub fn travel(&mut self, direction: Direction) -> Result<Arrival, TravelError> {
        let room = self
            .rooms
            .get(&self.player.location)
            .ok_or_else(|| TravelError::MissingRoom(self.player.location.clone()))?;
        let exit = room.exit_to(direction).ok_or(TravelError::NoExit)?;
        if !exit.is_passable(&self.flags) {
            let message = exit
                .message
                .clone()
                .unwrap_or_else(|| "The way is blocked.".to_string());
            return Err(TravelError::Blocked(message));
        }
        let dest_id = exit.to.clone();
        let dest = self
            .rooms
            .get(&dest_id)
            .ok_or_else(|| TravelError::MissingRoom(dest_id.clone()))?;
        if dest.flags.inherently_dark && !self.is_lit(&dest_id) {
            debug!("refused dark room {dest_id}");
            return Err(TravelError::TooDark);
        }

        let dest = self
            .rooms
            .get_mut(&dest_id)
            .ok_or_else(|| TravelError::MissingRoom(dest_id.clone()))?;
        let first_visit = dest.first_visit;
        dest.first_visit = false;
        debug!("player {} -> {dest_id}", self.player.location);
        self.player.location = dest_id.clone();
        Ok(Arrival {
            room: dest_id,
            first_visit,
        })
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Move an item anywhere, keeping every index consistent.
    pub fn move_item(&mut self, id: &ItemId, to: Location) -> CoreResult<()> {
        let from = self
            .items
            .get(id)
            .map(|i| i.location.clone())
            .ok_or_else(|| CoreError::ItemNotFound(id.clone()))?;
        self.check_destination(id, &to)?;
        self.detach(id, &from);
        if let Some(item) = self.items.get_mut(id) {
            item.location = to.clone();
            if to != Location::Inventory {
                item.flags.worn = false;
            }
        }
        self.attach(id, &to);
        Ok(())
    }

    /// Open a container or door.
    pub fn open_item(&mut self, id: &ItemId) -> ToggleOutcome {
        self.set_open(id, true)
    }

    /// Close a container or door.
    pub fn close_item(&mut self, id: &ItemId) -> ToggleOutcome {
        self.set_open(id, false)
    }

    fn set_open(&mut self, id: &ItemId, open: bool) -> ToggleOutcome {
        let Some(item) = self.items.get_mut(id) else {
            return ToggleOutcome::NotOpenable;
        };
        if !item.is_openable() {
            return ToggleOutcome::NotOpenable;
        }
        if item.flags.open == open {
            return if open {
                ToggleOutcome::AlreadyOpen
            } else {
                ToggleOutcome::AlreadyClosed
            };
        }
        item.flags.open = open;
        if item.flags.door
            && let Some(flag) = item.flag.clone()
        {
            self.flags.set(flag, open);
        }
        ToggleOutcome::Changed
    }

    /// Pick an item up. Scores a treasure the first time it is taken.
    pub fn take_item(&mut self, id: &ItemId) -> Result<(), TakeError> {
        let item = self.items.get(id).ok_or(TakeError::NotHere)?;
        if item.location == Location::Inventory {
            return Err(TakeError::AlreadyCarried);
        }
        if !self.is_reachable(id) {
            return Err(TakeError::NotHere);
        }
        if !item.flags.takeable {
            return Err(TakeError::NotTakeable);
        }
        if self.carried_weight() + self.total_weight(id) > self.player.max_weight {
            return Err(TakeError::TooHeavy);
        }
        self.move_item(id, Location::Inventory)
            .map_err(|_| TakeError::NotHere)?;
        if let Some(item) = self.items.get_mut(id)
            && item.flags.treasure
            && !item.flags.scored
        {
            item.flags.scored = true;
            self.player.score += item.value;
            debug!("scored {} for {id}", item.value);
        }
        Ok(())
    }

    /// Drop a carried item into the current room.
    pub fn drop_item(&mut self, id: &ItemId) -> Result<(), TransferError> {
        if !self.player.carries(id) {
            return Err(TransferError::NotCarried);
        }
        let here = Location::Room(self.player.location.clone());
        self.move_item(id, here)
            .map_err(|_| TransferError::NotCarried)
    }

    /// Put a carried item into a reachable, open container.
    pub fn put_item(&mut self, id: &ItemId, container: &ItemId) -> Result<(), TransferError> {
        if !self.player.carries(id) {
            return Err(TransferError::NotCarried);
        }
        if id == container || self.is_inside(container, id) {
            return Err(TransferError::IntoItself);
        }
        if !self.is_reachable(container) {
            return Err(TransferError::TargetNotHere);
        }
        let target = self.items.get(container).ok_or(TransferError::TargetNotHere)?;
        if !target.flags.container {
            return Err(TransferError::NotContainer);
        }
        if !target.flags.open {
            return Err(TransferError::Closed);
        }
        if let Some(capacity) = target.capacity {
            let held: u32 = self
                .contents(container)
                .iter()
                .map(|c| self.total_weight(c))
                .sum();
            if held + self.total_weight(id) > capacity {
                return Err(TransferError::NoRoom);
            }
        }
        self.move_item(id, Location::Item(container.clone()))
            .map_err(|_| TransferError::TargetNotHere)
    }

    /// Hand a carried item to a living actor in the current room.
    pub fn give_item(&mut self, id: &ItemId, actor: &ActorId) -> Result<(), TransferError> {
        if !self.player.carries(id) {
            return Err(TransferError::NotCarried);
        }
        let present = self
            .actors
            .get(actor)
            .is_some_and(|a| a.is_alive() && a.location == self.player.location);
        if !present {
            return Err(TransferError::TargetNotHere);
        }
        self.move_item(id, Location::Actor(actor.clone()))
            .map_err(|_| TransferError::TargetNotHere)
    }

    /// Drop everything an actor carries into its room.
    pub fn release_inventory(&mut self, actor: &ActorId) -> CoreResult<Vec<ItemId>> {
        let (room, carried) = {
            let a = self
                .actors
                .get(actor)
                .ok_or_else(|| CoreError::ActorNotFound(actor.clone()))?;
            (a.location.clone(), a.inventory.clone())
        };
        for id in &carried {
            self.move_item(id, Location::Room(room.clone()))?;
        }
        Ok(carried)
    }

    /// Kill an actor: strength to zero, inventory dropped, death flag set.
    pub fn kill_actor(&mut self, actor: &ActorId) -> CoreResult<Vec<ItemId>> {
        let a = self
            .actors
            .get_mut(actor)
            .ok_or_else(|| CoreError::ActorNotFound(actor.clone()))?;
        a.kill();
        if let Some(flag) = a.death_flag.clone() {
            self.flags.set(flag, true);
        }
        self.release_inventory(actor)
    }

    /// Advance one turn: count the move, burn fuel, heal wounds.
    ///
    /// Returns messages for anything the player would notice.
    pub fn tick(&mut self, heal_interval: u32) -> Vec<String> {
        self.player.moves += 1;
        let mut messages = Vec::new();

        let burning: Vec<ItemId> = self
            .items
            .values()
            .filter(|i| i.gives_light() && i.fuel > 0)
            .map(|i| i.id.clone())
            .collect();
        for id in burning {
            let noticed = self.is_noticeable(&id);
            let Some(item) = self.items.get_mut(&id) else {
                continue;
            };
            item.fuel -= 1;
            if item.fuel == 0 {
                item.flags.lit = false;
                debug!("{id} ran out of fuel");
                if noticed {
                    messages.push(format!("The {} has gone out.", item.name));
                }
            } else if item.fuel == DIM_WARNING && noticed {
                messages.push(format!("The {} is growing dim.", item.name));
            }
        }

        if heal_interval > 0 && self.player.moves % heal_interval == 0 && self.player.heal() {
            debug!("healed to {}", self.player.wounds);
        }
        messages
    }

    fn is_noticeable(&self, id: &ItemId) -> bool {
        match self.root_location(id) {
            Some(Location::Inventory) => true,
            Some(Location::Room(r)) => r == self.player.location,
            _ => false,
        }
    }

    /// Whether `inner` is somewhere inside `outer`.
    fn is_inside(&self, inner: &ItemId, outer: &ItemId) -> bool {
        let mut current = inner.clone();
        for _ in 0..=self.items.len() {
            match self.items.get(&current).map(|i| &i.location) {
                Some(Location::Item(parent)) if parent == outer => return true,
                Some(Location::Item(parent)) => current = parent.clone(),
                _ => return false,
            }
        }
        false
    }

    fn check_destination(&self, id: &ItemId, to: &Location) -> CoreResult<()> {
        let exists = match to {
            Location::Room(r) => self.rooms.contains_key(r),
            Location::Item(c) => {
                self.items.contains_key(c) && c != id && !self.is_inside(c, id)
            }
            Location::Actor(a) => self.actors.contains_key(a),
            Location::Inventory | Location::Global | Location::Nowhere => true,
        };
        if exists {
            Ok(())
        } else {
            Err(CoreError::InvalidLocation {
                item: id.clone(),
                location: to.to_string(),
            })
        }
    }

    fn attach(&mut self, id: &ItemId, location: &Location) {
        match location {
            Location::Room(r) => {
                if let Some(room) = self.rooms.get_mut(r) {
                    room.items.insert(id.clone());
                }
            }
            Location::Inventory => self.player.inventory.push(id.clone()),
            Location::Actor(a) => {
                if let Some(actor) = self.actors.get_mut(a) {
                    actor.inventory.push(id.clone());
                }
            }
            Location::Item(_) | Location::Global | Location::Nowhere => {}
        }
    }

    fn detach(&mut self, id: &ItemId, location: &Location) {
        match location {
            Location::Room(r) => {
                if let Some(room) = self.rooms.get_mut(r) {
                    room.items.remove(id);
                }
            }
            Location::Inventory => self.player.inventory.retain(|i| i != id),
            Location::Actor(a) => {
                if let Some(actor) = self.actors.get_mut(a) {
                    actor.inventory.retain(|i| i != id);
                    if actor.weapon.as_ref() == Some(id) {
                        actor.weapon = None;
                    }
                }
            }
            Location::Item(_) | Location::Global | Location::Nowhere => {}
        }
    }

    /// Ids of rooms the player has entered at least once.
    pub fn visited(&self) -> BTreeSet<RoomId> {
        self.rooms
            .values()
            .filter(|r| !r.first_visit)
            .map(|r| r.id.clone())
            .collect()
    }
}
