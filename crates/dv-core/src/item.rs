use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{ActorId, ItemId, RoomId};

/// Where an item currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Location {
    /// Lying in a room.
    Room(RoomId),
    /// Carried by the player.
    Inventory,
    /// Inside a container item.
    Item(ItemId),
    /// Carried by an actor.
    Actor(ActorId),
    /// Scenery reachable from every room that lists it.
    Global,
    /// Out of play (eaten, destroyed, not yet introduced).
    Nowhere,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(id) => write!(f, "room {id}"),
            Self::Inventory => write!(f, "the player's inventory"),
            Self::Item(id) => write!(f, "container {id}"),
            Self::Actor(id) => write!(f, "actor {id}"),
            Self::Global => write!(f, "global scenery"),
            Self::Nowhere => write!(f, "nowhere"),
        }
    }
}

/// Capability flags of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFlags {
    /// Can be picked up.
    pub takeable: bool,
    /// Can hold other items.
    pub container: bool,
    /// Container or door is open.
    pub open: bool,
    /// Contents are visible even when closed.
    pub transparent: bool,
    /// Has text to read.
    pub readable: bool,
    /// Can be eaten.
    pub edible: bool,
    /// Can be drunk.
    pub drinkable: bool,
    /// Usable in combat.
    pub weapon: bool,
    /// Can give light.
    pub light_source: bool,
    /// Currently giving light.
    pub lit: bool,
    /// Worth points.
    pub treasure: bool,
    /// Can be worn.
    pub wearable: bool,
    /// Currently worn.
    pub worn: bool,
    /// Not yet noticed by the player.
    pub invisible: bool,
    /// Opens and closes like a container but holds nothing.
    pub door: bool,
    /// Not listed separately in room descriptions.
    pub no_list: bool,
    /// Glows when danger is near.
    pub glows: bool,
    /// Its treasure value has already been scored.
    pub scored: bool,
}

/// A thing in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier.
    pub id: ItemId,
    /// Primary display name.
    pub name: String,
    /// Other names the item answers to.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Shown by `examine`.
    pub description: String,
    /// Current location.
    pub location: Location,
    /// Capability flags.
    #[serde(default)]
    pub flags: ItemFlags,
    /// Weight counted against the player's carrying limit.
    #[serde(default)]
    pub weight: u32,
    /// Points awarded the first time a treasure is taken.
    #[serde(default)]
    pub value: i32,
    /// Turns of light remaining; `-1` means it never runs out.
    #[serde(default = "infinite_fuel")]
    pub fuel: i32,
    /// 0 = dark, 1 = faint glow, 2 = bright glow.
    #[serde(default)]
    pub glow: u8,
    /// Text shown by `read`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Total weight a container can hold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Game flag this item drives (door state, moved scenery).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    /// Item uncovered when this one is moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveals: Option<ItemId>,
}

fn infinite_fuel() -> i32 {
    -1
}

impl Item {
    /// Create an item that is out of play until placed.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            location: Location::Nowhere,
            flags: ItemFlags::default(),
            weight: 0,
            value: 0,
            fuel: -1,
            glow: 0,
            text: None,
            capacity: None,
            flag: None,
            reveals: None,
        }
    }

    /// Add an alternative name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Place the item in a room.
    pub fn in_room(mut self, room: impl Into<RoomId>) -> Self {
        self.location = Location::Room(room.into());
        self
    }

    /// Place the item inside a container.
    pub fn inside(mut self, container: impl Into<ItemId>) -> Self {
        self.location = Location::Item(container.into());
        self
    }

    /// Start the item in the player's inventory.
    pub fn carried(mut self) -> Self {
        self.location = Location::Inventory;
        self
    }

    /// Start the item in an actor's hands.
    pub fn held_by(mut self, actor: impl Into<ActorId>) -> Self {
        self.location = Location::Actor(actor.into());
        self
    }

    /// Make the item global scenery.
    pub fn global(mut self) -> Self {
        self.location = Location::Global;
        self
    }

    /// Allow the item to be picked up.
    pub fn takeable(mut self) -> Self {
        self.flags.takeable = true;
        self
    }

    /// Let the item hold other items.
    pub fn container(mut self) -> Self {
        self.flags.container = true;
        self
    }

    /// Start open.
    pub fn open(mut self) -> Self {
        self.flags.open = true;
        self
    }

    /// Contents visible while closed.
    pub fn transparent(mut self) -> Self {
        self.flags.transparent = true;
        self
    }

    /// Give the item text to read.
    pub fn readable(mut self, text: impl Into<String>) -> Self {
        self.flags.readable = true;
        self.text = Some(text.into());
        self
    }

    /// Allow eating.
    pub fn edible(mut self) -> Self {
        self.flags.edible = true;
        self
    }

    /// Allow drinking.
    pub fn drinkable(mut self) -> Self {
        self.flags.drinkable = true;
        self
    }

    /// Usable in combat.
    pub fn weapon(mut self) -> Self {
        self.flags.weapon = true;
        self
    }

    /// A light source with `fuel` turns of light (`-1` for unlimited).
    pub fn light_source(mut self, fuel: i32) -> Self {
        self.flags.light_source = true;
        self.fuel = fuel;
        self
    }

    /// Start lit.
    pub fn lit(mut self) -> Self {
        self.flags.lit = true;
        self
    }

    /// A treasure worth `value` points.
    pub fn treasure(mut self, value: i32) -> Self {
        self.flags.treasure = true;
        self.value = value;
        self
    }

    /// Can be worn.
    pub fn wearable(mut self) -> Self {
        self.flags.wearable = true;
        self
    }

    /// Hidden until revealed.
    pub fn invisible(mut self) -> Self {
        self.flags.invisible = true;
        self
    }

    /// A door whose open state is mirrored into `flag`.
    pub fn door(mut self, flag: impl Into<String>) -> Self {
        self.flags.door = true;
        self.flag = Some(flag.into());
        self
    }

    /// Not listed in room descriptions.
    pub fn no_list(mut self) -> Self {
        self.flags.no_list = true;
        self
    }

    /// Glows when danger is near.
    pub fn glows(mut self) -> Self {
        self.flags.glows = true;
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the container capacity.
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set `flag` when the item is moved.
    pub fn controls(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Reveal another item when this one is moved.
    pub fn reveals(mut self, item: impl Into<ItemId>) -> Self {
        self.reveals = Some(item.into());
        self
    }

    /// Whether the item answers to `name` (display name or alias, any case).
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Containers and doors can be opened and closed.
    pub fn is_openable(&self) -> bool {
        self.flags.container || self.flags.door
    }

    /// Whether the contents of this container can be seen.
    pub fn shows_contents(&self) -> bool {
        self.flags.container && (self.flags.open || self.flags.transparent)
    }

    /// Whether this item is currently giving light.
    pub fn gives_light(&self) -> bool {
        self.flags.light_source && self.flags.lit
    }
}
