use dv_core::{Item, ItemId, RoomId, World};

use super::config::{NarratorConfig, Verbosity};

/// Shown instead of a room when there is no light.
pub const PITCH_BLACK: &str = "It is pitch black. You are likely to be eaten by a grue.";

/// Prefix a name with "a" or "an".
pub fn with_article(name: &str) -> String {
    let vowel = name
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    if vowel {
        format!("an {name}")
    } else {
        format!("a {name}")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns world state into text.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator with the given config.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    /// The current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.config.verbosity
    }

    /// Change the verbosity.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.config.verbosity = verbosity;
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Describe the room just entered, as much as the verbosity allows.
    pub fn describe_arrival(&self, world: &World, room: &RoomId, first_visit: bool) -> String {
        match self.config.verbosity {
            Verbosity::Superbrief => world
                .room(room)
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            v => self.describe_room(world, room, v.describes_fully(first_visit)),
        }
    }

    /// Describe a room: name, optionally the long text, then what is here.
    pub fn describe_room(&self, world: &World, room: &RoomId, full: bool) -> String {
        let Some(r) = world.room(room) else {
            return String::new();
        };
        if !world.is_lit(room) {
            return PITCH_BLACK.to_string();
        }

        let mut lines = vec![r.name.clone()];
        if full && !r.description.is_empty() {
            lines.push(r.description.clone());
        }
        for item in r.items.iter().filter_map(|id| world.item(id)) {
            if item.flags.no_list || item.flags.invisible {
                continue;
            }
            lines.push(format!("There is {} here.", with_article(&item.name)));
            if item.shows_contents() {
                list_contents(world, &item.id, 1, &mut lines);
            }
        }
        for actor in r.actors.iter().filter_map(|id| world.actor(id)) {
            if !actor.is_alive() {
                continue;
            }
            if actor.description.is_empty() {
                lines.push(format!("There is {} here.", with_article(&actor.name)));
            } else {
                lines.push(actor.description.clone());
            }
        }
        lines.join("\n")
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// The text for `examine`.
    pub fn describe_item(&self, world: &World, item: &Item) -> String {
        let mut lines = Vec::new();
        if item.description.is_empty() {
            lines.push(format!("There's nothing special about the {}.", item.name));
        } else {
            lines.push(item.description.clone());
        }
        if item.flags.door {
            let state = if item.flags.open { "open" } else { "closed" };
            lines.push(format!("The {} is {state}.", item.name));
        } else if item.flags.container {
            lines.push(self.describe_contents(world, item));
        }
        if item.flags.light_source {
            let state = if item.flags.lit { "on" } else { "off" };
            lines.push(format!("The {} is {state}.", item.name));
        }
        if let Some(glow) = glow_message(item) {
            lines.push(glow);
        }
        lines.join("\n")
    }

    /// The text for `look in`.
    pub fn describe_contents(&self, world: &World, item: &Item) -> String {
        if !item.flags.container {
            return format!("You can't look inside the {}.", item.name);
        }
        if !item.shows_contents() {
            return format!("The {} is closed.", item.name);
        }
        let mut lines = Vec::new();
        list_contents(world, &item.id, 1, &mut lines);
        if lines.is_empty() {
            format!("The {} is empty.", item.name)
        } else {
            lines.insert(0, format!("The {} contains:", item.name));
            lines.join("\n")
        }
    }

    /// What the player is carrying.
    pub fn describe_inventory(&self, world: &World) -> String {
        if world.player.inventory.is_empty() {
            return "You are empty-handed.".to_string();
        }
        let mut lines = vec!["You are carrying:".to_string()];
        for item in world.player.inventory.iter().filter_map(|id| world.item(id)) {
            let mut line = format!("  {}", capitalize(&with_article(&item.name)));
            if item.gives_light() {
                line.push_str(" (providing light)");
            }
            if item.flags.worn {
                line.push_str(" (being worn)");
            }
            lines.push(line);
            if item.shows_contents() {
                list_contents(world, &item.id, 2, &mut lines);
            }
        }
        lines.join("\n")
    }
}

fn list_contents(world: &World, container: &ItemId, depth: usize, out: &mut Vec<String>) {
    for child in world.contents(container).iter().filter_map(|id| world.item(id)) {
        if child.flags.invisible {
            continue;
        }
        out.push(format!(
            "{}{}",
            "  ".repeat(depth),
            capitalize(&with_article(&child.name))
        ));
        if child.shows_contents() {
            list_contents(world, &child.id, depth + 1, out);
        }
    }
}

/// What a glowing weapon looks like at its current level.
pub fn glow_message(item: &Item) -> Option<String> {
    if !item.flags.glows {
        return None;
    }
    match item.glow {
        0 => None,
        1 => Some(format!("Your {} is glowing with a faint blue glow.", item.name)),
        _ => Some(format!("Your {} is glowing very brightly.", item.name)),
    }
}
