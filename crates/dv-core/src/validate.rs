//! Consistency checks for authored worlds.
//!
//! A world built through [`World::add_item`] and friends cannot hold an item
//! in a missing place, but a world read from JSON can, and exits are never
//! checked at construction time.

use std::fmt;

use crate::item::Location;
use crate::world::World;

/// A warning or error found while checking a world.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The entity where the issue was found.
    pub entity: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.entity, self.message)
    }
}

impl World {
    /// Check the world for broken references and unreachable content.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.room(&self.meta.start).is_none() {
            issues.push(ValidationIssue::error(
                "world",
                format!("start room '{}' does not exist", self.meta.start),
            ));
        }

        for room in self.rooms() {
            let entity = format!("room '{}'", room.id);
            for (direction, exit) in &room.exits {
                if self.room(&exit.to).is_none() {
                    issues.push(ValidationIssue::error(
                        entity.clone(),
                        format!("exit {direction} leads to missing room '{}'", exit.to),
                    ));
                }
                if exit.condition.is_some() && exit.message.is_none() {
                    issues.push(ValidationIssue::warning(
                        entity.clone(),
                        format!("gated exit {direction} has no block message"),
                    ));
                }
            }
            for id in &room.scenery {
                match self.item(id) {
                    None => issues.push(ValidationIssue::error(
                        entity.clone(),
                        format!("scenery item '{id}' does not exist"),
                    )),
                    Some(item) if item.location != Location::Global => {
                        issues.push(ValidationIssue::warning(
                            entity.clone(),
                            format!("scenery item '{id}' is not global"),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }

        for item in self.items() {
            let entity = format!("item '{}'", item.id);
            let place_exists = match &item.location {
                Location::Room(r) => self.room(r).is_some(),
                Location::Item(c) => self.item(c).is_some_and(|c| c.flags.container),
                Location::Actor(a) => self.actor(a).is_some(),
                Location::Inventory | Location::Global | Location::Nowhere => true,
            };
            if !place_exists {
                issues.push(ValidationIssue::error(
                    entity.clone(),
                    format!("located in {}, which is missing or not a container", item.location),
                ));
            } else if self.root_location(&item.id).is_none() {
                issues.push(ValidationIssue::error(entity.clone(), "containment cycle"));
            }
            if let Some(reveals) = &item.reveals
                && self.item(reveals).is_none()
            {
                issues.push(ValidationIssue::error(
                    entity.clone(),
                    format!("reveals missing item '{reveals}'"),
                ));
            }
            if item.flags.door && item.flag.is_none() {
                issues.push(ValidationIssue::warning(entity, "door controls no flag"));
            }
        }

        for actor in self.actors() {
            let entity = format!("actor '{}'", actor.id);
            if self.room(&actor.location).is_none() {
                issues.push(ValidationIssue::error(
                    entity.clone(),
                    format!("stands in missing room '{}'", actor.location),
                ));
            }
            if let Some(weapon) = &actor.weapon
                && !actor.inventory.contains(weapon)
            {
                issues.push(ValidationIssue::error(
                    entity.clone(),
                    format!("wields '{weapon}' but does not carry it"),
                ));
            }
            if let Some(weakness) = &actor.weakness
                && self.item(&weakness.weapon).is_none()
            {
                issues.push(ValidationIssue::warning(
                    entity,
                    format!("weak to missing item '{}'", weakness.weapon),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;
    use crate::direction::Direction;
    use crate::item::Item;
    use crate::room::{Exit, Room};
    use crate::world::WorldMeta;

    #[test]
    fn clean_world_has_no_issues() {
        let mut world = World::new(WorldMeta::new("Test", "hall", 0));
        world
            .add_room(Room::new("hall", "Hall", "").exit(Direction::North, Exit::new("den")))
            .unwrap();
        world
            .add_room(Room::new("den", "Den", "").exit(Direction::South, Exit::new("hall")))
            .unwrap();
        assert!(world.validate().is_empty());
    }

    #[test]
    fn reports_broken_references() {
        let mut world = World::new(WorldMeta::new("Test", "lobby", 0));
        world
            .add_room(Room::new("hall", "Hall", "").exit(Direction::North, Exit::new("den")))
            .unwrap();
        world
            .add_actor(Actor::new("ogre", "ogre", "", "hall").wielding("club"))
            .unwrap();

        let issues = world.validate();
        let errors: Vec<String> = issues
            .iter()
            .filter(|i| i.is_error)
            .map(ToString::to_string)
            .collect();
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("start room 'lobby'")));
        assert!(errors.iter().any(|e| e.contains("missing room 'den'")));
        assert!(errors.iter().any(|e| e.contains("wields 'club'")));
    }

    #[test]
    fn json_world_with_dangling_item_is_flagged() {
        let mut world = World::new(WorldMeta::new("Test", "hall", 0));
        world.add_room(Room::new("hall", "Hall", "")).unwrap();
        world
            .add_item(Item::new("coin", "coin", "").in_room("hall"))
            .unwrap();
        let json = world
            .to_json()
            .unwrap()
            .replace(r#""id": "hall""#, r#""id": "vault""#);
        let loaded = World::from_json(&json).unwrap();
        let issues = loaded.validate();
        assert!(issues.iter().any(|i| i.is_error && i.entity == "item 'coin'"));
    }
}
