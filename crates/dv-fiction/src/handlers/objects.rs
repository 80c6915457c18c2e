use dv_core::{Location, ToggleOutcome};
use log::debug;

use super::{NOT_HERE, TOO_DARK};
use crate::error::FictionResult;
use crate::narrator::with_article;
use crate::parser::Command;
use crate::session::FictionSession;

/// "a leaflet", "a lunch and a clove of garlic", "x, y and z".
fn list_names(names: &[String]) -> String {
    let with: Vec<String> = names.iter().map(|n| with_article(n)).collect();
    match with.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

impl FictionSession {
    pub(crate) fn do_examine(&self, command: &Command) -> FictionResult<String> {
        if let Some(object) = &command.direct
            && let Some(actor) = self
                .resolve_actor(object, false)
                .and_then(|id| self.world.actor(&id))
        {
            return Ok(if actor.is_alive() {
                actor.description.clone()
            } else {
                format!("The {} is dead.", actor.name)
            });
        }
        if !self.can_see() {
            return Ok(TOO_DARK.to_string());
        }
        let id = direct_or_reply!(self, command, "examine");
        Ok(self
            .world
            .item(&id)
            .map_or_else(
                || NOT_HERE.to_string(),
                |item| self.narrator.describe_item(&self.world, item),
            ))
    }

    pub(crate) fn do_look_in(&self, command: &Command) -> FictionResult<String> {
        if !self.can_see() {
            return Ok(TOO_DARK.to_string());
        }
        let id = direct_or_reply!(self, command, "look in");
        Ok(self
            .world
            .item(&id)
            .map_or_else(
                || NOT_HERE.to_string(),
                |item| self.narrator.describe_contents(&self.world, item),
            ))
    }

    pub(crate) fn do_take(&mut self, command: &Command) -> FictionResult<String> {
        if !self.can_see() {
            return Ok(TOO_DARK.to_string());
        }
        let id = direct_or_reply!(self, command, "take");
        Ok(match self.world.take_item(&id) {
            Ok(()) => "Taken.".to_string(),
            Err(e) => e.to_string(),
        })
    }

    pub(crate) fn do_drop(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "drop");
        Ok(match self.world.drop_item(&id) {
            Ok(()) => "Dropped.".to_string(),
            Err(e) => e.to_string(),
        })
    }

    pub(crate) fn do_put(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "put");
        let Some(target) = &command.indirect else {
            return Ok(format!("What do you want to put the {} in?", self.item_name(&id)));
        };
        let Some(container) = self.resolve_item(target) else {
            return Ok(NOT_HERE.to_string());
        };
        Ok(match self.world.put_item(&id, &container) {
            Ok(()) => "Done.".to_string(),
            Err(e) => e.to_string(),
        })
    }

    pub(crate) fn do_open(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "open");
        Ok(match self.world.open_item(&id) {
            ToggleOutcome::Changed => {
                let hidden_until_now = self
                    .world
                    .item(&id)
                    .is_some_and(|i| i.flags.container && !i.flags.transparent);
                let inside: Vec<String> = self
                    .world
                    .contents(&id)
                    .iter()
                    .filter_map(|c| self.world.item(c))
                    .filter(|c| !c.flags.invisible)
                    .map(|c| c.name.clone())
                    .collect();
                if hidden_until_now && !inside.is_empty() {
                    format!(
                        "Opening the {} reveals {}.",
                        self.item_name(&id),
                        list_names(&inside)
                    )
                } else {
                    "Opened.".to_string()
                }
            }
            ToggleOutcome::AlreadyOpen => "It is already open.".to_string(),
            ToggleOutcome::AlreadyClosed | ToggleOutcome::NotOpenable => {
                format!("You can't open the {}.", self.item_name(&id))
            }
        })
    }

    pub(crate) fn do_close(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "close");
        Ok(match self.world.close_item(&id) {
            ToggleOutcome::Changed => "Closed.".to_string(),
            ToggleOutcome::AlreadyClosed => "It is already closed.".to_string(),
            ToggleOutcome::AlreadyOpen | ToggleOutcome::NotOpenable => {
                format!("You can't close the {}.", self.item_name(&id))
            }
        })
    }

    pub(crate) fn do_read(&self, command: &Command) -> FictionResult<String> {
        if !self.can_see() {
            return Ok("It is impossible to read in the dark.".to_string());
        }
        let id = direct_or_reply!(self, command, "read");
        let Some(item) = self.world.item(&id) else {
            return Ok(NOT_HERE.to_string());
        };
        Ok(match (&item.text, item.flags.readable) {
            (Some(text), true) => text.clone(),
            _ => format!("There's nothing written on the {}.", item.name),
        })
    }

    pub(crate) fn do_eat(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "eat");
        if !self.world.item(&id).is_some_and(|i| i.flags.edible) {
            return Ok(format!(
                "I don't think that the {} would agree with you.",
                self.item_name(&id)
            ));
        }
        self.world.move_item(&id, Location::Nowhere)?;
        debug!("ate {id}");
        Ok("Thank you very much. It really hit the spot.".to_string())
    }

    pub(crate) fn do_drink(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "drink");
        let Some(item) = self.world.item(&id) else {
            return Ok(NOT_HERE.to_string());
        };
        if !item.flags.drinkable {
            return Ok(format!(
                "I don't think that the {} would agree with you.",
                item.name
            ));
        }
        if let Location::Item(vessel) = &item.location
            && let Some(vessel) = self.world.item(vessel)
            && !vessel.flags.open
        {
            return Ok(format!("You'll have to open the {} first.", vessel.name));
        }
        self.world.move_item(&id, Location::Nowhere)?;
        debug!("drank {id}");
        Ok("Thank you very much. I was rather thirsty.".to_string())
    }

    pub(crate) fn do_light(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "light");
        let was_dark = !self.can_see();
        let Some(item) = self.world.item_mut(&id) else {
            return Ok(NOT_HERE.to_string());
        };
        if !item.flags.light_source {
            return Ok("You can't turn that on.".to_string());
        }
        if item.flags.lit {
            return Ok("It is already on.".to_string());
        }
        if item.fuel == 0 {
            return Ok(format!("The {} has run out of power.", item.name));
        }
        item.flags.lit = true;
        let mut reply = format!("The {} is now on.", item.name);
        if was_dark && self.can_see() {
            let here = self.world.player.location.clone();
            reply.push('\n');
            reply.push_str(&self.narrator.describe_room(&self.world, &here, true));
        }
        Ok(reply)
    }

    pub(crate) fn do_extinguish(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "extinguish");
        let Some(item) = self.world.item_mut(&id) else {
            return Ok(NOT_HERE.to_string());
        };
        if !item.flags.light_source {
            return Ok("You can't turn that off.".to_string());
        }
        if !item.flags.lit {
            return Ok("It is already off.".to_string());
        }
        item.flags.lit = false;
        let mut reply = format!("The {} is now off.", item.name);
        if !self.can_see() {
            reply.push_str("\nIt is now pitch black.");
        }
        Ok(reply)
    }

    pub(crate) fn do_turn(&self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "turn");
        Ok(match self.world.item(&id) {
            Some(item) if item.flags.light_source => {
                "Do you want to turn it on or off?".to_string()
            }
            Some(item) => format!("You can't turn the {}.", item.name),
            None => NOT_HERE.to_string(),
        })
    }

    /// `move`, `push`, `pull`: shift scenery that controls a flag.
    pub(crate) fn do_push(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "move");
        let Some(item) = self.world.item(&id) else {
            return Ok(NOT_HERE.to_string());
        };
        let name = item.name.clone();
        let (flag, reveals) = match (&item.flag, item.flags.door) {
            (Some(flag), false) => (flag.clone(), item.reveals.clone()),
            _ if item.flags.takeable => return Ok(format!("Moving the {name} reveals nothing.")),
            _ => return Ok(format!("You can't move the {name}.")),
        };
        if self.world.flags.is_set(&flag) {
            return Ok(format!("Having moved the {name}, you find nothing more."));
        }
        self.world.flags.set(flag, true);
        let revealed = if let Some(r) = reveals
            && let Some(hidden) = self.world.item_mut(&r)
        {
            hidden.flags.invisible = false;
            Some(hidden.name.clone())
        } else {
            None
        };
        Ok(match revealed {
            Some(hidden) => format!(
                "With a great effort, you move the {name} to one side of the room, revealing {}.",
                with_article(&hidden)
            ),
            None => format!("With a great effort, you move the {name}."),
        })
    }

    pub(crate) fn do_wear(&mut self, command: &Command) -> FictionResult<String> {
        let id = direct_or_reply!(self, command, "wear");
        let carried = self.world.player.carries(&id);
        let Some(item) = self.world.item_mut(&id) else {
            return Ok(NOT_HERE.to_string());
        };
        if !item.flags.wearable {
            return Ok(format!("You can't wear the {}.", item.name));
        }
        if !carried {
            return Ok("You're not carrying that.".to_string());
        }
        if item.flags.worn {
            return Ok("You are already wearing it.".to_string());
        }
        item.flags.worn = true;
        Ok(format!("You are now wearing the {}.", item.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{in_kitchen, in_living_room, session, small_box_world};
    use dv_core::ItemId;

    #[test]
    fn name_lists() {
        assert_eq!(list_names(&["leaflet".into()]), "a leaflet");
        assert_eq!(
            list_names(&["lunch".into(), "clove of garlic".into()]),
            "a lunch and a clove of garlic"
        );
        assert_eq!(
            list_names(&["egg".into(), "rope".into(), "knife".into()]),
            "an egg, a rope and a knife"
        );
    }

    #[test]
    fn mailbox_and_leaflet() {
        let mut s = session();
        assert_eq!(s.process("open mailbox"), "Opening the small mailbox reveals a leaflet.");
        assert_eq!(s.process("take leaflet"), "Taken.");
        assert!(s.process("read it").contains("WELCOME TO DELVE"));
        assert_eq!(s.process("put leaflet in mailbox"), "Done.");
        assert_eq!(s.process("close mailbox"), "Closed.");
        assert_eq!(s.process("take leaflet"), NOT_HERE);
    }

    #[test]
    fn closing_twice() {
        let mut s = session();
        assert_eq!(s.process("close mailbox"), "It is already closed.");
        let mailbox = s.world().item(&ItemId::from("mailbox")).unwrap();
        assert!(!mailbox.flags.open);
        assert_eq!(s.process("open mailbox"), "Opening the small mailbox reveals a leaflet.");
        assert_eq!(s.process("open mailbox"), "It is already open.");
    }

    #[test]
    fn non_containers_refuse() {
        let mut s = in_living_room();
        assert_eq!(s.process("open lamp"), "You can't open the brass lantern.");
        assert_eq!(s.process("close lamp"), "You can't close the brass lantern.");
    }

    #[test]
    fn small_open_box() {
        let mut s = small_box_world();
        assert_eq!(s.process("look in box"), "The small box contains:\n  A marble");
        assert_eq!(s.process("take marble"), "Taken.");
        assert_eq!(s.process("look in box"), "The small box is empty.");
    }

    #[test]
    fn take_and_drop() {
        let mut s = in_living_room();
        assert_eq!(s.process("take lamp"), "Taken.");
        assert_eq!(s.process("take lamp"), "You already have that!");
        assert_eq!(s.process("take case"), "You can't take that.");
        assert_eq!(s.process("drop lamp"), "Dropped.");
        assert_eq!(
            s.world().item(&ItemId::from("lamp")).unwrap().location,
            Location::Room("living-room".into())
        );
    }

    #[test]
    fn weight_limit() {
        let mut s = in_living_room();
        s.world_mut().player.max_weight = 20;
        assert_eq!(s.process("take lamp"), "Taken.");
        assert_eq!(s.process("take sword"), "Your load is too heavy.");
    }

    #[test]
    fn lamp_on_and_off() {
        let mut s = in_living_room();
        s.process("take lamp");
        assert_eq!(s.process("turn on lamp"), "The brass lantern is now on.");
        assert_eq!(s.process("light lamp"), "It is already on.");
        assert_eq!(s.process("turn lamp off"), "The brass lantern is now off.");
        assert_eq!(s.process("extinguish lamp"), "It is already off.");
        assert_eq!(s.process("light rug"), "You can't turn that on.");
    }

    #[test]
    fn rug_reveals_trap_door() {
        let mut s = in_living_room();
        assert_eq!(s.process("open trap door"), NOT_HERE);
        let text = s.process("move rug");
        assert!(text.ends_with("revealing a trap door."), "{text}");
        assert_eq!(s.process("push rug"), "Having moved the oriental rug, you find nothing more.");
        assert_eq!(s.process("open trap door"), "Opened.");
        assert!(s.world().flags.is_set("trap_door_open"));
    }

    #[test]
    fn shared_alias_resolves_to_what_is_here() {
        let mut s = in_living_room();
        s.process("move rug");
        // "door" belongs to the front door in the vocabulary.
        assert_eq!(s.process("open door"), "Opened.");
        assert!(s.world().flags.is_set("trap_door_open"));
    }

    #[test]
    fn eat_and_drink() {
        let mut s = in_kitchen();
        s.process("open sack");
        assert_eq!(s.process("eat lunch"), "Thank you very much. It really hit the spot.");
        assert_eq!(
            s.world().item(&ItemId::from("lunch")).unwrap().location,
            Location::Nowhere
        );
        assert_eq!(s.process("drink water"), "You'll have to open the glass bottle first.");
        s.process("open bottle");
        assert_eq!(s.process("drink water"), "Thank you very much. I was rather thirsty.");
        assert_eq!(
            s.process("eat bottle"),
            "I don't think that the glass bottle would agree with you."
        );
    }

    #[test]
    fn examine_items_and_actors() {
        let mut s = in_living_room();
        assert!(s.process("examine sword").starts_with("An elvish sword of great antiquity."));
        assert!(s.process("x lamp").ends_with("The brass lantern is off."));
        let mut s = crate::testing::in_troll_room();
        assert!(s.process("examine troll").starts_with("A nasty-looking troll"));
    }

    #[test]
    fn darkness_blocks_looking() {
        let mut s = crate::testing::in_cellar();
        s.world_mut().item_mut(&ItemId::from("lamp")).unwrap().flags.lit = false;
        assert_eq!(s.process("take lamp"), TOO_DARK);
        assert_eq!(s.process("read leaflet"), "It is impossible to read in the dark.");
    }

    #[test]
    fn wearing_needs_a_wearable() {
        let mut s = in_living_room();
        s.process("take lamp");
        assert_eq!(s.process("wear lamp"), "You can't wear the brass lantern.");
    }
}
