use log::debug;

use super::NOT_HERE;
use crate::error::FictionResult;
use crate::narrator::with_article;
use crate::parser::Command;
use crate::session::{FictionSession, join};
use crate::vocabulary::ObjectId;

impl FictionSession {
    /// Strike an actor, then take its counter-attack.
    pub(crate) fn do_attack(&mut self, command: &Command) -> FictionResult<String> {
        let Some(object) = &command.direct else {
            return Ok("What do you want to attack?".to_string());
        };
        let Some(target) = self.resolve_actor(object, false) else {
            if let ObjectId::Item(_) = object.id
                && let Some(item) = self.resolve_item(object)
            {
                return Ok(format!(
                    "I've known strange people, but fighting {}?",
                    with_article(&self.item_name(&item))
                ));
            }
            return Ok(NOT_HERE.to_string());
        };
        let Some(actor) = self.world.actor(&target) else {
            return Ok(NOT_HERE.to_string());
        };
        let actor_name = actor.name.clone();
        if !actor.is_alive() {
            return Ok(format!("The {actor_name} is already dead."));
        }
        if !actor.flags.can_fight {
            return Ok(format!("The {actor_name} doesn't want to fight."));
        }

        let weapon = match &command.indirect {
            Some(with) => {
                let Some(id) = self.resolve_item(with).filter(|id| self.world.is_carried(id)) else {
                    return Ok("You're not carrying that.".to_string());
                };
                if !self.world.item(&id).is_some_and(|i| i.flags.weapon) {
                    return Ok(format!(
                        "Trying to attack the {actor_name} with {} is suicidal.",
                        with_article(&self.item_name(&id))
                    ));
                }
                id
            }
            None => match self.world.player_weapon() {
                Some(id) => id,
                None => {
                    return Ok(format!(
                        "Trying to attack the {actor_name} with your bare hands is suicidal."
                    ));
                }
            },
        };

        let blow = self
            .engine
            .hero_strike(&mut self.world, &target, Some(&weapon), &mut self.rng)?;
        self.fought.insert(target.clone());
        let mut parts = vec![blow.message];
        if blow.fatal {
            debug!("{target} killed");
            return Ok(join(parts));
        }

        let counter = self
            .engine
            .villain_strike(&mut self.world, &target, &mut self.rng)?;
        parts.push(counter.message);
        if counter.fatal {
            parts.push(self.die());
        }
        Ok(join(parts))
    }

    /// Hand an item over. Treasures distract the recipient.
    pub(crate) fn do_give(&mut self, command: &Command) -> FictionResult<String> {
        let item = direct_or_reply!(self, command, "give");
        let item_name = self.item_name(&item);
        let Some(to) = &command.indirect else {
            return Ok(format!("What do you want to give the {item_name} to?"));
        };
        let Some(actor) = self.resolve_actor(to, true) else {
            return Ok(NOT_HERE.to_string());
        };
        if let Err(e) = self.world.give_item(&item, &actor) {
            return Ok(e.to_string());
        }
        let treasure = self.world.item(&item).is_some_and(|i| i.flags.treasure);
        let Some(recipient) = self.world.actor_mut(&actor) else {
            return Ok(NOT_HERE.to_string());
        };
        if treasure {
            recipient.distracted = true;
            debug!("{actor} distracted by {item}");
            Ok(format!(
                "The {} accepts the {item_name} and is momentarily distracted by it.",
                recipient.name
            ))
        } else {
            Ok(format!(
                "The {} takes the {item_name} and looks at you expectantly.",
                recipient.name
            ))
        }
    }

    pub(crate) fn do_talk(&self, command: &Command) -> FictionResult<String> {
        let actor = match &command.direct {
            Some(object) => match self.resolve_actor(object, true) {
                Some(actor) => actor,
                None if object.id.item().is_some() && self.resolve_item(object).is_some() => {
                    return Ok(format!("You can't talk to the {}.", self.name_of(&object.id)));
                }
                None => return Ok(NOT_HERE.to_string()),
            },
            None => match self.world.actors_here().into_iter().next() {
                Some(actor) => actor,
                None => return Ok("There is no one here to talk to.".to_string()),
            },
        };
        let Some(actor) = self.world.actor(&actor) else {
            return Ok(NOT_HERE.to_string());
        };
        Ok(match (&actor.greeting, actor.flags.can_talk) {
            (Some(greeting), true) => greeting.clone(),
            _ => format!("The {} doesn't seem interested in conversation.", actor.name),
        })
    }
}
