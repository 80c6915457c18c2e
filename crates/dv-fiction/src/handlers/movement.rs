use dv_core::Direction;
use log::debug;

use super::{NOT_HERE, TOO_DARK};
use crate::error::FictionResult;
use crate::parser::Command;
use crate::session::FictionSession;

impl FictionSession {
    pub(crate) fn do_move(&mut self, direction: Direction) -> FictionResult<String> {
        match self.world.travel(direction) {
            Ok(arrival) => Ok(self
                .narrator
                .describe_arrival(&self.world, &arrival.room, arrival.first_visit)),
            Err(e) => {
                debug!("can't go {direction}: {e:?}");
                Ok(e.to_string())
            }
        }
    }

    pub(crate) fn do_look(&self, command: &Command) -> FictionResult<String> {
        // `look under rug` and friends examine the object.
        if let Some(object) = command.direct.as_ref().or(command.indirect.as_ref()) {
            if !self.can_see() {
                return Ok(TOO_DARK.to_string());
            }
            let text = self
                .resolve_item(object)
                .and_then(|id| self.world.item(&id))
                .map_or_else(
                    || NOT_HERE.to_string(),
                    |item| self.narrator.describe_item(&self.world, item),
                );
            return Ok(text);
        }
        let here = self.world.player.location.clone();
        Ok(self.narrator.describe_room(&self.world, &here, true))
    }
}
