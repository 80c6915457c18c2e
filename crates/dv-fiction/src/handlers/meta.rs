use dv_core::snapshot::{load_snapshot, save_snapshot};
use dv_mechanics::hero_strength;
use log::debug;

use crate::error::{FictionError, FictionResult};
use crate::narrator::Verbosity;
use crate::parser::Command;
use crate::session::{FictionSession, GameStatus};
use crate::vocabulary::Verb;

/// Save name used when none is given.
const DEFAULT_SAVE: &str = "delve";

const HELP: &str = "\
Tell me what to do in plain English: TAKE LAMP, OPEN THE MAILBOX, \
PUT LEAFLET IN MAILBOX, ATTACK TROLL WITH SWORD.
Move with NORTH, SOUTH, EAST, WEST, UP, DOWN, IN and OUT (or N, S, E, W, U, D).
LOOK describes where you are; INVENTORY (I) lists what you carry.
\"It\" refers to the last thing you mentioned.
Other commands: SCORE, DIAGNOSE, VERBOSE, BRIEF, SUPERBRIEF, SAVE [NAME], \
RESTORE [NAME], QUIT.";

fn rank(score: i32, max: i32) -> &'static str {
    if max <= 0 || score <= 0 {
        return "Beginner";
    }
    match score * 4 / max {
        0 => "Amateur Adventurer",
        1 => "Novice Adventurer",
        2 => "Junior Adventurer",
        3 => "Adventurer",
        _ => "Master Adventurer",
    }
}

impl FictionSession {
    pub(crate) fn do_score(&self) -> String {
        let rank = rank(self.world.player.score, self.world.meta.max_score);
        format!("{} This gives you the rank of {rank}.", self.score_line())
    }

    pub(crate) fn do_diagnose(&self) -> String {
        let player = &self.world.player;
        let interval = self.config.heal_interval.max(1);
        let health = if player.wounds >= 0 {
            "You are in perfect health.".to_string()
        } else {
            let extra = player.wounds.unsigned_abs().saturating_sub(1);
            let cured_in = interval - player.moves % interval + interval * extra;
            let what = if player.wounds == -1 {
                "a light wound"
            } else {
                "several wounds"
            };
            format!("You have {what}, which will be cured after {cured_in} moves.")
        };
        let strength = hero_strength(player.score, self.world.meta.max_score, player.wounds);
        format!("{health}\nYour fighting strength is {strength}.")
    }

    pub(crate) fn do_verbosity(&mut self, verb: Verb) -> String {
        let (verbosity, reply) = match verb {
            Verb::Verbose => (Verbosity::Verbose, "Maximum verbosity."),
            Verb::Superbrief => (Verbosity::Superbrief, "Superbrief descriptions."),
            _ => (Verbosity::Brief, "Brief descriptions."),
        };
        self.narrator.set_verbosity(verbosity);
        reply.to_string()
    }

    pub(crate) fn do_help(&self) -> String {
        HELP.to_string()
    }

    pub(crate) fn do_save(&mut self, command: &Command) -> FictionResult<String> {
        self.save(command.text.as_deref().unwrap_or(DEFAULT_SAVE))
    }

    pub(crate) fn do_restore(&mut self, command: &Command) -> FictionResult<String> {
        self.restore(command.text.as_deref().unwrap_or(DEFAULT_SAVE))
    }

    /// Write the game to `name` in the save directory.
    pub fn save(&self, name: &str) -> FictionResult<String> {
        let path = self
            .config
            .save_path(name)
            .map_err(FictionError::SaveFailed)?;
        let snapshot = self.world.snapshot();
        save_snapshot(&snapshot, &path).map_err(FictionError::SaveFailed)?;
        debug!("saved {}", path.display());
        Ok("Saved.".to_string())
    }

    /// Load the game saved as `name` onto a fresh copy of the world.
    ///
    /// Nothing changes unless the whole file loads and applies cleanly.
    pub fn restore(&mut self, name: &str) -> FictionResult<String> {
        let path = self
            .config
            .save_path(name)
            .map_err(FictionError::RestoreFailed)?;
        let snapshot = load_snapshot(&path).map_err(FictionError::RestoreFailed)?;
        let mut world = self.pristine.clone();
        world.restore(snapshot).map_err(FictionError::RestoreFailed)?;
        self.world = world;
        self.parser.forget();
        self.status = GameStatus::Playing;
        debug!("restored {}", path.display());
        let here = self.world.player.location.clone();
        Ok(format!(
            "Restored.\n{}",
            self.narrator.describe_room(&self.world, &here, true)
        ))
    }

    pub(crate) fn do_quit(&mut self) -> String {
        self.status = GameStatus::Quit;
        "Goodbye.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{in_living_room, session_with};
    use crate::SessionConfig;
    use dv_core::{ItemId, RoomId};

    #[test]
    fn ranks() {
        assert_eq!(rank(0, 100), "Beginner");
        assert_eq!(rank(10, 100), "Amateur Adventurer");
        assert_eq!(rank(50, 100), "Junior Adventurer");
        assert_eq!(rank(100, 100), "Master Adventurer");
        assert_eq!(rank(5, 0), "Beginner");
    }

    #[test]
    fn meta_verbs_take_no_time() {
        let mut s = in_living_room();
        s.process("score");
        s.process("diagnose");
        s.process("brief");
        assert_eq!(s.world().player.moves, 0);
        s.process("wait");
        assert_eq!(s.world().player.moves, 1);
    }

    #[test]
    fn score_line() {
        let mut s = in_living_room();
        assert_eq!(
            s.process("score"),
            "Your score is 0 (total of 100 points), in 0 moves. This gives you the rank of Beginner."
        );
    }

    #[test]
    fn diagnose_reports_wounds() {
        let mut s = in_living_room();
        assert!(s.process("diagnose").starts_with("You are in perfect health."));
        s.world_mut().player.wounds = -1;
        let text = s.process("diagnose");
        assert!(
            text.starts_with("You have a light wound, which will be cured after 30 moves."),
            "{text}"
        );
        assert!(text.ends_with("Your fighting strength is 1."));
    }

    #[test]
    fn quitting_ends_the_game() {
        let mut s = in_living_room();
        assert_eq!(s.process("q"), "Goodbye.");
        assert_eq!(s.status(), GameStatus::Quit);
        assert_eq!(s.process("look"), "The game is over.");
    }

    #[test]
    fn save_and_restore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_with(SessionConfig::default().with_save_dir(dir.path()));
        s.process("open mailbox");
        s.process("take leaflet");
        assert_eq!(s.process("save slot one"), "Saved.");
        assert!(dir.path().join("slot_one.json").exists());

        s.process("drop leaflet");
        s.process("north");
        assert_eq!(s.world().player.location, RoomId::from("north-of-house"));

        let text = s.process("restore slot one");
        assert!(text.starts_with("Restored.\nWest of House"), "{text}");
        assert_eq!(s.world().player.location, RoomId::from("west-of-house"));
        assert!(s.world().player.carries(&ItemId::from("leaflet")));
        assert!(s.world().item(&ItemId::from("mailbox")).unwrap().flags.open);
    }

    #[test]
    fn restore_forgets_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_with(SessionConfig::default().with_save_dir(dir.path()));
        s.process("save");
        s.process("examine mailbox");
        s.process("restore");
        assert_eq!(
            s.process("open it"),
            "You used the word \"it\" in a way that I don't understand."
        );
    }

    #[test]
    fn missing_save_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_with(SessionConfig::default().with_save_dir(dir.path()));
        s.process("north");
        let text = s.process("restore nothing");
        assert!(text.starts_with("Restore failed:"), "{text}");
        assert_eq!(s.world().player.location, RoomId::from("north-of-house"));
    }

    #[test]
    fn missing_save_dir_fails_explicitly() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        let mut s = session_with(SessionConfig::default().with_save_dir(&gone));
        let err = s.save("delve").unwrap_err();
        assert!(matches!(err, FictionError::SaveFailed(_)));
        assert!(err.to_string().starts_with("Save failed: save directory does not exist"));
    }

    #[test]
    fn save_names_cannot_leave_the_save_dir() {
        let dir = tempfile::tempdir().unwrap();
        let saves = dir.path().join("saves");
        std::fs::create_dir(&saves).unwrap();
        let mut s = session_with(SessionConfig::default().with_save_dir(&saves));
        assert_eq!(
            s.process("save ../escaped"),
            "Save failed: invalid save name: \"../escaped\""
        );
        assert!(!dir.path().join("escaped.json").exists());

        let outside = dir.path().join("outside");
        let err = s.save(outside.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FictionError::SaveFailed(_)));
        assert!(!dir.path().join("outside.json").exists());

        let err = s.restore("../escaped").unwrap_err();
        assert!(matches!(err, FictionError::RestoreFailed(_)));
    }
}
