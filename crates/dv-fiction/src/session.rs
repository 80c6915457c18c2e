//! Interactive fiction session management.

use std::collections::BTreeSet;

use dv_core::{ActorId, CoreError, ItemId, RoomId, World};
use dv_mechanics::CombatEngine;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::error::FictionResult;
use crate::narrator::{Narrator, NarratorConfig, glow_message};
use crate::parser::{Command, Parser};
use crate::vocabulary::{Verb, Vocabulary};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Still going.
    Playing,
    /// Every point scored.
    Won,
    /// The player was killed.
    Dead,
    /// The player gave up.
    Quit,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != Self::Playing
    }
}

/// A running adventure.
///
/// Owns the world, the parser and the random source. One line of input
/// goes in through [`FictionSession::process`]; one response comes out.
pub struct FictionSession {
    pub(crate) world: World,
    /// A copy of the world as first loaded, for restores.
    pub(crate) pristine: World,
    pub(crate) vocab: Vocabulary,
    pub(crate) parser: Parser,
    pub(crate) narrator: Narrator,
    pub(crate) engine: CombatEngine,
    pub(crate) config: SessionConfig,
    pub(crate) rng: StdRng,
    pub(crate) status: GameStatus,
    /// Actors the player struck this turn; they don't attack again at the
    /// end of it.
    pub(crate) fought: BTreeSet<ActorId>,
}

impl FictionSession {
    /// Start a session in `world`.
    ///
    /// Fails if the player's starting room does not exist.
    pub fn new(world: World, config: SessionConfig) -> FictionResult<Self> {
        let mut world = world;
        let start = world.player.location.clone();
        world
            .room_mut(&start)
            .ok_or(CoreError::RoomNotFound(start))?
            .first_visit = false;

        let vocab = Vocabulary::for_world(&world);
        let narrator = Narrator::new(NarratorConfig::new().with_verbosity(config.verbosity));
        let rng = StdRng::seed_from_u64(config.seed);
        info!(
            "session started in \"{}\" ({} words, seed {})",
            world.meta.name,
            vocab.object_count(),
            config.seed
        );
        Ok(Self {
            pristine: world.clone(),
            world,
            vocab,
            parser: Parser::new(),
            narrator,
            engine: CombatEngine::new(),
            config,
            rng,
            status: GameStatus::Playing,
            fought: BTreeSet::new(),
        })
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for setting up scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The opening text: the introduction and the first room.
    pub fn intro(&self) -> String {
        let room = self
            .narrator
            .describe_room(&self.world, &self.world.player.location, true);
        if self.world.meta.intro.is_empty() {
            room
        } else {
            format!("{}\n\n{room}", self.world.meta.intro)
        }
    }

    /// The closing score line.
    pub fn score_line(&self) -> String {
        let moves = self.world.player.moves;
        format!(
            "Your score is {} (total of {} points), in {moves} move{}.",
            self.world.player.score,
            self.world.meta.max_score,
            if moves == 1 { "" } else { "s" }
        )
    }

    /// Process one line of input and return the response.
    ///
    /// Never fails: parse errors and failed saves come back as text.
    pub fn process(&mut self, input: &str) -> String {
        if self.status.is_over() {
            return "The game is over.".to_string();
        }
        let command = match self.parser.parse(&self.vocab, input) {
            Ok(command) => command,
            Err(e) => return e.to_string(),
        };
        match self.execute(command) {
            Ok(response) => response,
            Err(e) => {
                warn!("command failed: {e}");
                e.to_string()
            }
        }
    }

    /// Run a parsed command, then the rest of the turn.
    ///
    /// Meta verbs such as `score` or `save` don't use up a turn, and
    /// neither does a `go` with no direction.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        self.fought.clear();
        let response = self.dispatch(&command)?;
        let aimless = command.verb == Verb::Go && command.direction.is_none();
        if command.verb.is_meta() || aimless || self.status.is_over() {
            return Ok(response);
        }
        let mut parts = vec![response];
        parts.extend(self.end_turn()?);
        Ok(join(parts))
    }

    fn dispatch(&mut self, command: &Command) -> FictionResult<String> {
        if let Some(direction) = command.direction
            && command.verb == Verb::Go
        {
            return self.do_move(direction);
        }
        match command.verb {
            Verb::Go => Ok("Where do you want to go?".to_string()),
            Verb::Look => self.do_look(command),
            Verb::Examine => self.do_examine(command),
            Verb::LookIn => self.do_look_in(command),
            Verb::Inventory => Ok(self.narrator.describe_inventory(&self.world)),
            Verb::Take => self.do_take(command),
            Verb::Drop => self.do_drop(command),
            Verb::Put => self.do_put(command),
            Verb::Open => self.do_open(command),
            Verb::Close => self.do_close(command),
            Verb::Read => self.do_read(command),
            Verb::Eat => self.do_eat(command),
            Verb::Drink => self.do_drink(command),
            Verb::Light => self.do_light(command),
            Verb::Extinguish => self.do_extinguish(command),
            Verb::Turn => self.do_turn(command),
            Verb::Move => self.do_push(command),
            Verb::Wear => self.do_wear(command),
            Verb::Give => self.do_give(command),
            Verb::Talk => self.do_talk(command),
            Verb::Attack => self.do_attack(command),
            Verb::Score => Ok(self.do_score()),
            Verb::Diagnose => Ok(self.do_diagnose()),
            Verb::Wait => Ok("Time passes...".to_string()),
            Verb::Jump => Ok("Wheeeeeeeeee!!!!!".to_string()),
            Verb::Verbose | Verb::Brief | Verb::Superbrief => Ok(self.do_verbosity(command.verb)),
            Verb::Help => Ok(self.do_help()),
            Verb::Save => self.do_save(command),
            Verb::Restore => self.do_restore(command),
            Verb::Quit => Ok(self.do_quit()),
            Verb::Climb | Verb::Dig | Verb::Pray | Verb::Swim => {
                Ok(format!("I don't understand how to {}.", command.verb))
            }
        }
    }

    // -----------------------------------------------------------------------
    // End of turn
    // -----------------------------------------------------------------------

    fn end_turn(&mut self) -> FictionResult<Vec<String>> {
        let mut messages = self.world.tick(self.config.heal_interval);
        messages.extend(self.update_glow());

        let attackers: Vec<ActorId> = self
            .world
            .actors_here()
            .into_iter()
            .filter(|id| !self.fought.contains(id))
            .filter(|id| self.world.actor(id).is_some_and(|a| a.is_threat()))
            .collect();
        for attacker in attackers {
            let blow = self
                .engine
                .villain_strike(&mut self.world, &attacker, &mut self.rng)?;
            messages.push(blow.message);
            if blow.fatal {
                messages.push(self.die());
                return Ok(messages);
            }
        }

        if self.world.meta.max_score > 0 && self.world.player.score >= self.world.meta.max_score {
            self.status = GameStatus::Won;
            info!("game won in {} moves", self.world.player.moves);
            messages.push("*** You have won ***".to_string());
        }
        Ok(messages)
    }

    /// End the game with the player dead.
    pub(crate) fn die(&mut self) -> String {
        self.status = GameStatus::Dead;
        info!("player died after {} moves", self.world.player.moves);
        "*** You have died ***".to_string()
    }

    /// Set every glowing weapon's level from how close danger is.
    ///
    /// 2 with a villain in the room, 1 with one next door, else 0. Only
    /// changes to carried weapons are reported.
    fn update_glow(&mut self) -> Vec<String> {
        let level = self.danger_level();
        let glowing: Vec<ItemId> = self
            .world
            .items()
            .filter(|i| i.flags.glows && i.glow != level)
            .map(|i| i.id.clone())
            .collect();
        let mut messages = Vec::new();
        for id in glowing {
            let carried = self.world.is_carried(&id);
            let Some(item) = self.world.item_mut(&id) else {
                continue;
            };
            item.glow = level;
            if carried {
                messages.push(
                    glow_message(item)
                        .unwrap_or_else(|| format!("Your {} is no longer glowing.", item.name)),
                );
            }
        }
        messages
    }

    fn danger_level(&self) -> u8 {
        let hostile_in = |room: &RoomId| {
            self.world.actors().any(|a| {
                a.location == *room && a.is_alive() && a.flags.can_fight && !a.flags.friendly
            })
        };
        let here = &self.world.player.location;
        if hostile_in(here) {
            return 2;
        }
        let next_door = self
            .world
            .room(here)
            .is_some_and(|r| r.exits.values().any(|exit| hostile_in(&exit.to)));
        u8::from(next_door)
    }
}

/// Join non-empty response parts with newlines.
pub(crate) fn join(parts: Vec<String>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
