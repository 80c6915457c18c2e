//! Resolving single exchanges between the hero and a villain.

use dv_core::{ActorId, ItemId, Location, World};
use log::info;

use super::messages;
use super::table::{Outcome, TableId, select_table};
use crate::dice::Roller;
use crate::error::{MechError, MechResult};
use crate::strength::{hero_strength, villain_strength};

/// A drawn stagger becomes a lost weapon one time in `DISARM_ODDS`, if the
/// defender holds a weapon.
pub const DISARM_ODDS: usize = 4;

/// What happened in one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blow {
    /// The outcome, or `None` when a staggered villain spent the turn
    /// getting up.
    pub outcome: Option<Outcome>,
    /// The table the outcome was drawn from.
    pub table: Option<TableId>,
    /// Attacker strength.
    pub attack: i32,
    /// Defender strength.
    pub defense: i32,
    /// Narrative text.
    pub message: String,
    /// Whether the defender died.
    pub fatal: bool,
}

/// Resolves blows and applies them to the world.
///
/// Stateless between exchanges; everything lasting lives on the entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatEngine;

impl CombatEngine {
    /// Create an engine.
    pub fn new() -> Self {
        Self
    }

    /// The hero attacks `target`, optionally with `weapon`.
    pub fn hero_strike<R: Roller>(
        &self,
        world: &mut World,
        target: &ActorId,
        weapon: Option<&ItemId>,
        roller: &mut R,
    ) -> MechResult<Blow> {
        let actor = fighter(world, target)?;
        let attack = hero_strength(world.player.score, world.meta.max_score, world.player.wounds);
        let defense = villain_strength(actor, |id| world.is_carried(id));
        let actor_name = actor.name.clone();
        let disarmable = first_weapon(world, &actor.inventory);

        let table = select_table(attack, defense);
        let mut outcome = table.outcome(roller.roll(table.outcomes().len()));
        if outcome == Outcome::Stagger && disarmable.is_some() && roller.roll(DISARM_ODDS) == 0 {
            outcome = Outcome::LoseWeapon;
        }

        let here = world.player.location.clone();
        let mut fatal = outcome.is_lethal();
        match outcome {
            Outcome::Killed | Outcome::Unconscious => {
                world.kill_actor(target)?;
            }
            Outcome::LightWound | Outcome::SeriousWound => {
                let remaining = world
                    .actor_mut(target)
                    .map(|a| {
                        a.strength -= outcome.damage();
                        a.strength
                    })
                    .unwrap_or(0);
                if remaining <= 0 {
                    world.kill_actor(target)?;
                    fatal = true;
                }
            }
            Outcome::Stagger => {
                if let Some(a) = world.actor_mut(target) {
                    a.staggered = true;
                }
            }
            Outcome::LoseWeapon => {
                if let Some(dropped) = &disarmable {
                    world.move_item(dropped, Location::Room(here))?;
                }
            }
            Outcome::Missed => {}
        }
        if let Some(a) = world.actor_mut(target) {
            a.distracted = false;
            if a.is_alive() {
                a.hostile = true;
            }
        }

        let weapon_name = weapon
            .and_then(|id| world.item(id))
            .map_or_else(|| "bare hands".to_string(), |i| i.name.clone());
        let shown = if fatal { Outcome::Killed } else { outcome };
        let message = messages::hero_message(shown, &actor_name, &weapon_name, roller);
        info!("hero -> {target}: {outcome} on {table:?} ({attack} vs {defense})");

        Ok(Blow {
            outcome: Some(outcome),
            table: Some(table),
            attack,
            defense,
            message,
            fatal,
        })
    }

    /// `attacker` strikes the hero.
    ///
    /// A staggered attacker spends the exchange getting up instead.
    pub fn villain_strike<R: Roller>(
        &self,
        world: &mut World,
        attacker: &ActorId,
        roller: &mut R,
    ) -> MechResult<Blow> {
        let actor = fighter(world, attacker)?;
        let actor_name = actor.name.clone();
        if actor.staggered {
            if let Some(a) = world.actor_mut(attacker) {
                a.staggered = false;
            }
            return Ok(Blow {
                outcome: None,
                table: None,
                attack: 0,
                defense: 0,
                message: messages::recovery_message(&actor_name),
                fatal: false,
            });
        }

        let attack = villain_strength(actor, |id| world.is_carried(id));
        let defense = hero_strength(world.player.score, world.meta.max_score, world.player.wounds);
        let weapon_name = actor
            .weapon
            .as_ref()
            .and_then(|id| world.item(id))
            .map_or_else(|| "bare hands".to_string(), |i| i.name.clone());
        let disarmable = world.player_weapon();

        let table = select_table(attack, defense);
        let mut outcome = table.outcome(roller.roll(table.outcomes().len()));
        if outcome == Outcome::Stagger && disarmable.is_some() && roller.roll(DISARM_ODDS) == 0 {
            outcome = Outcome::LoseWeapon;
        }

        let fatal = outcome.is_lethal();
        match outcome {
            Outcome::Killed | Outcome::Unconscious => world.player.health = 0,
            Outcome::LightWound | Outcome::SeriousWound => world.player.wound(outcome.damage()),
            Outcome::LoseWeapon => {
                if let Some(dropped) = &disarmable {
                    let here = world.player.location.clone();
                    world.move_item(dropped, Location::Room(here))?;
                }
            }
            Outcome::Stagger | Outcome::Missed => {}
        }
        if let Some(a) = world.actor_mut(attacker) {
            a.distracted = false;
        }

        let message = messages::villain_message(
            attacker.as_str(),
            outcome,
            &actor_name,
            &weapon_name,
            roller,
        );
        info!("{attacker} -> hero: {outcome} on {table:?} ({attack} vs {defense})");

        Ok(Blow {
            outcome: Some(outcome),
            table: Some(table),
            attack,
            defense,
            message,
            fatal,
        })
    }
}

fn fighter<'w>(world: &'w World, id: &ActorId) -> MechResult<&'w dv_core::Actor> {
    let actor = world
        .actor(id)
        .ok_or_else(|| MechError::UnknownActor(id.clone()))?;
    if !actor.is_alive() {
        return Err(MechError::ActorDead(id.clone()));
    }
    if !actor.flags.can_fight {
        return Err(MechError::NotAFighter(id.clone()));
    }
    Ok(actor)
}

fn first_weapon(world: &World, inventory: &[ItemId]) -> Option<ItemId> {
    inventory
        .iter()
        .find(|id| world.item(id).is_some_and(|i| i.flags.weapon))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Scripted;
    use dv_core::RoomId;
    use dv_core::sample::white_house;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at(room: &str) -> World {
        let mut world = white_house().unwrap();
        world.player.location = RoomId::from(room);
        world
    }

    fn armed_at(room: &str) -> World {
        let mut world = at(room);
        world
            .move_item(&ItemId::from("sword"), Location::Inventory)
            .unwrap();
        world
    }

    fn troll() -> ActorId {
        ActorId::from("troll")
    }

    fn sword() -> ItemId {
        ItemId::from("sword")
    }

    #[test]
    fn killing_blow_drops_inventory_and_sets_flag() {
        let mut world = armed_at("troll-room");
        let blow = CombatEngine::new()
            .hero_strike(&mut world, &troll(), Some(&sword()), &mut Scripted::new([8, 0]))
            .unwrap();
        assert_eq!(blow.table, Some(TableId::A));
        assert_eq!(blow.outcome, Some(Outcome::Killed));
        assert!(blow.fatal);
        assert!(!world.actor(&troll()).unwrap().is_alive());
        assert!(world.flags.is_set("troll_dead"));
        let axe = world.item(&ItemId::from("axe")).unwrap();
        assert_eq!(axe.location, Location::Room(RoomId::from("troll-room")));
    }

    #[test]
    fn stagger_can_escalate_to_disarm() {
        let mut world = armed_at("troll-room");
        let blow = CombatEngine::new()
            .hero_strike(&mut world, &troll(), Some(&sword()), &mut Scripted::new([1, 0, 0]))
            .unwrap();
        assert_eq!(blow.outcome, Some(Outcome::LoseWeapon));
        let troll = world.actor(&troll()).unwrap();
        assert!(troll.inventory.is_empty());
        assert_eq!(troll.weapon, None);
        assert!(
            world
                .room(&RoomId::from("troll-room"))
                .unwrap()
                .items
                .contains(&ItemId::from("axe"))
        );
    }

    #[test]
    fn staggered_villain_skips_its_counter() {
        let mut world = armed_at("troll-room");
        let engine = CombatEngine::new();
        let blow = engine
            .hero_strike(&mut world, &troll(), Some(&sword()), &mut Scripted::new([1, 2, 0]))
            .unwrap();
        assert_eq!(blow.outcome, Some(Outcome::Stagger));
        assert!(world.actor(&troll()).unwrap().staggered);

        let counter = engine
            .villain_strike(&mut world, &troll(), &mut Scripted::new([8]))
            .unwrap();
        assert_eq!(counter.outcome, None);
        assert_eq!(counter.message, "The troll slowly regains his feet.");
        assert!(!world.actor(&troll()).unwrap().staggered);
        assert!(world.player.is_alive());
    }

    #[test]
    fn wounds_reduce_strength_and_can_kill() {
        let mut world = at("gallery");
        let thief = ActorId::from("thief");
        world.actor_mut(&thief).unwrap().strength = 3;
        let engine = CombatEngine::new();
        // attack 2 vs defense 3 is table C2; slot 7 is a serious wound
        let blow = engine
            .hero_strike(&mut world, &thief, None, &mut Scripted::new([7, 0]))
            .unwrap();
        assert_eq!(blow.table, Some(TableId::C2));
        assert_eq!(blow.outcome, Some(Outcome::SeriousWound));
        assert_eq!(world.actor(&thief).unwrap().strength, 1);
        assert!(!blow.fatal);

        // defense 1 now, so table A: slot 5 kills
        let blow = engine
            .hero_strike(&mut world, &thief, None, &mut Scripted::new([5, 0]))
            .unwrap();
        assert!(blow.fatal);
        assert_eq!(
            world.item(&ItemId::from("stiletto")).unwrap().location,
            Location::Room(RoomId::from("gallery"))
        );
    }

    #[test]
    fn villain_wounds_the_hero() {
        let mut world = at("troll-room");
        // troll 2 vs hero 2: table B1, slot 4 is a light wound
        let blow = CombatEngine::new()
            .villain_strike(&mut world, &troll(), &mut Scripted::new([4, 0]))
            .unwrap();
        assert_eq!(blow.table, Some(TableId::B1));
        assert_eq!(blow.outcome, Some(Outcome::LightWound));
        assert_eq!(world.player.wounds, -1);
        assert!(world.player.is_alive());
        assert!(blow.message.contains("bloody axe"));
    }

    #[test]
    fn villain_can_disarm_the_hero() {
        let mut world = armed_at("troll-room");
        // sword weakens the troll to 1 vs hero 2: B1, slot 2 is a stagger
        let blow = CombatEngine::new()
            .villain_strike(&mut world, &troll(), &mut Scripted::new([2, 0, 0]))
            .unwrap();
        assert_eq!(blow.outcome, Some(Outcome::LoseWeapon));
        assert!(!world.player.carries(&sword()));
        assert!(world.room(&RoomId::from("troll-room")).unwrap().items.contains(&sword()));
    }

    #[test]
    fn lethal_blow_ends_the_hero() {
        let mut world = at("troll-room");
        let blow = CombatEngine::new()
            .villain_strike(&mut world, &troll(), &mut Scripted::new([8, 0]))
            .unwrap();
        assert!(blow.fatal);
        assert!(!world.player.is_alive());
    }

    #[test]
    fn distraction_clears_after_exchange() {
        let mut world = at("gallery");
        let thief = ActorId::from("thief");
        world.actor_mut(&thief).unwrap().distracted = true;
        let blow = CombatEngine::new()
            .villain_strike(&mut world, &thief, &mut Scripted::new([0, 0]))
            .unwrap();
        assert_eq!(blow.attack, 2);
        assert!(!world.actor(&thief).unwrap().distracted);
    }

    #[test]
    fn dead_or_peaceful_actors_are_rejected() {
        let mut world = at("troll-room");
        world.kill_actor(&troll()).unwrap();
        let err = CombatEngine::new()
            .hero_strike(&mut world, &troll(), None, &mut Scripted::new([0]))
            .unwrap_err();
        assert!(matches!(err, MechError::ActorDead(_)));
    }

    #[test]
    fn ten_thousand_strength_never_dies() {
        let mut world = armed_at("cyclops-room");
        let cyclops = ActorId::from("cyclops");
        let engine = CombatEngine::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let blow = engine
                .hero_strike(&mut world, &cyclops, Some(&sword()), &mut rng)
                .unwrap();
            assert_eq!(blow.table, Some(TableId::C1));
            assert!(!blow.fatal);
            world.actor_mut(&cyclops).unwrap().staggered = false;
        }
        let cyclops = world.actor(&cyclops).unwrap();
        assert!(cyclops.is_alive());
        assert!(cyclops.strength >= 9_000, "strength fell to {}", cyclops.strength);
    }

    /// Always draws a stagger from table A, leaving the disarm check random.
    struct ForcedStagger(StdRng);

    impl Roller for ForcedStagger {
        fn roll(&mut self, sides: usize) -> usize {
            if sides == 9 { 1 } else { self.0.roll(sides) }
        }
    }

    #[test]
    fn disarm_rate_is_about_one_in_four() {
        let base = armed_at("troll-room");
        let engine = CombatEngine::new();
        let mut dice = ForcedStagger(StdRng::seed_from_u64(7));
        let trials = 4_000;
        let mut disarmed = 0;
        for _ in 0..trials {
            let mut world = base.clone();
            let blow = engine
                .hero_strike(&mut world, &troll(), Some(&sword()), &mut dice)
                .unwrap();
            if blow.outcome == Some(Outcome::LoseWeapon) {
                disarmed += 1;
            }
        }
        let rate = f64::from(disarmed) / f64::from(trials);
        assert!((0.21..=0.29).contains(&rate), "disarm rate {rate}");
    }
}
