//! A small starter dungeon under a white house.
//!
//! Four treasures worth 25 points each are scattered through the house and
//! the caves below it. The troll blocks the way east until it is killed.

use crate::actor::Actor;
use crate::direction::Direction::{self, *};
use crate::error::CoreResult;
use crate::item::Item;
use crate::room::{Exit, Room};
use crate::world::{World, WorldMeta};

const INTRO: &str = "Welcome to Delve!\n\
Somewhere beneath the white house lie four treasures. Find them all.";

const LEAFLET: &str = "\"WELCOME TO DELVE!\n\n\
Delve is a game of adventure, danger, and low cunning. In it you will \
explore some of the most amazing territory ever seen by mortals. No \
computer should be without one!\"";

fn go(to: &str) -> Exit {
    Exit::new(to)
}

fn room(id: &str, name: &str, description: &str, exits: &[(Direction, Exit)]) -> Room {
    exits
        .iter()
        .cloned()
        .fold(Room::new(id, name, description), |room, (dir, exit)| {
            room.exit(dir, exit)
        })
}

/// Build the white house dungeon.
pub fn white_house() -> CoreResult<World> {
    let meta = WorldMeta::new("The White House", "west-of-house", 100).with_intro(INTRO);
    let mut world = World::new(meta);
    let window = || {
        go("kitchen")
            .when("kitchen_window_open")
            .otherwise("The kitchen window is closed.")
    };
    let boarded = || {
        go("living-room")
            .when("front_door_open")
            .otherwise("The door is boarded and you can't remove the boards.")
    };

    // Above ground
    world.add_room(
        room(
            "west-of-house",
            "West of House",
            "You are standing in an open field west of a white house, with a boarded front door.",
            &[(North, go("north-of-house")), (South, go("south-of-house")), (East, boarded())],
        )
        .outdoors(),
    )?;
    world.add_room(
        room(
            "north-of-house",
            "North of House",
            "You are facing the north side of a white house. There is no door here, and all the \
             windows are boarded up. To the north a narrow path winds through the trees.",
            &[(West, go("west-of-house")), (East, go("behind-house"))],
        )
        .outdoors(),
    )?;
    world.add_room(
        room(
            "south-of-house",
            "South of House",
            "You are facing the south side of a white house. There is no door here, and all the \
             windows are boarded.",
            &[(West, go("west-of-house")), (East, go("behind-house"))],
        )
        .outdoors(),
    )?;
    world.add_room(
        room(
            "behind-house",
            "Behind House",
            "You are behind the white house. In one corner of the house there is a small window.",
            &[
                (North, go("north-of-house")),
                (South, go("south-of-house")),
                (West, window()),
                (In, window()),
            ],
        )
        .outdoors()
        .with_scenery("kitchen-window"),
    )?;

    // The house
    world.add_room(
        room(
            "kitchen",
            "Kitchen",
            "You are in the kitchen of the white house. A table seems to have been used recently \
             for the preparation of food. A passage leads to the west and a dark staircase can be \
             seen leading upward. To the east is a small window.",
            &[
                (
                    East,
                    go("behind-house")
                        .when("kitchen_window_open")
                        .otherwise("The kitchen window is closed."),
                ),
                (
                    Out,
                    go("behind-house")
                        .when("kitchen_window_open")
                        .otherwise("The kitchen window is closed."),
                ),
                (West, go("living-room")),
                (Up, go("attic")),
            ],
        )
        .lit()
        .with_scenery("kitchen-window"),
    )?;
    world.add_room(
        room(
            "attic",
            "Attic",
            "This is the attic. The only exit is a stairway leading down.",
            &[(Down, go("kitchen"))],
        )
        .dark(),
    )?;
    world.add_room(
        room(
            "living-room",
            "Living Room",
            "You are in the living room. There is a doorway to the east and a wooden door with \
             strange gothic lettering to the west, which appears to be nailed shut.",
            &[
                (East, go("kitchen")),
                (
                    West,
                    go("west-of-house")
                        .when("front_door_open")
                        .otherwise("The door is nailed shut."),
                ),
                (
                    Down,
                    go("cellar")
                        .when("trap_door_open")
                        .otherwise("You can't go that way."),
                ),
            ],
        )
        .lit()
        .with_scenery("trap-door"),
    )?;

    // Below ground
    world.add_room(
        room(
            "cellar",
            "Cellar",
            "You are in a dark and damp cellar with a narrow passageway leading north. Above you \
             is a trap door.",
            &[
                (
                    Up,
                    go("living-room")
                        .when("trap_door_open")
                        .otherwise("The trap door is closed."),
                ),
                (North, go("troll-room")),
            ],
        )
        .dark()
        .with_scenery("trap-door"),
    )?;
    world.add_room(
        room(
            "troll-room",
            "The Troll Room",
            "This is a small room with passages to the east and south. Bloodstains and deep \
             scratches (perhaps made by an axe) mar the walls.",
            &[
                (South, go("cellar")),
                (
                    East,
                    go("east-west-passage")
                        .when("troll_dead")
                        .otherwise("The troll fends you off with a menacing gesture."),
                ),
            ],
        )
        .dark(),
    )?;
    world.add_room(
        room(
            "east-west-passage",
            "East-West Passage",
            "This is a narrow east-west passageway. There is a narrow stairway leading down at \
             the north end of the room.",
            &[(West, go("troll-room")), (East, go("round-room"))],
        )
        .dark(),
    )?;
    world.add_room(
        room(
            "round-room",
            "Round Room",
            "This is a circular stone room with passages in all directions. Several of them have \
             unfortunately been blocked by cave-ins.",
            &[
                (West, go("east-west-passage")),
                (South, go("gallery")),
                (North, go("cyclops-room")),
            ],
        )
        .dark(),
    )?;
    world.add_room(
        room(
            "gallery",
            "Gallery",
            "This is an art gallery. Most of the paintings have been stolen by vandals with \
             exceptional taste. The vandals left through the north exit.",
            &[(North, go("round-room"))],
        )
        .lit(),
    )?;
    world.add_room(
        room(
            "cyclops-room",
            "Cyclops Room",
            "This room has an exit on the south side, and a staircase leading up which the \
             cyclops is standing squarely in front of.",
            &[(South, go("round-room"))],
        )
        .dark(),
    )?;

    // Scenery and doors
    world.add_item(
        Item::new(
            "kitchen-window",
            "kitchen window",
            "The window is slightly ajar, but not enough to allow entry.",
        )
        .alias("window")
        .door("kitchen_window_open")
        .no_list()
        .global(),
    )?;
    world.add_item(
        Item::new("trap-door", "trap door", "A dusty trap door set into the floor.")
            .alias("trapdoor")
            .alias("door")
            .door("trap_door_open")
            .invisible()
            .no_list()
            .global(),
    )?;
    world.add_item(
        Item::new(
            "front-door",
            "front door",
            "The door is boarded and you can't remove the boards.",
        )
        .alias("door")
        .no_list()
        .in_room("west-of-house"),
    )?;

    // West of house
    world.add_item(
        Item::new("mailbox", "small mailbox", "It's a small mailbox.")
            .alias("mailbox")
            .alias("box")
            .container()
            .capacity(10)
            .in_room("west-of-house"),
    )?;
    world.add_item(
        Item::new("leaflet", "leaflet", "A small leaflet.")
            .alias("pamphlet")
            .alias("advertisement")
            .takeable()
            .weight(1)
            .readable(LEAFLET)
            .inside("mailbox"),
    )?;

    // Kitchen
    world.add_item(
        Item::new("table", "kitchen table", "A sturdy wooden table.")
            .alias("table")
            .no_list()
            .in_room("kitchen"),
    )?;
    world.add_item(
        Item::new("sack", "brown sack", "An elongated brown sack, smelling of hot peppers.")
            .alias("sack")
            .alias("bag")
            .takeable()
            .container()
            .capacity(15)
            .weight(3)
            .in_room("kitchen"),
    )?;
    world.add_item(
        Item::new("lunch", "lunch", "A hot pepper sandwich.")
            .alias("sandwich")
            .alias("food")
            .takeable()
            .edible()
            .weight(2)
            .inside("sack"),
    )?;
    world.add_item(
        Item::new("garlic", "clove of garlic", "A clove of garlic.")
            .alias("garlic")
            .alias("clove")
            .takeable()
            .edible()
            .weight(1)
            .inside("sack"),
    )?;
    world.add_item(
        Item::new("bottle", "glass bottle", "A clear glass bottle.")
            .alias("bottle")
            .takeable()
            .container()
            .transparent()
            .capacity(4)
            .weight(4)
            .in_room("kitchen"),
    )?;
    world.add_item(
        Item::new("water", "quantity of water", "It looks like ordinary water.")
            .alias("water")
            .takeable()
            .drinkable()
            .weight(4)
            .inside("bottle"),
    )?;

    // Attic
    world.add_item(
        Item::new("knife", "nasty knife", "A nasty-looking knife.")
            .alias("knife")
            .takeable()
            .weapon()
            .weight(10)
            .in_room("attic"),
    )?;
    world.add_item(
        Item::new("rope", "rope", "A large coil of rope.")
            .alias("coil")
            .takeable()
            .weight(10)
            .in_room("attic"),
    )?;
    world.add_item(
        Item::new("egg", "jewel-encrusted egg", "A large egg encrusted with precious jewels.")
            .alias("egg")
            .takeable()
            .treasure(25)
            .weight(5)
            .in_room("attic"),
    )?;

    // Living room
    world.add_item(
        Item::new("trophy-case", "trophy case", "A glass trophy case, ready for treasures.")
            .alias("case")
            .container()
            .transparent()
            .capacity(100)
            .in_room("living-room"),
    )?;
    world.add_item(
        Item::new("lamp", "brass lantern", "A battery-powered brass lantern.")
            .alias("lamp")
            .alias("lantern")
            .takeable()
            .light_source(200)
            .weight(15)
            .in_room("living-room"),
    )?;
    world.add_item(
        Item::new("sword", "elvish sword", "An elvish sword of great antiquity.")
            .alias("sword")
            .alias("blade")
            .takeable()
            .weapon()
            .glows()
            .weight(30)
            .in_room("living-room"),
    )?;
    world.add_item(
        Item::new("rug", "oriental rug", "A large oriental rug in the centre of the room.")
            .alias("rug")
            .alias("carpet")
            .controls("rug_moved")
            .reveals("trap-door")
            .in_room("living-room"),
    )?;

    // Caves
    world.add_actor(
        Actor::new(
            "troll",
            "troll",
            "A nasty-looking troll, brandishing a bloody axe, blocks all passages out of the room.",
            "troll-room",
        )
        .fighter(2)
        .aggressive()
        .wielding("axe")
        .weak_to("sword", 1)
        .on_death("troll_dead"),
    )?;
    world.add_item(
        Item::new("axe", "bloody axe", "A bloody axe.")
            .alias("axe")
            .takeable()
            .weapon()
            .weight(25)
            .held_by("troll"),
    )?;
    world.add_item(
        Item::new("coins", "leather bag of coins", "An old leather bag, bulging with coins.")
            .alias("coins")
            .alias("bag")
            .takeable()
            .treasure(25)
            .weight(15)
            .in_room("east-west-passage"),
    )?;
    world.add_item(
        Item::new("bar", "platinum bar", "A large bar of platinum.")
            .alias("bar")
            .alias("platinum")
            .takeable()
            .treasure(25)
            .weight(20)
            .in_room("round-room"),
    )?;
    world.add_item(
        Item::new("painting", "painting", "A masterpiece by a neglected genius.")
            .alias("masterpiece")
            .takeable()
            .treasure(25)
            .weight(15)
            .in_room("gallery"),
    )?;
    world.add_actor(
        Actor::new(
            "thief",
            "thief",
            "A seedy-looking individual with a large bag, leaning against one wall. He is armed \
             with a deadly stiletto.",
            "gallery",
        )
        .fighter(5)
        .talks("The thief eyes you warily. \"Got anything shiny?\"")
        .wielding("stiletto")
        .weak_to("knife", 1),
    )?;
    world.add_item(
        Item::new("stiletto", "stiletto", "A vicious-looking stiletto.")
            .takeable()
            .weapon()
            .weight(10)
            .held_by("thief"),
    )?;
    world.add_actor(
        Actor::new(
            "cyclops",
            "cyclops",
            "A hungry cyclops is standing at the foot of the stairs.",
            "cyclops-room",
        )
        .fighter(10_000)
        .talks("The cyclops stares at you and licks his lips."),
    )?;

    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{ActorId, ItemId, RoomId};

    #[test]
    fn sample_world_is_clean() {
        let world = white_house().unwrap();
        let issues = world.validate();
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn treasures_add_up_to_max_score() {
        let world = white_house().unwrap();
        let total: i32 = world
            .items()
            .filter(|i| i.flags.treasure)
            .map(|i| i.value)
            .sum();
        assert_eq!(total, world.meta.max_score);
    }

    #[test]
    fn troll_carries_its_axe() {
        let world = white_house().unwrap();
        let troll = world.actor(&ActorId::from("troll")).unwrap();
        assert_eq!(troll.weapon, Some(ItemId::from("axe")));
        assert_eq!(troll.inventory, vec![ItemId::from("axe")]);
    }

    #[test]
    fn window_opens_the_way_in() {
        let mut world = white_house().unwrap();
        world.travel(Direction::North).unwrap();
        world.travel(Direction::East).unwrap();
        assert!(world.travel(Direction::West).is_err());
        world.open_item(&ItemId::from("kitchen-window"));
        let arrival = world.travel(Direction::West).unwrap();
        assert_eq!(arrival.room, RoomId::from("kitchen"));
    }
}
