//! Sessions set up in interesting places.

use dv_core::{Item, ItemId, Location, Room, RoomId, World, WorldMeta, sample};

use crate::{FictionSession, SessionConfig};

pub(crate) fn session() -> FictionSession {
    session_with(SessionConfig::default())
}

pub(crate) fn session_with(config: SessionConfig) -> FictionSession {
    let world = sample::white_house().unwrap();
    FictionSession::new(world, config).unwrap()
}

fn relocate(s: &mut FictionSession, room: &str) {
    let room = RoomId::from(room);
    s.world_mut().room_mut(&room).unwrap().first_visit = false;
    s.world_mut().player.location = room;
}

fn carry(s: &mut FictionSession, item: &str) {
    s.world_mut()
        .move_item(&ItemId::from(item), Location::Inventory)
        .unwrap();
}

fn carry_lit_lamp(s: &mut FictionSession) {
    carry(s, "lamp");
    s.world_mut().item_mut(&ItemId::from("lamp")).unwrap().flags.lit = true;
}

pub(crate) fn in_kitchen() -> FictionSession {
    let mut s = session();
    relocate(&mut s, "kitchen");
    s
}

pub(crate) fn in_living_room() -> FictionSession {
    let mut s = session();
    relocate(&mut s, "living-room");
    s
}

pub(crate) fn in_cellar() -> FictionSession {
    let mut s = session();
    carry_lit_lamp(&mut s);
    relocate(&mut s, "cellar");
    s
}

pub(crate) fn in_troll_room() -> FictionSession {
    let mut s = session();
    carry_lit_lamp(&mut s);
    relocate(&mut s, "troll-room");
    s
}

/// The gallery with the thief, carrying the lamp and a brightly glowing sword.
pub(crate) fn in_gallery() -> FictionSession {
    let mut s = session();
    carry_lit_lamp(&mut s);
    carry(&mut s, "sword");
    s.world_mut().item_mut(&ItemId::from("sword")).unwrap().glow = 2;
    relocate(&mut s, "gallery");
    s
}

/// A lit study with an open, see-through box holding a marble.
pub(crate) fn small_box_world() -> FictionSession {
    let mut world = World::new(WorldMeta::new("Study", "study", 10));
    world
        .add_room(Room::new("study", "Study", "A quiet study.").lit())
        .unwrap();
    world
        .add_item(
            Item::new("small-box", "small box", "")
                .alias("box")
                .container()
                .open()
                .transparent()
                .in_room("study"),
        )
        .unwrap();
    world
        .add_item(
            Item::new("marble", "marble", "")
                .takeable()
                .inside("small-box"),
        )
        .unwrap();
    FictionSession::new(world, SessionConfig::default()).unwrap()
}
