//! Integration walkthrough tests for dv-fiction sessions.

use dv_core::{ItemId, RoomId, sample};
use dv_fiction::{FictionSession, GameStatus, SessionConfig, Verbosity};

fn new_game() -> FictionSession {
    FictionSession::new(sample::white_house().unwrap(), SessionConfig::default()).unwrap()
}

fn here(s: &FictionSession) -> &str {
    s.world().player.location.as_str()
}

/// Play each line and return the last response.
fn play(s: &mut FictionSession, lines: &[&str]) -> String {
    lines.iter().map(|line| s.process(line)).last().unwrap_or_default()
}

#[test]
fn into_the_house_and_down_to_the_cellar() {
    let mut s = new_game();
    assert!(s.intro().starts_with("Welcome to Delve!"));

    assert_eq!(s.process("e"), "The door is boarded and you can't remove the boards.");
    assert!(s.process("north").starts_with("North of House"));
    assert!(s.process("go east").starts_with("Behind House"));
    assert_eq!(s.process("w"), "The kitchen window is closed.");
    assert_eq!(s.process("open the window"), "Opened.");

    let kitchen = s.process("west");
    assert!(kitchen.starts_with("Kitchen\n"), "{kitchen}");
    assert!(kitchen.contains("preparation of food"));

    assert!(s.process("w").starts_with("Living Room"));
    assert_eq!(s.process("get the lamp"), "Taken.");
    assert_eq!(
        s.process("move rug"),
        "With a great effort, you move the oriental rug to one side of the room, revealing a trap door."
    );
    assert_eq!(s.process("open trap door"), "Opened.");

    assert_eq!(
        s.process("down"),
        "It is pitch black in there. Without a light you would surely be eaten by a grue."
    );
    assert_eq!(here(&s), "living-room");

    assert_eq!(s.process("turn on lamp"), "The brass lantern is now on.");
    let cellar = s.process("d");
    assert!(cellar.starts_with("Cellar\n"), "{cellar}");
    assert_eq!(here(&s), "cellar");
}

#[test]
fn returning_to_a_room_is_brief() {
    let mut s = new_game();
    s.process("n");
    let back = s.process("w");
    assert!(back.starts_with("West of House"));
    assert!(!back.contains("open field"));

    s.process("verbose");
    s.process("n");
    assert!(s.process("w").contains("open field"));

    s.process("superbrief");
    s.process("n");
    assert_eq!(s.process("w"), "West of House");
    assert!(s.process("look").contains("open field"));
}

#[test]
fn configured_verbosity_applies_from_the_start() {
    let config = SessionConfig::default().with_verbosity(Verbosity::Superbrief);
    let mut s = FictionSession::new(sample::white_house().unwrap(), config).unwrap();
    assert_eq!(s.process("n"), "North of House");
}

#[test]
fn it_follows_the_last_object() {
    let mut s = new_game();
    assert_eq!(s.process("open mailbox"), "Opening the small mailbox reveals a leaflet.");
    assert_eq!(s.process("examine leaflet"), "A small leaflet.");
    assert_eq!(s.process("take it"), "Taken.");
    assert!(s.world().player.carries(&ItemId::from("leaflet")));
    assert!(s.process("read it").contains("WELCOME TO DELVE!"));
}

#[test]
fn closing_twice() {
    let mut s = new_game();
    assert_eq!(s.process("close mailbox"), "It is already closed.");
    assert!(!s.world().item(&ItemId::from("mailbox")).unwrap().flags.open);
    s.process("open mailbox");
    assert_eq!(s.process("shut mailbox"), "Closed.");
    assert_eq!(s.process("close mailbox"), "It is already closed.");
}

#[test]
fn parse_failures_cost_nothing() {
    let mut s = new_game();
    assert_eq!(s.process(""), "I beg your pardon?");
    assert_eq!(
        s.process("exmaine mailbox"),
        "I don't know the word \"exmaine\". Did you mean \"examine\"?"
    );
    assert_eq!(
        s.process("take unicorn"),
        "You used the word \"unicorn\" in a way that I don't understand."
    );
    assert_eq!(s.world().player.moves, 0);
}

#[test]
fn moves_are_counted() {
    let mut s = new_game();
    play(&mut s, &["wait", "z", "n", "score"]);
    assert_eq!(s.world().player.moves, 3);
    assert_eq!(
        s.score_line(),
        "Your score is 0 (total of 100 points), in 3 moves."
    );
}

#[test]
fn treasures_score_once() {
    let mut s = new_game();
    s.world_mut().player.location = RoomId::from("attic");
    s.world_mut().move_item(&ItemId::from("lamp"), dv_core::Location::Inventory).unwrap();
    s.world_mut().item_mut(&ItemId::from("lamp")).unwrap().flags.lit = true;
    play(&mut s, &["take egg", "drop egg", "take egg"]);
    assert_eq!(s.world().player.score, 25);
}

#[test]
fn reaching_the_maximum_wins() {
    let mut s = new_game();
    s.world_mut().player.score = 100;
    let text = s.process("wait");
    assert!(text.ends_with("*** You have won ***"), "{text}");
    assert_eq!(s.status(), GameStatus::Won);
    assert_eq!(s.process("n"), "The game is over.");
}

#[test]
fn the_troll_blocks_the_way_east() {
    let mut s = new_game();
    s.world_mut().player.location = RoomId::from("troll-room");
    s.world_mut().move_item(&ItemId::from("lamp"), dv_core::Location::Inventory).unwrap();
    s.world_mut().item_mut(&ItemId::from("lamp")).unwrap().flags.lit = true;
    let text = s.process("east");
    assert!(
        text.starts_with("The troll fends you off with a menacing gesture."),
        "{text}"
    );
    assert_eq!(here(&s), "troll-room");
}
