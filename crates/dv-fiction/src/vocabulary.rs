//! Word tables: verbs, prepositions, directions and object names.
//!
//! A [`Vocabulary`] maps every accepted spelling to one canonical form. It
//! is built once when a session starts and never changes afterwards.

use std::collections::HashMap;
use std::fmt;

use dv_core::{ActorId, Direction, ItemId, World};

/// A canonical verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    /// Pick something up.
    Take,
    /// Put something down where you stand.
    Drop,
    /// Put something in a container.
    Put,
    /// Look closely at something.
    Examine,
    /// Describe the room again.
    Look,
    /// Look inside a container.
    LookIn,
    /// List what you carry.
    Inventory,
    /// Open a door or container.
    Open,
    /// Close a door or container.
    Close,
    /// Read some text.
    Read,
    /// Eat something edible.
    Eat,
    /// Drink something.
    Drink,
    /// Fight an actor.
    Attack,
    /// Walk in a direction.
    Go,
    /// Hand something to an actor.
    Give,
    /// Turn a light source on.
    Light,
    /// Turn a light source off.
    Extinguish,
    /// Turn something, or `turn X on/off`.
    Turn,
    /// Push or move something aside.
    Move,
    /// Put on something wearable.
    Wear,
    /// Speak to an actor.
    Talk,
    /// Let a turn pass.
    Wait,
    /// Report the score.
    Score,
    /// Report the player's health.
    Diagnose,
    /// Save the game.
    Save,
    /// Load a saved game.
    Restore,
    /// End the game.
    Quit,
    /// Show the help text.
    Help,
    /// Always give full room descriptions.
    Verbose,
    /// Full descriptions on first visits only.
    Brief,
    /// Room names only.
    Superbrief,
    /// Jump in place.
    Jump,
    /// Recognized but not supported.
    Climb,
    /// Recognized but not supported.
    Dig,
    /// Recognized but not supported.
    Pray,
    /// Recognized but not supported.
    Swim,
}

/// Every verb with the words that mean it. Two-word entries contain a space.
const VERB_TABLE: &[(Verb, &[&str])] = &[
    (Verb::Take, &["take", "get", "grab", "carry", "hold", "pick up"]),
    (Verb::Drop, &["drop", "discard", "put down"]),
    (Verb::Put, &["put", "place", "insert", "stuff"]),
    (Verb::Examine, &["examine", "x", "inspect", "describe", "look at"]),
    (Verb::Look, &["look", "l"]),
    (Verb::LookIn, &["search", "look in", "look inside"]),
    (Verb::Inventory, &["inventory", "inv", "i"]),
    (Verb::Open, &["open"]),
    (Verb::Close, &["close", "shut"]),
    (Verb::Read, &["read", "skim"]),
    (Verb::Eat, &["eat", "consume", "devour"]),
    (Verb::Drink, &["drink", "sip", "quaff"]),
    (
        Verb::Attack,
        &["attack", "kill", "fight", "hit", "strike", "stab", "slay", "murder"],
    ),
    (Verb::Go, &["go", "walk", "run", "head", "proceed"]),
    (Verb::Give, &["give", "offer", "hand"]),
    (Verb::Light, &["light", "ignite", "turn on", "switch on"]),
    (
        Verb::Extinguish,
        &["extinguish", "douse", "turn off", "switch off", "blow out"],
    ),
    (Verb::Turn, &["turn", "switch"]),
    (Verb::Move, &["move", "push", "pull", "shift", "lift"]),
    (Verb::Wear, &["wear", "don"]),
    (
        Verb::Talk,
        &["talk", "speak", "greet", "hello", "talk to", "speak to"],
    ),
    (Verb::Wait, &["wait", "z"]),
    (Verb::Score, &["score"]),
    (Verb::Diagnose, &["diagnose"]),
    (Verb::Save, &["save"]),
    (Verb::Restore, &["restore"]),
    (Verb::Quit, &["quit", "q"]),
    (Verb::Help, &["help", "?"]),
    (Verb::Verbose, &["verbose"]),
    (Verb::Brief, &["brief"]),
    (Verb::Superbrief, &["superbrief"]),
    (Verb::Jump, &["jump", "leap"]),
    (Verb::Climb, &["climb"]),
    (Verb::Dig, &["dig"]),
    (Verb::Pray, &["pray"]),
    (Verb::Swim, &["swim"]),
];

const MOVEMENT_VERBS: &[&str] = &["go", "walk", "run", "head", "proceed"];

const PREPOSITIONS: &[&str] = &[
    "in", "into", "inside", "on", "onto", "with", "to", "at", "under", "from", "about", "using",
    "through", "off",
];

impl Verb {
    /// The canonical spelling, e.g. `"look-in"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Put => "put",
            Self::Examine => "examine",
            Self::Look => "look",
            Self::LookIn => "look-in",
            Self::Inventory => "inventory",
            Self::Open => "open",
            Self::Close => "close",
            Self::Read => "read",
            Self::Eat => "eat",
            Self::Drink => "drink",
            Self::Attack => "attack",
            Self::Go => "go",
            Self::Give => "give",
            Self::Light => "light",
            Self::Extinguish => "extinguish",
            Self::Turn => "turn",
            Self::Move => "move",
            Self::Wear => "wear",
            Self::Talk => "talk",
            Self::Wait => "wait",
            Self::Score => "score",
            Self::Diagnose => "diagnose",
            Self::Save => "save",
            Self::Restore => "restore",
            Self::Quit => "quit",
            Self::Help => "help",
            Self::Verbose => "verbose",
            Self::Brief => "brief",
            Self::Superbrief => "superbrief",
            Self::Jump => "jump",
            Self::Climb => "climb",
            Self::Dig => "dig",
            Self::Pray => "pray",
            Self::Swim => "swim",
        }
    }

    /// Every word or phrase that means this verb.
    pub fn aliases(self) -> &'static [&'static str] {
        VERB_TABLE
            .iter()
            .find(|(verb, _)| *verb == self)
            .map_or(&[], |(_, words)| words)
    }

    /// Verbs whose argument is free text rather than an object.
    pub fn takes_free_text(self) -> bool {
        matches!(self, Self::Save | Self::Restore)
    }

    /// Verbs about the game itself rather than the world. They do not use
    /// up a turn.
    pub fn is_meta(self) -> bool {
        matches!(
            self,
            Self::Score
                | Self::Diagnose
                | Self::Save
                | Self::Restore
                | Self::Quit
                | Self::Help
                | Self::Verbose
                | Self::Brief
                | Self::Superbrief
        )
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an object phrase resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectId {
    /// An item.
    Item(ItemId),
    /// An actor.
    Actor(ActorId),
}

impl ObjectId {
    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Item(id) => id.as_str(),
            Self::Actor(id) => id.as_str(),
        }
    }

    /// The item id, if this is an item.
    pub fn item(&self) -> Option<&ItemId> {
        match self {
            Self::Item(id) => Some(id),
            Self::Actor(_) => None,
        }
    }

    /// The actor id, if this is an actor.
    pub fn actor(&self) -> Option<&ActorId> {
        match self {
            Self::Actor(id) => Some(id),
            Self::Item(_) => None,
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical forms for everything the parser can recognize.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    verbs: HashMap<&'static str, Verb>,
    objects: HashMap<String, ObjectId>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

impl Vocabulary {
    /// Verbs, prepositions and directions, with no objects.
    pub fn standard() -> Self {
        let verbs = VERB_TABLE
            .iter()
            .flat_map(|(verb, words)| words.iter().map(move |w| (*w, *verb)))
            .collect();
        Self {
            verbs,
            objects: HashMap::new(),
        }
    }

    /// The standard words plus every item and actor in `world`.
    ///
    /// Each entity registers its id, display name and aliases. When two
    /// entities share a word, the one registered first keeps it; items are
    /// registered before actors, each in id order.
    pub fn for_world(world: &World) -> Self {
        let mut vocab = Self::standard();
        for item in world.items() {
            let id = ObjectId::Item(item.id.clone());
            vocab.register(item.id.as_str(), &id);
            vocab.register(&item.name, &id);
            for alias in &item.aliases {
                vocab.register(alias, &id);
            }
        }
        for actor in world.actors() {
            let id = ObjectId::Actor(actor.id.clone());
            vocab.register(actor.id.as_str(), &id);
            vocab.register(&actor.name, &id);
        }
        vocab
    }

    /// Map `phrase` to `id` unless the phrase is already taken.
    ///
    /// Returns whether the phrase was added.
    pub fn register(&mut self, phrase: &str, id: &ObjectId) -> bool {
        let key = phrase.trim().to_lowercase();
        if key.is_empty() || self.objects.contains_key(&key) {
            return false;
        }
        self.objects.insert(key, id.clone());
        true
    }

    /// The verb a word or two-word phrase stands for.
    pub fn canonical_verb(&self, phrase: &str) -> Option<Verb> {
        self.verbs.get(phrase.to_lowercase().as_str()).copied()
    }

    /// The object a phrase names.
    pub fn canonical_object(&self, phrase: &str) -> Option<&ObjectId> {
        self.objects.get(&phrase.to_lowercase())
    }

    /// The direction a word names.
    pub fn canonical_direction(&self, word: &str) -> Option<Direction> {
        Direction::parse(word)
    }

    /// Whether `word` is a preposition.
    pub fn is_preposition(&self, word: &str) -> bool {
        PREPOSITIONS.contains(&word.to_lowercase().as_str())
    }

    /// Whether `word` can start a `go <direction>` shortcut.
    pub fn is_movement_verb(&self, word: &str) -> bool {
        MOVEMENT_VERBS.contains(&word.to_lowercase().as_str())
    }

    /// Every single-word verb spelling, sorted.
    pub fn verb_words(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = self
            .verbs
            .keys()
            .copied()
            .filter(|w| !w.contains(' '))
            .collect();
        words.sort_unstable();
        words
    }

    /// Number of object phrases registered.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
