use dv_core::Direction;

use crate::vocabulary::{ObjectId, Verb};

/// A resolved object phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    /// What the phrase resolved to.
    pub id: ObjectId,
    /// The words that were matched, joined by spaces.
    pub phrase: String,
}

impl ObjectRef {
    /// Pair an id with the phrase that named it.
    pub fn new(id: ObjectId, phrase: impl Into<String>) -> Self {
        Self {
            id,
            phrase: phrase.into(),
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The canonical verb.
    pub verb: Verb,
    /// Set for movement, e.g. `north` or `go north`.
    pub direction: Option<Direction>,
    /// The direct object.
    pub direct: Option<ObjectRef>,
    /// The preposition between the objects, e.g. `"in"`.
    pub preposition: Option<String>,
    /// The indirect object.
    pub indirect: Option<ObjectRef>,
    /// Free text for verbs like `save`, words joined by underscores.
    pub text: Option<String>,
    /// The input as typed.
    pub raw: String,
}

impl Command {
    /// A command with only a verb.
    pub fn verb(verb: Verb, raw: impl Into<String>) -> Self {
        Self {
            verb,
            direction: None,
            direct: None,
            preposition: None,
            indirect: None,
            text: None,
            raw: raw.into(),
        }
    }

    /// Walk in `direction`.
    pub fn movement(direction: Direction, raw: impl Into<String>) -> Self {
        Self {
            direction: Some(direction),
            ..Self::verb(Verb::Go, raw)
        }
    }

    /// The direct object's id.
    pub fn direct_id(&self) -> Option<&ObjectId> {
        self.direct.as_ref().map(|o| &o.id)
    }

    /// The indirect object's id.
    pub fn indirect_id(&self) -> Option<&ObjectId> {
        self.indirect.as_ref().map(|o| &o.id)
    }

    /// Whether this is a plain movement command.
    pub fn is_movement(&self) -> bool {
        self.verb == Verb::Go && self.direction.is_some()
    }
}
