use log::debug;

use super::command::{Command, ObjectRef};
use super::resolver::{resolve_phrase, suggest_verb};
use crate::error::ParseError;
use crate::vocabulary::{ObjectId, Verb, Vocabulary};

const ARTICLES: &[&str] = &["the", "a", "an"];
const PRONOUNS: &[&str] = &["it", "them"];

/// Parses lines of input into commands.
///
/// The only state kept between calls is the last object the player named,
/// which `it` and `them` refer to.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    referent: Option<ObjectId>,
}

impl Parser {
    /// A parser with no referent.
    pub fn new() -> Self {
        Self::default()
    }

    /// What `it` currently means.
    pub fn referent(&self) -> Option<&ObjectId> {
        self.referent.as_ref()
    }

    /// Forget the referent, e.g. after a restore.
    pub fn forget(&mut self) {
        self.referent = None;
    }

    /// Parse one line.
    pub fn parse(&mut self, vocab: &Vocabulary, input: &str) -> Result<Command, ParseError> {
        let raw = input.trim();
        let mut tokens = normalize(raw);
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some(referent) = &self.referent {
            for token in tokens.iter_mut() {
                if PRONOUNS.contains(&token.as_str()) {
                    *token = referent.as_str().to_string();
                }
            }
        }

        // Bare direction, then `go <direction>`.
        if let [word] = tokens.as_slice()
            && let Some(dir) = vocab.canonical_direction(word)
        {
            return Ok(Command::movement(dir, raw));
        }
        if let [verb, word] = tokens.as_slice()
            && vocab.is_movement_verb(verb)
            && let Some(dir) = vocab.canonical_direction(word)
        {
            return Ok(Command::movement(dir, raw));
        }

        let (verb, span) = resolve_verb(vocab, &tokens)?;
        let typed_verb = tokens[..span].join(" ");
        let mut command = Command::verb(verb, raw);
        let rest = &tokens[span..];
        if rest.is_empty() {
            debug!("parsed verb-only {verb}");
            return Ok(command);
        }

        if verb.takes_free_text() {
            command.text = Some(rest.join("_"));
            return Ok(command);
        }

        let prep_at = rest
            .iter()
            .position(|t| vocab.is_preposition(t))
            .unwrap_or(rest.len());
        let (phrase, after) = rest.split_at(prep_at);

        if let [word] = phrase
            && let Some(dir) = vocab.canonical_direction(word)
            && vocab.canonical_object(word).is_none()
        {
            command.direction = Some(dir);
        } else if !phrase.is_empty() {
            let (id, used) = resolve_phrase(vocab, phrase)
                .ok_or_else(|| ParseError::UnknownObject(phrase[0].clone()))?;
            if let Some(extra) = phrase.get(used) {
                return Err(ParseError::NotPreposition(extra.clone()));
            }
            command.direct = Some(ObjectRef::new(id, phrase[..used].join(" ")));
        }

        if let Some((prep, indirect)) = after.split_first() {
            if indirect.is_empty() {
                match (verb, prep.as_str()) {
                    (Verb::Turn, "on") => command.verb = Verb::Light,
                    (Verb::Turn, "off") => command.verb = Verb::Extinguish,
                    _ => {
                        return Err(ParseError::DanglingPreposition {
                            verb: typed_verb,
                            preposition: prep.clone(),
                        });
                    }
                }
            } else {
                let (id, used) = resolve_phrase(vocab, indirect)
                    .ok_or_else(|| ParseError::UnknownObject(indirect[0].clone()))?;
                if let Some(extra) = indirect.get(used) {
                    return Err(ParseError::NotPreposition(extra.clone()));
                }
                command.preposition = Some(prep.clone());
                command.indirect = Some(ObjectRef::new(id, indirect[..used].join(" ")));
            }
        }

        if let Some(direct) = &command.direct {
            self.referent = Some(direct.id.clone());
        }
        debug!(
            "parsed {} direct={:?} prep={:?} indirect={:?}",
            command.verb,
            command.direct_id(),
            command.preposition,
            command.indirect_id()
        );
        Ok(command)
    }
}

/// Lowercase, split, strip trailing punctuation and drop articles.
fn normalize(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let trimmed = lower.trim_end_matches(|c: char| c.is_ascii_punctuation());
            if trimmed.is_empty() {
                lower
            } else {
                trimmed.to_string()
            }
        })
        .filter(|w| !ARTICLES.contains(&w.as_str()))
        .collect()
}

/// Two-word verbs first, then one word.
fn resolve_verb(vocab: &Vocabulary, tokens: &[String]) -> Result<(Verb, usize), ParseError> {
    if let [first, second, ..] = tokens
        && let Some(verb) = vocab.canonical_verb(&format!("{first} {second}"))
    {
        return Ok((verb, 2));
    }
    let first = &tokens[0];
    vocab
        .canonical_verb(first)
        .map(|verb| (verb, 1))
        .ok_or_else(|| ParseError::UnknownWord {
            word: first.clone(),
            suggestion: suggest_verb(vocab, first),
        })
}
