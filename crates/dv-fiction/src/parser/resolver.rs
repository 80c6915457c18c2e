//! Phrase resolution and verb suggestions.

use strsim::jaro_winkler;

use crate::vocabulary::{ObjectId, Vocabulary};

/// Minimum similarity for a verb suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.85;

/// Resolve the longest leading run of `tokens` that names an object.
///
/// Tries the whole phrase joined by spaces, then by hyphens, then ever
/// shorter prefixes, and finally each single token. Returns the object and
/// how many tokens it consumed; a single-token fallback consumes the whole
/// phrase.
pub fn resolve_phrase(vocab: &Vocabulary, tokens: &[String]) -> Option<(ObjectId, usize)> {
    for len in (1..=tokens.len()).rev() {
        let span = &tokens[..len];
        let spaced = span.join(" ");
        if let Some(id) = vocab.canonical_object(&spaced) {
            return Some((id.clone(), len));
        }
        if len > 1
            && let Some(id) = vocab.canonical_object(&span.join("-"))
        {
            return Some((id.clone(), len));
        }
    }
    tokens
        .iter()
        .find_map(|t| vocab.canonical_object(t))
        .map(|id| (id.clone(), tokens.len()))
}

/// The known verb closest to `word`, if any is close enough.
pub fn suggest_verb(vocab: &Vocabulary, word: &str) -> Option<String> {
    let word = word.to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for candidate in vocab.verb_words() {
        if candidate.len() < 2 {
            continue;
        }
        let score = jaro_winkler(&word, candidate);
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(w, _)| w.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::{ItemId, sample};

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn vocab() -> Vocabulary {
        Vocabulary::for_world(&sample::white_house().unwrap())
    }

    fn item(id: &str) -> ObjectId {
        ObjectId::Item(ItemId::from(id))
    }

    #[test]
    fn full_phrase_wins() {
        let v = vocab();
        assert_eq!(resolve_phrase(&v, &words("brass lantern")), Some((item("lamp"), 2)));
    }

    #[test]
    fn hyphenated_identifier() {
        let v = vocab();
        assert_eq!(resolve_phrase(&v, &words("trophy case")), Some((item("trophy-case"), 2)));
        assert_eq!(
            resolve_phrase(&v, &words("kitchen window")),
            Some((item("kitchen-window"), 2))
        );
    }

    #[test]
    fn prefix_leaves_the_rest() {
        let v = vocab();
        assert_eq!(resolve_phrase(&v, &words("lamp quickly")), Some((item("lamp"), 1)));
    }

    #[test]
    fn single_token_fallback_consumes_everything() {
        let v = vocab();
        assert_eq!(resolve_phrase(&v, &words("shiny old lantern")), Some((item("lamp"), 3)));
    }

    #[test]
    fn nothing_matches() {
        let v = vocab();
        assert_eq!(resolve_phrase(&v, &words("purple unicorn")), None);
        assert_eq!(resolve_phrase(&v, &[]), None);
    }

    #[test]
    fn suggests_close_verbs() {
        let v = Vocabulary::standard();
        assert_eq!(suggest_verb(&v, "exmaine").as_deref(), Some("examine"));
        assert_eq!(suggest_verb(&v, "inventroy").as_deref(), Some("inventory"));
        assert_eq!(suggest_verb(&v, "xyzzy"), None);
    }
}
