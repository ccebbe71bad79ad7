//! English plural generation for keyword expansion.
//!
//! Rules apply in priority order: the irregular table, then invariant
//! nouns, then suffix rules. Suffix rules assume lowercase input.

use crate::word_lists::{INVARIANT_PLURALS, IRREGULAR_PLURALS};

/// Suffixes that take "-es" (box, buzz, dish, church).
const SIBILANT_SUFFIXES: &[&str] = &["s", "x", "z", "sh", "ch"];

/// Returns the plural form of `word`, or `None` for an empty word.
///
/// Invariant nouns (fish, sheep, ...) return the word unchanged.
///
/// ```
/// use parlance_core::lexicon::pluralize;
///
/// assert_eq!(pluralize("knife").as_deref(), Some("knives"));
/// assert_eq!(pluralize("child").as_deref(), Some("children"));
/// assert_eq!(pluralize(""), None);
/// ```
pub fn pluralize(word: &str) -> Option<String> {
    if word.is_empty() {
        return None;
    }

    if let Some(plural) = IRREGULAR_PLURALS.get(word) {
        return Some((*plural).to_string());
    }

    if INVARIANT_PLURALS.contains(word) {
        return Some(word.to_string());
    }

    if SIBILANT_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return Some(format!("{word}es"));
    }

    if let Some(stem) = word.strip_suffix('y')
        && stem.chars().last().is_some_and(|c| !is_vowel(c))
    {
        return Some(format!("{stem}ies"));
    }

    // "fe" has to be tested before "f"
    if let Some(stem) = word.strip_suffix("fe") {
        return Some(format!("{stem}ves"));
    }

    if let Some(stem) = word.strip_suffix('f') {
        return Some(format!("{stem}ves"));
    }

    Some(format!("{word}s"))
}

const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
