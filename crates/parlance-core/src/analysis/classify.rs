//! Sentence type classification from the first and last tokens.

use crate::word_lists::{QUESTION_WORDS, REQUEST_OPENERS};

use super::reports::SentenceType;

/// Classify a complete sentence.
///
/// `tokens` are the raw lowercased tokens, so a trailing `?` or `!` is still
/// attached to the last one. `verbs` are the verbs collected in order. Returns
/// [`SentenceType::Incomplete`] when there are no tokens or no verbs.
pub fn classify(tokens: &[String], verbs: &[String]) -> SentenceType {
    let (Some(first), Some(last), Some(first_verb)) = (tokens.first(), tokens.last(), verbs.first())
    else {
        return SentenceType::Incomplete;
    };
    let first = first.as_str();

    if last.ends_with('?') || QUESTION_WORDS.contains(first) {
        SentenceType::Interrogative
    } else if last.ends_with('!') {
        SentenceType::Exclamatory
    } else if REQUEST_OPENERS.contains(first) || first_verb == "would" {
        SentenceType::Imperative
    } else {
        SentenceType::Declarative
    }
}
