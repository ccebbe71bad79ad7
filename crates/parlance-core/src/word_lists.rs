//! Built-in word lists for sentence analysis.
//!
//! These seed every [`LexiconBuilder`](crate::lexicon::LexiconBuilder). The
//! builder copies them into owned sets, so a [`Lexicon`](crate::lexicon::Lexicon)
//! can be extended from configuration without touching these statics.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Basic action verbs.
pub static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "see", "go", "come", "give", "make", "read", "write", "listen", "think", "want", "need",
        "know", "feel", "try", "run", "jump", "talk", "bark", "eat", "sleep", "play", "walk",
        "sit", "stand", "like", "love", "hear",
    ]
    .into_iter()
    .collect()
});

/// Helping verbs (be, have, do, and the modals).
pub static AUXILIARY_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "being", "been", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can",
        "could",
    ]
    .into_iter()
    .collect()
});

/// Articles.
pub static ARTICLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["a", "an", "the"].into_iter().collect());

/// Prepositions.
pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "to", "for", "with", "by", "from", "of", "under", "over", "between",
        "among", "through", "behind", "beyond", "near", "before", "after", "during", "within",
        "without", "about", "across", "along", "around", "down", "into", "onto", "out", "up",
        "upon",
    ]
    .into_iter()
    .collect()
});

/// Standalone sentence-ending punctuation tokens.
pub static SENTENCE_TERMINATORS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| [".", "!", "?"].into_iter().collect());

/// Subject pronoun to object form.
pub static PRONOUN_REPLACEMENTS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [
            ("i", "me"),
            ("you", "you"),
            ("he", "him"),
            ("she", "her"),
            ("it", "it"),
            ("we", "us"),
            ("they", "them"),
        ]
        .into_iter()
        .collect()
    });

/// Casual words and their formal equivalents.
pub static INFORMAL_TO_FORMAL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [("kitty", "cat"), ("doggy", "dog"), ("birdie", "bird")]
            .into_iter()
            .collect()
    });

/// Words that open a question.
pub static QUESTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "what", "where", "when", "who", "whom", "whose", "which", "why", "how",
    ]
    .into_iter()
    .collect()
});

/// Words that open a request or command.
pub static REQUEST_OPENERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["do", "please", "let", "would"].into_iter().collect());

/// Alias groups registered by default: base word and its synonyms.
pub const DEFAULT_ALIAS_GROUPS: &[(&str, &[&str])] = &[
    ("cat", &["kitty", "kitten", "feline"]),
    ("dog", &["pup", "puppy", "hound", "canine"]),
    ("bird", &["birdie", "fowl", "avian"]),
];

/// Irregular singular to plural forms.
pub static IRREGULAR_PLURALS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [
            ("mouse", "mice"),
            ("child", "children"),
            ("person", "people"),
            ("foot", "feet"),
            ("tooth", "teeth"),
            ("goose", "geese"),
        ]
        .into_iter()
        .collect()
    });

/// Nouns whose plural is the same word.
pub static INVARIANT_PLURALS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["fish", "sheep", "deer", "species"].into_iter().collect());
