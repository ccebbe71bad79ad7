//! Text processing utilities.
//!
//! Tokenization is deliberately minimal: lowercase, then split on runs of
//! whitespace. Punctuation stays attached to its word, which is what lets
//! the classifier see a trailing `?` or `!` on the last token.

/// Split input into lowercase, whitespace-delimited tokens.
///
/// Empty or whitespace-only input yields no tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
