//! Styled terminal output.
//!
//! Every helper goes through `if_supports_color`, so styling follows the
//! `--color` override and falls back to plain text when stdout is not a
//! color terminal.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream, Style};

/// Secondary text such as field labels.
pub fn dim<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

/// Emphasized text.
pub fn strong<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.bold())
        .to_string()
}

/// Section heading.
pub fn heading<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.style(Style::new().bold().underline()))
        .to_string()
}

/// Success or a found value.
pub fn good<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Caution.
pub fn caution<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.yellow())
        .to_string()
}

/// Failure.
pub fn bad<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.red())
        .to_string()
}

/// Paths, URLs and resolved names.
pub fn link<T: Display + ?Sized>(text: &T) -> impl Display + '_ {
    text.if_supports_color(Stream::Stdout, |t| t.cyan())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_color_leaves_plain_text() {
        owo_colors::set_override(false);
        assert_eq!(caution("Single word identified:").to_string(), "Single word identified:");
        assert_eq!(heading("Lexicon").to_string(), "Lexicon");
        assert_eq!(dim(&String::from("Keyword")).to_string(), "Keyword");
    }
}
