//! Result types for sentence analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use
//! in CLI JSON output and the `schema` command.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Grammatical type of a complete sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SentenceType {
    /// A question.
    Interrogative,
    /// An exclamation.
    Exclamatory,
    /// A command or request.
    Imperative,
    /// A statement.
    Declarative,
    /// Missing a subject, verb, or object.
    #[default]
    Incomplete,
}

impl SentenceType {
    /// The type name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interrogative => "Interrogative",
            Self::Exclamatory => "Exclamatory",
            Self::Imperative => "Imperative",
            Self::Declarative => "Declarative",
            Self::Incomplete => "Incomplete",
        }
    }

    /// The mood that goes with this type.
    pub const fn mood(&self) -> Mood {
        match self {
            Self::Interrogative => Mood::Questioning,
            Self::Exclamatory => Mood::Emphatic,
            Self::Imperative => Mood::Requesting,
            Self::Declarative => Mood::Neutral,
            Self::Incomplete => Mood::Undefined,
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse pragmatic reading of a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Mood {
    /// Asking something.
    Questioning,
    /// Exclaiming.
    Emphatic,
    /// Asking for something to be done.
    Requesting,
    /// Plain statement.
    Neutral,
    /// Not a complete sentence.
    #[default]
    Undefined,
}

impl Mood {
    /// The mood name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Questioning => "Questioning",
            Self::Emphatic => "Emphatic",
            Self::Requesting => "Requesting",
            Self::Neutral => "Neutral",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured analysis of one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceAnalysis {
    /// Subject tokens in order of appearance. Pronouns appear in object form.
    pub subjects: Vec<String>,
    /// Verb tokens in order of appearance.
    pub verbs: Vec<String>,
    /// Object tokens in order of appearance.
    pub objects: Vec<String>,
    /// First subject found.
    pub main_subject: Option<String>,
    /// First object found, resolved to its keyword value when it has one.
    pub main_object: Option<String>,
    /// Whether a subject, a verb and at least one object were found.
    pub is_sentence: bool,
    /// Sentence type; `Incomplete` unless `is_sentence`.
    pub sentence_type: SentenceType,
    /// Mood; `Undefined` unless `is_sentence`.
    pub mood: Mood,
    /// Known object tokens and the keyword value they resolved to.
    pub resolved_aliases: BTreeMap<String, String>,
    /// Casual subject/object words and their formal equivalents.
    pub formal_replacements: BTreeMap<String, String>,
}

/// What a caller should present for an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing usable was recognized.
    NotASentence,
    /// Incomplete, but a lone subject word was recognized.
    SingleWord(String),
    /// A complete sentence of the given type.
    Complete(SentenceType),
}

impl SentenceAnalysis {
    /// Classify the analysis for presentation.
    pub fn outcome(&self) -> Outcome {
        if self.is_sentence {
            return Outcome::Complete(self.sentence_type);
        }
        self.subjects
            .first()
            .map_or(Outcome::NotASentence, |s| Outcome::SingleWord(s.clone()))
    }

    /// Render a plain-text report, annotating subjects and objects with
    /// their keyword values from `lexicon`.
    pub fn report(&self, lexicon: &Lexicon) -> String {
        if !self.is_sentence {
            return "Not a complete sentence".to_string();
        }

        let mut out = String::from("Sentence Analysis:\n");
        let _ = writeln!(out, "Type: {}", self.sentence_type);
        let _ = writeln!(out, "Mood: {}", self.mood);

        if !self.subjects.is_empty() {
            let _ = writeln!(out, "Subject(s): {}", with_keywords(&self.subjects, lexicon));
        }
        if !self.verbs.is_empty() {
            let _ = writeln!(out, "Verb(s): {}", self.verbs.join(", "));
        }
        if !self.objects.is_empty() {
            let _ = writeln!(out, "Object(s): {}", with_keywords(&self.objects, lexicon));
        }
        if !self.resolved_aliases.is_empty() {
            out.push_str("Resolved Aliases:\n");
            for (token, value) in &self.resolved_aliases {
                let _ = writeln!(out, "  {token} -> {value}");
            }
        }
        out
    }
}

fn with_keywords(words: &[String], lexicon: &Lexicon) -> String {
    words
        .iter()
        .map(|word| match lexicon.keyword(word) {
            Some(value) => format!("{word} ({value})"),
            None => word.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
