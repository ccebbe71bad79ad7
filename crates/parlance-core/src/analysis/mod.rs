//! Sentence analysis.
//!
//! [`analyze_sentence`] tags each token against a [`Lexicon`] in a single
//! left-to-right pass, collecting subjects, verbs and objects, then
//! classifies complete sentences by type and mood.
//!
//! Tagging rules, first match wins per token:
//!
//! 1. Verbs and helping verbs are collected as verbs.
//! 2. Articles, prepositions and standalone punctuation are skipped.
//! 3. A subject pronoun fills the subject slot, in object form, while no
//!    subject has been found yet.
//! 4. Known objects (keywords or aliases) become objects once a verb has been
//!    seen, and subjects before that.
//! 5. Anything else becomes the subject if there is none yet, an object if a
//!    verb has been seen, and is dropped otherwise.

pub mod classify;
pub mod reports;

pub use classify::classify;
pub use reports::{Mood, Outcome, SentenceAnalysis, SentenceType};

use crate::lexicon::Lexicon;
use crate::text;

/// Analyze one input string.
///
/// Total over all inputs: empty or unrecognizable text yields an
/// `Incomplete` analysis rather than an error.
///
/// ```
/// use parlance_core::analysis::{SentenceType, analyze_sentence};
/// use parlance_core::lexicon::Lexicon;
///
/// let lexicon = Lexicon::default();
/// let analysis = analyze_sentence(&lexicon, "what do you see");
/// assert_eq!(analysis.sentence_type, SentenceType::Interrogative);
/// ```
#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn analyze_sentence(lexicon: &Lexicon, input: &str) -> SentenceAnalysis {
    let tokens = text::tokenize(input);
    let mut state = TagState::default();

    for token in &tokens {
        state.tag(lexicon, token);
    }

    let TagState {
        mut analysis,
        found_subject,
        found_verb,
    } = state;

    analysis.is_sentence = found_subject && found_verb && !analysis.objects.is_empty();
    analysis.sentence_type = if analysis.is_sentence {
        classify(&tokens, &analysis.verbs)
    } else {
        SentenceType::Incomplete
    };
    analysis.mood = analysis.sentence_type.mood();

    tracing::debug!(
        tokens = tokens.len(),
        subjects = analysis.subjects.len(),
        verbs = analysis.verbs.len(),
        objects = analysis.objects.len(),
        sentence_type = %analysis.sentence_type,
        "sentence analyzed"
    );
    analysis
}

#[derive(Default)]
struct TagState {
    analysis: SentenceAnalysis,
    found_subject: bool,
    found_verb: bool,
}

impl TagState {
    fn tag(&mut self, lexicon: &Lexicon, token: &str) {
        if lexicon.is_verb(token) {
            self.analysis.verbs.push(token.to_string());
            self.found_verb = true;
            return;
        }

        if lexicon.is_skippable(token) {
            return;
        }

        if !self.found_subject
            && let Some(replacement) = lexicon.pronoun_replacement(token)
        {
            self.push_subject(lexicon, replacement);
            return;
        }

        if lexicon.is_known_object(token) {
            if self.found_verb {
                let resolved = lexicon.keyword(token).unwrap_or(token);
                self.push_object(lexicon, token, resolved);
                self.analysis
                    .resolved_aliases
                    .insert(token.to_string(), resolved.to_string());
            } else {
                self.push_subject(lexicon, token);
            }
        } else if !self.found_subject {
            self.push_subject(lexicon, token);
        } else if self.found_verb {
            self.push_object(lexicon, token, token);
        } else {
            tracing::trace!(token, "no slot for token");
        }
    }

    fn push_subject(&mut self, lexicon: &Lexicon, word: &str) {
        self.analysis.subjects.push(word.to_string());
        self.analysis
            .main_subject
            .get_or_insert_with(|| word.to_string());
        self.found_subject = true;
        self.note_formal(lexicon, word);
    }

    fn push_object(&mut self, lexicon: &Lexicon, word: &str, resolved: &str) {
        self.analysis.objects.push(word.to_string());
        self.analysis
            .main_object
            .get_or_insert_with(|| resolved.to_string());
        self.note_formal(lexicon, word);
    }

    fn note_formal(&mut self, lexicon: &Lexicon, word: &str) {
        if let Some(formal) = lexicon.formal_form(word) {
            self.analysis
                .formal_replacements
                .insert(word.to_string(), formal.to_string());
        }
    }
}
