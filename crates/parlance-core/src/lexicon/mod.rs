//! Lexicon: the read-only word tables the sentence analyzer consults.
//!
//! A [`Lexicon`] is assembled once by a [`LexiconBuilder`] at startup and is
//! immutable afterwards, so it can be shared freely between threads.
//!
//! - [`plural`] - plural generation for keywords and aliases
//! - [`aliases`] - base word / synonym registry
//! - [`keywords`] - keyword index and the `key=value` source format
//!
//! # Example
//!
//! ```
//! use parlance_core::lexicon::LexiconBuilder;
//!
//! let mut builder = LexiconBuilder::new();
//! let report = builder.load_keywords_str("inline", "dog=Animal\n");
//! assert!(report.is_clean());
//!
//! let lexicon = builder.build();
//! assert_eq!(lexicon.keyword("puppies"), Some("Animal"));
//! ```

pub mod aliases;
pub mod keywords;
pub mod plural;

use std::collections::{HashMap, HashSet};

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use aliases::AliasRegistry;
pub use keywords::{KeywordEntry, KeywordIndex, LoadReport, LoadWarning, parse_keywords};
pub use plural::pluralize;

use crate::analysis::{SentenceAnalysis, analyze_sentence};
use crate::config::Config;
use crate::word_lists;

/// The fixed word classes used for tagging tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalSets {
    /// Action verbs.
    pub verbs: HashSet<String>,
    /// Helping verbs.
    pub auxiliary_verbs: HashSet<String>,
    /// Articles.
    pub articles: HashSet<String>,
    /// Prepositions.
    pub prepositions: HashSet<String>,
    /// Standalone punctuation tokens.
    pub sentence_terminators: HashSet<String>,
}

impl LexicalSets {
    /// The built-in word classes.
    pub fn defaults() -> Self {
        fn owned(set: &HashSet<&'static str>) -> HashSet<String> {
            set.iter().map(|w| (*w).to_string()).collect()
        }

        Self {
            verbs: owned(&word_lists::VERBS),
            auxiliary_verbs: owned(&word_lists::AUXILIARY_VERBS),
            articles: owned(&word_lists::ARTICLES),
            prepositions: owned(&word_lists::PREPOSITIONS),
            sentence_terminators: owned(&word_lists::SENTENCE_TERMINATORS),
        }
    }
}

/// How a word is classified by a [`Lexicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WordTag {
    /// Action verb.
    Verb,
    /// Helping verb.
    Auxiliary,
    /// Article.
    Article,
    /// Preposition.
    Preposition,
    /// Sentence-ending punctuation.
    Terminator,
    /// Subject pronoun.
    Pronoun,
    /// Has a keyword value.
    Keyword,
    /// Registered in the alias registry.
    Alias,
}

/// Immutable word tables for sentence analysis.
#[derive(Debug, Clone)]
pub struct Lexicon {
    sets: LexicalSets,
    pronouns: HashMap<String, String>,
    informal: HashMap<String, String>,
    aliases: AliasRegistry,
    keywords: KeywordIndex,
}

impl Lexicon {
    /// Start building a lexicon seeded with the built-in tables.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Analyze one input string against this lexicon.
    pub fn analyze(&self, input: &str) -> SentenceAnalysis {
        analyze_sentence(self, input)
    }

    /// Whether `token` is an action or helping verb.
    pub fn is_verb(&self, token: &str) -> bool {
        self.sets.auxiliary_verbs.contains(token) || self.sets.verbs.contains(token)
    }

    /// Whether `token` carries no subject/object meaning (articles,
    /// prepositions, standalone punctuation).
    pub fn is_skippable(&self, token: &str) -> bool {
        self.sets.articles.contains(token)
            || self.sets.prepositions.contains(token)
            || self.sets.sentence_terminators.contains(token)
    }

    /// Object form of a subject pronoun.
    pub fn pronoun_replacement(&self, token: &str) -> Option<&str> {
        self.pronouns.get(token).map(String::as_str)
    }

    /// Formal equivalent of a casual word.
    pub fn formal_form(&self, token: &str) -> Option<&str> {
        self.informal.get(token).map(String::as_str)
    }

    /// Keyword value for `word`.
    pub fn keyword(&self, word: &str) -> Option<&str> {
        self.keywords.get(word)
    }

    /// Whether `token` names a known object, either by keyword or by alias.
    pub fn is_known_object(&self, token: &str) -> bool {
        self.keywords.contains(token) || self.aliases.contains(token)
    }

    /// Every class `word` belongs to, in a stable order.
    pub fn tags(&self, word: &str) -> Vec<WordTag> {
        let word = word.trim().to_lowercase();
        let checks = [
            (WordTag::Verb, self.sets.verbs.contains(&word)),
            (WordTag::Auxiliary, self.sets.auxiliary_verbs.contains(&word)),
            (WordTag::Article, self.sets.articles.contains(&word)),
            (WordTag::Preposition, self.sets.prepositions.contains(&word)),
            (WordTag::Terminator, self.sets.sentence_terminators.contains(&word)),
            (WordTag::Pronoun, self.pronouns.contains_key(&word)),
            (WordTag::Keyword, self.keywords.contains(&word)),
            (WordTag::Alias, self.aliases.contains(&word)),
        ];
        checks
            .into_iter()
            .filter_map(|(tag, hit)| hit.then_some(tag))
            .collect()
    }

    /// The word classes.
    pub const fn sets(&self) -> &LexicalSets {
        &self.sets
    }

    /// The alias registry.
    pub const fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    /// The keyword index.
    pub const fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        LexiconBuilder::new().build()
    }
}

/// Assembles a [`Lexicon`].
///
/// Keyword entries are expanded against the alias registry only in
/// [`build`](Self::build), so aliases and keyword sources can be added in
/// any order.
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    sets: LexicalSets,
    pronouns: HashMap<String, String>,
    informal: HashMap<String, String>,
    aliases: AliasRegistry,
    entries: Vec<KeywordEntry>,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Create a builder seeded with the built-in word classes, pronouns,
    /// informal words and alias groups.
    pub fn new() -> Self {
        let mut aliases = AliasRegistry::new();
        for (base, group) in word_lists::DEFAULT_ALIAS_GROUPS {
            aliases.register(base, group.iter());
        }

        Self {
            sets: LexicalSets::defaults(),
            pronouns: word_lists::PRONOUN_REPLACEMENTS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            informal: word_lists::INFORMAL_TO_FORMAL
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            aliases,
            entries: Vec::new(),
        }
    }

    /// Register `aliases` as synonyms of `base`.
    pub fn register_alias<I, S>(&mut self, base: &str, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aliases.register(base, aliases);
        self
    }

    /// Add words to the action verb set.
    pub fn add_verbs<I, S>(&mut self, verbs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sets.verbs.extend(
            verbs
                .into_iter()
                .map(|v| v.as_ref().trim().to_lowercase())
                .filter(|v| !v.is_empty()),
        );
        self
    }

    /// Apply the lexicon settings from configuration: extra alias groups
    /// and extra verbs.
    pub fn apply_config(&mut self, config: &Config) -> &mut Self {
        if let Some(ref groups) = config.aliases {
            for (base, group) in groups {
                self.register_alias(base, group);
            }
        }
        if let Some(ref verbs) = config.extra_verbs {
            self.add_verbs(verbs);
        }
        self
    }

    /// Queue the entries of an in-memory keyword source.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn load_keywords_str(&mut self, source: &str, text: &str) -> LoadReport {
        let (entries, warnings) = parse_keywords(text);
        for warning in &warnings {
            tracing::debug!(source, %warning, "skipping keyword line");
        }

        let report = LoadReport {
            source: source.to_string(),
            entries: entries.len(),
            warnings,
        };
        self.entries.extend(entries);
        tracing::debug!(
            source,
            entries = report.entries,
            skipped = report.warnings.len(),
            "keyword source parsed"
        );
        report
    }

    /// Queue the entries of a keyword file.
    ///
    /// A file that cannot be read is reported, never fatal: the lexicon is
    /// simply built without its entries.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load_keywords_file(&mut self, path: &Utf8Path) -> LoadReport {
        match keywords::read_keyword_source(path) {
            Ok(text) => self.load_keywords_str(path.as_str(), &text),
            Err(err) => {
                tracing::debug!(error = %err, "keyword source unavailable, continuing without it");
                LoadReport {
                    source: path.to_string(),
                    entries: 0,
                    warnings: vec![LoadWarning::SourceUnavailable {
                        source: path.to_string(),
                        reason: err.to_string(),
                    }],
                }
            }
        }
    }

    /// Expand queued keyword entries and freeze the tables.
    ///
    /// Each entry maps its word and plural to the value, then every alias of
    /// the word (with plurals), then every base word the word is an alias of
    /// (with plurals). Later entries win.
    #[tracing::instrument(skip_all, fields(entries = self.entries.len()))]
    pub fn build(self) -> Lexicon {
        let mut keywords = KeywordIndex::new();

        for entry in &self.entries {
            keywords.insert_with_plural(&entry.word, &entry.value);
            for alias in self.aliases.aliases_of(&entry.word) {
                keywords.insert_with_plural(alias, &entry.value);
            }
            for base in self.aliases.bases_of(&entry.word) {
                keywords.insert_with_plural(base, &entry.value);
            }
        }

        tracing::debug!(
            keywords = keywords.len(),
            alias_groups = self.aliases.len(),
            verbs = self.sets.verbs.len() + self.sets.auxiliary_verbs.len(),
            "lexicon built"
        );

        Lexicon {
            sets: self.sets,
            pronouns: self.pronouns,
            informal: self.informal,
            aliases: self.aliases,
            keywords,
        }
    }
}
