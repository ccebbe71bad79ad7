//! Alias registry: base words and their synonyms.
//!
//! Links are stored in two tables, base to aliases and alias to bases, so
//! a lookup resolves in either direction without scanning.

use std::collections::{BTreeMap, BTreeSet};

/// Bidirectional mapping between base words and their aliases.
///
/// Words are normalized to trimmed lowercase on insertion. Registering the
/// same pair twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRegistry {
    aliases: BTreeMap<String, BTreeSet<String>>,
    bases: BTreeMap<String, BTreeSet<String>>,
}

impl AliasRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `aliases` as synonyms of `base`.
    ///
    /// Each alias is also linked back to `base`. Empty words and an alias
    /// equal to its own base are ignored.
    pub fn register<I, S>(&mut self, base: &str, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = normalize(base);
        if base.is_empty() {
            return;
        }

        let group = self.aliases.entry(base.clone()).or_default();
        for alias in aliases {
            let alias = normalize(alias.as_ref());
            if alias.is_empty() || alias == base {
                continue;
            }
            group.insert(alias.clone());
            self.bases.entry(alias).or_default().insert(base.clone());
        }
    }

    /// Whether `word` is registered as a base or as an alias.
    pub fn contains(&self, word: &str) -> bool {
        self.aliases.contains_key(word) || self.bases.contains_key(word)
    }

    /// Aliases registered for `base`.
    pub fn aliases_of(&self, base: &str) -> impl Iterator<Item = &str> {
        self.aliases
            .get(base)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Base words that list `alias` among their synonyms.
    pub fn bases_of(&self, alias: &str) -> impl Iterator<Item = &str> {
        self.bases.get(alias).into_iter().flatten().map(String::as_str)
    }

    /// Every word one link away from `word`, in either direction.
    pub fn related(&self, word: &str) -> BTreeSet<&str> {
        self.aliases_of(word).chain(self.bases_of(word)).collect()
    }

    /// The base word `word` stands for.
    ///
    /// An alias of several bases resolves to the alphabetically first one;
    /// anything else resolves to itself.
    pub fn canonical<'a>(&'a self, word: &'a str) -> &'a str {
        self.bases_of(word).next().unwrap_or(word)
    }

    /// Iterate over base words and their alias sets.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.aliases.iter().map(|(base, set)| (base.as_str(), set))
    }

    /// Number of base words.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether no base word is registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog_registry() -> AliasRegistry {
        let mut registry = AliasRegistry::new();
        registry.register("dog", ["pup", "puppy", "hound", "canine"]);
        registry
    }

    #[test]
    fn aliases_reach_their_base() {
        let registry = dog_registry();
        for alias in ["pup", "puppy", "hound", "canine"] {
            assert!(registry.contains(alias));
            assert!(registry.related(alias).contains("dog"), "{alias} should reach dog");
            assert_eq!(registry.canonical(alias), "dog");
        }
    }

    #[test]
    fn base_reaches_its_aliases() {
        let registry = dog_registry();
        let related = registry.related("dog");
        assert_eq!(related.len(), 4);
        assert!(related.contains("puppy"));
        assert_eq!(registry.canonical("dog"), "dog");
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = dog_registry();
        registry.register("dog", ["puppy", "pup"]);
        assert_eq!(registry.aliases_of("dog").count(), 4);
        assert_eq!(registry.bases_of("puppy").count(), 1);
    }

    #[test]
    fn reregistration_unions_new_aliases() {
        let mut registry = dog_registry();
        registry.register("dog", ["doggy"]);
        assert_eq!(registry.aliases_of("dog").count(), 5);
        assert_eq!(registry.canonical("doggy"), "dog");
    }

    #[test]
    fn words_are_normalized() {
        let mut registry = AliasRegistry::new();
        registry.register("  Cat ", ["KITTY", "", "cat"]);
        assert!(registry.contains("cat"));
        assert_eq!(registry.aliases_of("cat").collect::<Vec<_>>(), vec!["kitty"]);
    }

    #[test]
    fn unknown_word_is_its_own_canonical() {
        let registry = dog_registry();
        assert!(!registry.contains("zebra"));
        assert_eq!(registry.canonical("zebra"), "zebra");
        assert!(registry.related("zebra").is_empty());
    }

    #[test]
    fn shared_alias_links_to_both_bases() {
        let mut registry = dog_registry();
        registry.register("wolf", ["canine"]);
        let bases: Vec<_> = registry.bases_of("canine").collect();
        assert_eq!(bases, vec!["dog", "wolf"]);
        assert_eq!(registry.canonical("canine"), "dog");
    }
}
