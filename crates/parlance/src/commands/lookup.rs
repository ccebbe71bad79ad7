//! Lookup command: show everything the lexicon knows about a word.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use parlance_core::lexicon::{Lexicon, WordTag, pluralize};

use crate::paint;

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Word to look up.
    pub word: String,
}

#[derive(Debug, Serialize)]
struct WordInfo {
    word: String,
    tags: Vec<WordTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    canonical: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alias_of: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    object_form: Option<String>,
}

impl WordInfo {
    fn gather(lexicon: &Lexicon, raw: &str) -> Self {
        let word = raw.trim().to_lowercase();
        let aliases = lexicon.aliases();
        Self {
            tags: lexicon.tags(&word),
            keyword: lexicon.keyword(&word).map(str::to_string),
            canonical: aliases.canonical(&word).to_string(),
            aliases: aliases.aliases_of(&word).map(str::to_string).collect(),
            alias_of: aliases.bases_of(&word).map(str::to_string).collect(),
            plural: pluralize(&word),
            formal: lexicon.formal_form(&word).map(str::to_string),
            object_form: lexicon.pronoun_replacement(&word).map(str::to_string),
            word,
        }
    }
}

/// Look a word up in the lexicon.
#[instrument(name = "cmd_lookup", skip_all, fields(word = %args.word))]
pub fn cmd_lookup(args: LookupArgs, global_json: bool, lexicon: &Lexicon) -> anyhow::Result<()> {
    debug!(word = %args.word, "executing lookup command");
    let info = WordInfo::gather(lexicon, &args.word);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", paint::strong(&info.word));
    if info.tags.is_empty() {
        println!("  {}: {}", paint::dim("Tags"), paint::caution("(unknown word)"));
    } else {
        let tags: Vec<String> = info
            .tags
            .iter()
            .map(|t| format!("{t:?}").to_lowercase())
            .collect();
        println!("  {}: {}", paint::dim("Tags"), tags.join(", "));
    }
    match info.keyword {
        Some(ref value) => println!("  {}: {}", paint::dim("Keyword"), paint::good(value)),
        None => println!("  {}: {}", paint::dim("Keyword"), paint::dim("(none)")),
    }
    if info.canonical != info.word {
        println!("  {}: {}", paint::dim("Canonical"), paint::link(&info.canonical));
    }
    if !info.aliases.is_empty() {
        println!("  {}: {}", paint::dim("Aliases"), info.aliases.join(", "));
    }
    if !info.alias_of.is_empty() {
        println!("  {}: {}", paint::dim("Alias of"), info.alias_of.join(", "));
    }
    if let Some(ref plural) = info.plural {
        println!("  {}: {plural}", paint::dim("Plural"));
    }
    if let Some(ref formal) = info.formal {
        println!("  {}: {formal}", paint::dim("Formal"));
    }
    if let Some(ref object_form) = info.object_form {
        println!("  {}: {object_form}", paint::dim("Object form"));
    }

    Ok(())
}
