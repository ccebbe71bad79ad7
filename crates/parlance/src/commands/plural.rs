//! Plural command: print generated plural forms.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use parlance_core::lexicon::pluralize;

/// Arguments for the `plural` subcommand.
#[derive(Args, Debug)]
pub struct PluralArgs {
    /// Words to pluralize.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PluralForm {
    singular: String,
    plural: Option<String>,
}

fn plural_forms(words: &[String]) -> Vec<PluralForm> {
    words
        .iter()
        .map(|w| {
            let singular = w.trim().to_lowercase();
            PluralForm {
                plural: pluralize(&singular),
                singular,
            }
        })
        .collect()
}

/// Print the plural of each word.
#[instrument(name = "cmd_plural", skip_all, fields(count = args.words.len()))]
pub fn cmd_plural(args: PluralArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing plural command");
    let forms = plural_forms(&args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&forms)?);
        return Ok(());
    }

    for form in &forms {
        match form.plural {
            Some(ref plural) => println!("{} -> {plural}", form.singular),
            None => println!("{} -> (none)", form.singular),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_are_normalized() {
        let forms = plural_forms(&["Leaf".to_string(), " ".to_string()]);
        assert_eq!(
            forms,
            vec![
                PluralForm {
                    singular: "leaf".to_string(),
                    plural: Some("leaves".to_string()),
                },
                PluralForm {
                    singular: String::new(),
                    plural: None,
                },
            ]
        );
    }
}
