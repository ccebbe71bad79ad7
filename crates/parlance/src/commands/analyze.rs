//! Analyze command: sentence tagging and classification.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, instrument};

use parlance_core::analysis::{Outcome, SentenceAnalysis, SentenceType};
use parlance_core::lexicon::Lexicon;
use parlance_core::text::capitalize;

use super::read_input_file;
use crate::paint;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze (multiple words are joined with spaces).
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Vec<String>,

    /// Analyze each non-empty line of FILE instead.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<Utf8PathBuf>,

    /// Fail if any input is not a complete sentence.
    #[arg(long)]
    pub strict: bool,

    /// Fail if any input is not a complete sentence of this type.
    #[arg(long, value_enum, value_name = "TYPE")]
    pub expect: Option<SentenceType>,
}

#[derive(Serialize)]
struct AnalyzedInput<'a> {
    input: &'a str,
    #[serde(flatten)]
    analysis: &'a SentenceAnalysis,
}

/// Analyze text from the command line or a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, strict = args.strict, "executing analyze command");

    let inputs: Vec<String> = match args.file {
        Some(ref path) => read_input_file(path, max_input_bytes)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => {
            let text = args.text.join(" ");
            if let Some(max) = max_input_bytes
                && text.len() > max
            {
                bail!("input too large: {} bytes (limit: {max} bytes)", text.len());
            }
            vec![text]
        }
    };

    let progress = if args.file.is_some() && !global_json {
        ProgressBar::new(inputs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::with_template("{spinner} analyzing {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let analyses: Vec<SentenceAnalysis> = inputs
        .iter()
        .map(|input| {
            let analysis = lexicon.analyze(input);
            progress.inc(1);
            analysis
        })
        .collect();
    progress.finish_and_clear();

    if global_json {
        let records: Vec<AnalyzedInput<'_>> = inputs
            .iter()
            .zip(&analyses)
            .map(|(input, analysis)| AnalyzedInput { input, analysis })
            .collect();
        match (args.file.is_some(), records.as_slice()) {
            (false, [single]) => println!("{}", serde_json::to_string_pretty(single)?),
            _ => println!("{}", serde_json::to_string_pretty(&records)?),
        }
    } else {
        let show_input = args.file.is_some();
        for (input, analysis) in inputs.iter().zip(&analyses) {
            if show_input {
                println!("{}", paint::strong(input));
            }
            print_analysis(analysis, lexicon);
        }
    }

    let incomplete = analyses.iter().filter(|a| !a.is_sentence).count();
    if args.strict && incomplete > 0 {
        bail!(
            "{incomplete} of {} inputs are not complete sentences",
            analyses.len()
        );
    }
    if let Some(expected) = args.expect {
        let mismatched = analyses
            .iter()
            .filter(|a| a.sentence_type != expected)
            .count();
        if mismatched > 0 {
            bail!(
                "{mismatched} of {} inputs are not {expected} sentences",
                analyses.len()
            );
        }
    }

    Ok(())
}

fn print_analysis(analysis: &SentenceAnalysis, lexicon: &Lexicon) {
    match analysis.outcome() {
        Outcome::NotASentence => println!("{}", paint::bad("Not a sentence")),
        Outcome::SingleWord(word) => {
            println!("{} {}", paint::caution("Single word identified:"), capitalize(&word));
        }
        Outcome::Complete(sentence_type) => {
            println!(
                "{}",
                paint::good(&format!("Analysis complete! {sentence_type} sentence identified."))
            );
            print!("{}", analysis.report(lexicon));
        }
    }
    for (casual, formal) in &analysis.formal_replacements {
        println!("  {} {casual} -> {formal}", paint::dim("Formal:"));
    }
}
