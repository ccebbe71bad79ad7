//! Schema command: print the JSON schema of `analyze --json` output.

use clap::Args;
use tracing::{debug, instrument};

use parlance_core::analysis::SentenceAnalysis;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON schema for [`SentenceAnalysis`].
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(SentenceAnalysis);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
