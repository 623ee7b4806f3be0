//! Schema command: the JSON schema of the metrics record.

use clap::Args;
use tracing::{debug, instrument};

use lexometria_core::MetricsRecord;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Print on one line.
    #[arg(long)]
    pub compact: bool,
}

fn render(compact: bool) -> anyhow::Result<String> {
    let schema = schemars::schema_for!(MetricsRecord);
    Ok(if compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    })
}

/// Print the metrics record schema. Output is always JSON.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(compact = args.compact, "executing schema command");
    println!("{}", render(args.compact)?);
    Ok(())
}
