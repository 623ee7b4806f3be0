//! Parse command: fetch the CoNLL-U annotation of a text.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use lexometria_core::annotation;
use lexometria_core::{AnnotationSource, Config, UdpipeClient, markdown};

use super::read_input;

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// File to parse (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Strip markdown before parsing (default for `.md` files).
    #[arg(long)]
    pub strip_md: bool,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    model: &'a str,
    sentences: usize,
    conllu: &'a str,
}

/// Fetch and print the dependency parse of a file.
#[instrument(name = "cmd_parse", skip_all, fields(file = %args.file))]
pub fn cmd_parse(
    args: ParseArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, url = %config.udpipe.url, "executing parse command");

    let mut content = read_input(&args.file, max_input_bytes)?;
    if args.strip_md || markdown::is_markdown_path(args.file.as_str()) {
        content = markdown::strip_to_prose(&content);
    }
    if content.trim().is_empty() {
        bail!("{} has no text to parse", args.file);
    }

    let client = UdpipeClient::new(&config.udpipe).context("failed to build the HTTP client")?;
    let conllu = client
        .fetch(&content)
        .with_context(|| format!("failed to parse {}", args.file))?;

    if global_json {
        let sentences = annotation::parse(&conllu)
            .with_context(|| format!("service returned malformed CoNLL-U for {}", args.file))?
            .len();
        let output = ParseOutput {
            model: client.model(),
            sentences,
            conllu: &conllu,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{conllu}");
    }
    Ok(())
}
