//! Analyze command: the metrics record for one text.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexometria_core::{AnalyzeOptions, Config, MetricsRecord, TextMetricsAnalyzer, markdown};

use super::{read_input, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// CoNLL-U annotation of the text (skips the parsing service).
    #[arg(long, value_name = "FILE")]
    pub annotation: Option<Utf8PathBuf>,

    /// Skip dependency-parse metrics and lemmas.
    #[arg(long)]
    pub no_parse: bool,

    /// Report entity counts as zero.
    #[arg(long)]
    pub no_ner: bool,

    /// Leave the lemma string empty.
    #[arg(long)]
    pub no_lemmas: bool,

    /// Strip markdown before analysis (default for `.md` files).
    #[arg(long)]
    pub strip_md: bool,
}

impl AnalyzeArgs {
    /// Effective configuration after command-line overrides.
    pub fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if self.no_parse {
            config.udpipe.enabled = false;
        }
        if self.no_ner {
            config.include_ner = false;
        }
        if self.no_lemmas {
            config.include_lemmatization = false;
        }
        config
    }

    fn strip_markdown(&self) -> bool {
        self.strip_md || markdown::is_markdown_path(self.file.as_str())
    }
}

/// Analyze a single text and print its metrics record.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, annotation = ?args.annotation, "executing analyze command");

    let config = args.apply(config);
    let mut content = read_input(&args.file, max_input_bytes)?;
    if args.strip_markdown() {
        content = markdown::strip_to_prose(&content);
    }
    let annotation = args
        .annotation
        .as_ref()
        .map(|path| read_input_file(path, max_input_bytes))
        .transpose()?;

    let analyzer =
        TextMetricsAnalyzer::from_config(&config).context("failed to build the analyzer")?;
    let record = analyzer.analyze(
        &content,
        annotation.as_deref(),
        &AnalyzeOptions::from(&config),
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", args.file.bold());
        print_record(&record, analyzer.parse_enabled());
    }
    Ok(())
}

/// Print the record as an aligned key/value table.
fn print_record(record: &MetricsRecord, parse_enabled: bool) {
    let map = record.to_json_map();
    let width = MetricsRecord::KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    for key in MetricsRecord::KEYS {
        let Some(value) = map.get(key) else { continue };
        let shown = match value {
            serde_json::Value::String(s) if s.is_empty() => "(empty)".dimmed().to_string(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("  {:<width$}  {}", key.cyan(), shown);
    }
    if !parse_enabled {
        println!(
            "\n  {} dependency parsing disabled; complexity metrics are zero",
            "note:".yellow()
        );
    }
}
