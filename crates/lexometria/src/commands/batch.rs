//! Batch command: metrics for every row of a JSONL file.
//!
//! Each input line is a JSON object holding the text and, optionally, its
//! CoNLL-U annotation. Each output line is that object with the metrics keys
//! merged in. Rows that cannot be read still produce a line, with default
//! metrics, so output rows stay aligned with input rows.
//!
//! Rows are read in chunks and each chunk is analyzed on a rayon pool;
//! results are written back in input order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use rayon::ThreadPool;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use lexometria_core::{
    AnalyzeOptions, Config, MetricsRecord, TextMetricsAnalyzer, markdown, normalize_annotation,
};

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSONL input file.
    pub input: Utf8PathBuf,

    /// JSONL output file (stdout if omitted).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Field holding the text.
    #[arg(long, default_value = "response")]
    pub text_field: String,

    /// Field holding the CoNLL-U annotation.
    #[arg(long, default_value = "udpipe_result")]
    pub annotation_field: String,

    /// Skip dependency-parse metrics and lemmas.
    #[arg(long)]
    pub no_parse: bool,

    /// Report entity counts as zero.
    #[arg(long)]
    pub no_ner: bool,

    /// Leave the lemma string empty.
    #[arg(long)]
    pub no_lemmas: bool,

    /// Strip markdown from each text before analysis.
    #[arg(long)]
    pub strip_md: bool,

    /// Worker threads (0 uses every core).
    #[arg(short, long, default_value_t = 1, value_name = "N")]
    pub jobs: usize,
}

/// Rows analyzed together before their output is written.
const CHUNK_ROWS: usize = 256;

/// Counts reported when the batch finishes.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows written.
    pub rows: usize,
    /// Rows that were not JSON objects.
    pub invalid: usize,
    /// Rows with no usable text.
    pub empty: usize,
}

/// Metrics for one input row.
#[derive(Debug)]
enum RowOutcome {
    Analyzed(Map<String, Value>),
    Empty(Map<String, Value>),
    Invalid(Map<String, Value>),
}

impl RowOutcome {
    fn into_map(self) -> Map<String, Value> {
        match self {
            Self::Analyzed(m) | Self::Empty(m) | Self::Invalid(m) => m,
        }
    }
}

struct RowProcessor<'a> {
    analyzer: &'a TextMetricsAnalyzer,
    options: AnalyzeOptions,
    text_field: &'a str,
    annotation_field: &'a str,
    strip_md: bool,
}

impl RowProcessor<'_> {
    fn process(&self, line: &str, line_no: usize) -> RowOutcome {
        let mut row = match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!(line = line_no, "row is not a JSON object");
                return RowOutcome::Invalid(invalid_row(line_no));
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "row is not valid JSON");
                return RowOutcome::Invalid(invalid_row(line_no));
            }
        };

        let text = row
            .get(self.text_field)
            .and_then(Value::as_str)
            .map(|t| {
                if self.strip_md {
                    markdown::strip_to_prose(t)
                } else {
                    t.to_string()
                }
            })
            .unwrap_or_default();
        let annotation = row
            .get(self.annotation_field)
            .and_then(Value::as_str)
            .map(str::to_string);

        let record = if text.trim().is_empty() {
            MetricsRecord::default()
        } else {
            self.analyzer.analyze(
                &text,
                normalize_annotation(annotation.as_deref()),
                &self.options,
            )
        };
        let empty = text.trim().is_empty();
        row.extend(record.to_json_map());
        if empty {
            RowOutcome::Empty(row)
        } else {
            RowOutcome::Analyzed(row)
        }
    }
}

/// A row that could not be parsed: its line number plus default metrics.
fn invalid_row(line_no: usize) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("line".to_string(), Value::from(line_no));
    row.extend(MetricsRecord::default().to_json_map());
    row
}

fn progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {pos} rows {msg}") {
        pb.set_style(style);
    }
    pb
}

/// Analyze every row of a JSONL file.
#[instrument(name = "cmd_batch", skip_all, fields(input = %args.input))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(input = %args.input, output = ?args.output, "executing batch command");

    let mut config = config.clone();
    if args.no_parse {
        config.udpipe.enabled = false;
    }
    if args.no_ner {
        config.include_ner = false;
    }
    if args.no_lemmas {
        config.include_lemmatization = false;
    }

    let analyzer =
        TextMetricsAnalyzer::from_config(&config).context("failed to build the analyzer")?;
    let processor = RowProcessor {
        analyzer: &analyzer,
        options: AnalyzeOptions::from(&config),
        text_field: &args.text_field,
        annotation_field: &args.annotation_field,
        strip_md: args.strip_md,
    };

    let input = File::open(args.input.as_std_path())
        .with_context(|| format!("failed to open {}", args.input))?;
    let reader = BufReader::new(input);

    let mut writer: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path.as_std_path())
                .with_context(|| format!("failed to create {path}"))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs)
        .build()
        .context("failed to start worker threads")?;
    debug!(threads = pool.current_num_threads(), "worker pool ready");

    // Progress would interleave with rows written to stdout.
    let pb = progress_bar(quiet || args.output.is_none());
    let summary = run(&processor, reader, &mut writer, &pool, &pb)?;
    writer.flush().context("failed to flush output")?;
    pb.finish_and_clear();

    if global_json {
        eprintln!("{}", serde_json::to_string(&summary)?);
    } else if !quiet {
        eprintln!(
            "{} {} rows ({} invalid, {} empty)",
            "Done:".green(),
            summary.rows,
            summary.invalid,
            summary.empty,
        );
    }
    Ok(())
}

fn run<R: BufRead, W: Write + ?Sized>(
    processor: &RowProcessor<'_>,
    reader: R,
    writer: &mut W,
    pool: &ThreadPool,
    pb: &ProgressBar,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut chunk: Vec<(usize, String)> = Vec::with_capacity(CHUNK_ROWS);
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        chunk.push((line_no, line));
        if chunk.len() == CHUNK_ROWS {
            write_chunk(processor, &chunk, writer, pool, &mut summary)?;
            pb.inc(chunk.len() as u64);
            chunk.clear();
        }
    }
    write_chunk(processor, &chunk, writer, pool, &mut summary)?;
    pb.inc(chunk.len() as u64);
    debug!(?summary, "batch finished");
    Ok(summary)
}

fn write_chunk<W: Write + ?Sized>(
    processor: &RowProcessor<'_>,
    chunk: &[(usize, String)],
    writer: &mut W,
    pool: &ThreadPool,
    summary: &mut BatchSummary,
) -> anyhow::Result<()> {
    // indexed collect keeps input order
    let outcomes: Vec<RowOutcome> = pool.install(|| {
        chunk
            .par_iter()
            .map(|(line_no, line)| processor.process(line, *line_no))
            .collect()
    });
    for outcome in outcomes {
        match outcome {
            RowOutcome::Invalid(_) => summary.invalid += 1,
            RowOutcome::Empty(_) => summary.empty += 1,
            RowOutcome::Analyzed(_) => {}
        }
        serde_json::to_writer(&mut *writer, &Value::Object(outcome.into_map()))
            .context("failed to write output row")?;
        writer.write_all(b"\n").context("failed to write output row")?;
        summary.rows += 1;
    }
    Ok(())
}
