//! Syllables command.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexometria_core::syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

fn estimate(words: &[String]) -> Vec<WordSyllables> {
    words
        .iter()
        .map(|w| WordSyllables {
            word: w.clone(),
            syllables: syllables::count_syllables(w),
        })
        .collect()
}

/// Print the syllable estimate for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing syllables command");
    let counts = estimate(&args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        let width = counts.iter().map(|c| c.word.chars().count()).max().unwrap_or(0);
        for c in &counts {
            let pad = width - c.word.chars().count();
            println!("{}{}  {}", c.word.bold(), " ".repeat(pad), c.syllables);
        }
    }
    Ok(())
}
