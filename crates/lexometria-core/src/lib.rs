//! Core library for lexometria.
//!
//! Quantitative linguistic metrics for Portuguese text, built for comparing
//! model output across prompt conditions. Every analysed text yields the same
//! flat [`MetricsRecord`]: syntactic complexity from a dependency parse,
//! stylometric statistics from an NLP pipeline, and a lemma string.
//!
//! # Modules
//!
//! - [`analyzer`] - The orchestrator producing a [`MetricsRecord`]
//! - [`annotation`] - CoNLL-U model and parser, UDPipe client
//! - [`complexity`] - Clause, coordination, depth and lexical metrics
//! - [`lemmas`] - Lemma string extraction
//! - [`stylometric`] - POS frequencies, lengths, punctuation, entities
//! - [`readability`] - Portuguese Flesch Reading Ease
//! - [`syllables`] - Portuguese syllable estimate
//! - [`nlp`] - Rule-based tokenizer, segmenter, tagger and recognizer
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use lexometria_core::{AnalyzeOptions, ConfigLoader, TextMetricsAnalyzer};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let analyzer = TextMetricsAnalyzer::from_config(&config).expect("analyzer");
//! let record = analyzer.analyze("O gato correu rápido.", None, &AnalyzeOptions::default());
//! println!("MLS: {}", record.mls);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod annotation;
pub mod complexity;
pub mod config;
pub mod error;
pub mod lemmas;
pub mod markdown;
pub mod metrics;
pub mod nlp;
pub mod pos;
pub mod readability;
pub mod stylometric;
pub mod syllables;

pub use analyzer::{AnalyzeOptions, TextMetricsAnalyzer, normalize_annotation};
pub use annotation::{AnnotationSource, Sentence, Token, UdpipeClient};
pub use config::{Config, ConfigLoader, LogLevel, UdpipeSettings};
pub use error::{
    AnalysisError, AnalysisResult, AnnotationError, AnnotationResult, ConfigError, ConfigResult,
};
pub use metrics::{ComplexityMetrics, MetricsRecord, StylometricMetrics};
pub use nlp::{NlpPipeline, RuleBasedPipeline};
pub use pos::Upos;
pub use stylometric::StylometricAnalyzer;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
