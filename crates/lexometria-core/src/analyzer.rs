//! The unified metrics orchestrator.
//!
//! [`TextMetricsAnalyzer::analyze`] is the single entry point callers use. It
//! never fails: a missing service, a malformed annotation or a pipeline error
//! degrades to default values, so every call yields a complete
//! [`MetricsRecord`].

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::annotation::{self, AnnotationSource, Sentence, UdpipeClient};
use crate::complexity;
use crate::config::Config;
use crate::error::AnalysisResult;
use crate::lemmas;
use crate::metrics::MetricsRecord;
use crate::nlp::{NlpPipeline, RuleBasedPipeline};
use crate::stylometric::{StylometricAnalyzer, preview};

/// Annotation values that mean "no annotation" in tabular inputs.
const MISSING_SENTINELS: &[&str] = &["nan", "NaN", "none", "None", "null", "NULL"];

/// Map empty, whitespace and missing-value sentinels to `None`.
///
/// Tabular sources often carry `"nan"` or `"None"` where an annotation is
/// absent; those must trigger a fresh fetch instead of parsing to nothing.
pub fn normalize_annotation(annotation: Option<&str>) -> Option<&str> {
    annotation.filter(|a| {
        let trimmed = a.trim();
        !trimmed.is_empty() && !MISSING_SENTINELS.contains(&trimmed)
    })
}

/// Per-call switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Count named entities.
    pub include_ner: bool,
    /// Produce the lemma string.
    pub include_lemmatization: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_ner: true,
            include_lemmatization: true,
        }
    }
}

impl From<&Config> for AnalyzeOptions {
    fn from(config: &Config) -> Self {
        Self {
            include_ner: config.include_ner,
            include_lemmatization: config.include_lemmatization,
        }
    }
}

/// Computes the full metrics record for a text.
#[derive(Clone)]
pub struct TextMetricsAnalyzer {
    stylometric: StylometricAnalyzer,
    annotator: Option<Arc<dyn AnnotationSource>>,
}

impl std::fmt::Debug for TextMetricsAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMetricsAnalyzer")
            .field("parse_enabled", &self.parse_enabled())
            .finish_non_exhaustive()
    }
}

impl TextMetricsAnalyzer {
    /// Build from a pipeline and an optional annotation source.
    ///
    /// Without an annotation source, dependency-parse metrics and lemmas
    /// stay at their defaults.
    pub fn new(
        pipeline: Arc<dyn NlpPipeline>,
        annotator: Option<Arc<dyn AnnotationSource>>,
    ) -> Self {
        Self {
            stylometric: StylometricAnalyzer::new(pipeline),
            annotator,
        }
    }

    /// Build the rule-based pipeline and, if enabled, the UDPipe client.
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline matchers fail to compile or the HTTP
    /// client cannot be created.
    pub fn from_config(config: &Config) -> AnalysisResult<Self> {
        let pipeline: Arc<dyn NlpPipeline> = Arc::new(RuleBasedPipeline::new()?);
        let annotator: Option<Arc<dyn AnnotationSource>> = if config.udpipe.enabled {
            Some(Arc::new(UdpipeClient::new(&config.udpipe)?))
        } else {
            None
        };
        debug!(
            parse_enabled = annotator.is_some(),
            "metrics analyzer constructed"
        );
        Ok(Self::new(pipeline, annotator))
    }

    /// Whether dependency-parse metrics are computed.
    pub fn parse_enabled(&self) -> bool {
        self.annotator.is_some()
    }

    /// Compute the metrics record for `text`.
    ///
    /// `annotation` is CoNLL-U for `text`; when `None` and parsing is enabled
    /// it is fetched from the annotation source. Pass values through
    /// [`normalize_annotation`] first when they come from a table.
    #[tracing::instrument(
        skip(self, text, annotation),
        fields(text_len = text.len(), annotated = annotation.is_some())
    )]
    pub fn analyze(
        &self,
        text: &str,
        annotation: Option<&str>,
        options: &AnalyzeOptions,
    ) -> MetricsRecord {
        if text.trim().is_empty() {
            return MetricsRecord::default();
        }

        let mut record = MetricsRecord::default();

        if let Some(annotator) = &self.annotator {
            let sentences = match Self::sentences(annotator.as_ref(), text, annotation) {
                Ok(sentences) => sentences,
                Err(e) => {
                    error!(
                        error = %e,
                        text = %preview(text),
                        "text analysis failed, using defaults"
                    );
                    return MetricsRecord::default();
                }
            };
            if sentences.iter().all(Sentence::is_rooted) {
                record.set_complexity(&complexity::analyze(&sentences));
            } else {
                warn!(
                    text = %preview(text),
                    "annotation has a sentence without a single root, skipping complexity metrics"
                );
            }
            if options.include_lemmatization {
                record.lemmas = lemmas::extract(&sentences);
            }
        }

        let stylometric = self.stylometric.analyze_with(text, options.include_ner);
        record.set_stylometric(&stylometric);
        if !options.include_ner {
            record.clear_entities();
        }
        record
    }

    fn sentences(
        annotator: &dyn AnnotationSource,
        text: &str,
        supplied: Option<&str>,
    ) -> AnalysisResult<Vec<Sentence>> {
        let fetched;
        let conllu = match supplied {
            Some(a) => a,
            None => {
                fetched = annotator.fetch(text)?;
                fetched.as_str()
            }
        };
        Ok(annotation::parse(conllu)?)
    }
}
