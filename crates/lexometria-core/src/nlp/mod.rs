//! Portuguese NLP pipeline: tokens, sentences, part-of-speech tags and
//! named entities for the stylometric metrics.
//!
//! The [`NlpPipeline`] trait is the seam. [`RuleBasedPipeline`] is the
//! shipped implementation: a tokenizer, a sentence segmenter, a lexicon and
//! suffix tagger, and a gazetteer recognizer, all built once and shared.
//!
//! ```
//! use lexometria_core::nlp::{NlpPipeline, RuleBasedPipeline};
//!
//! let pipeline = RuleBasedPipeline::new().unwrap();
//! let doc = pipeline.process("A Maria mora em Lisboa. Gosta de ler.").unwrap();
//! assert_eq!(doc.sentence_count, 2);
//! assert_eq!(doc.entities.len(), 2);
//! ```

pub mod entities;
pub mod lexicon;
pub mod segmenter;
pub mod tagger;
pub mod tokenizer;

use crate::error::AnalysisResult;
use crate::pos::Upos;

use entities::EntityRecognizer;
use tokenizer::TokenKind;

/// One token of a processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocToken {
    /// Surface text.
    pub text: String,
    /// Universal part-of-speech tag.
    pub upos: Upos,
    /// Punctuation mark.
    pub is_punct: bool,
    /// Whitespace token.
    pub is_space: bool,
    /// Index of the sentence holding this token.
    pub sentence: usize,
}

impl DocToken {
    /// Neither punctuation nor whitespace.
    pub const fn is_word(&self) -> bool {
        !self.is_punct && !self.is_space
    }
}

/// A named entity with its label (`PER`, `ORG`, `LOC`, `MISC`, or whatever
/// label set the pipeline uses).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity text.
    pub text: String,
    /// Entity label.
    pub label: String,
}

/// A processed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
    /// Tokens in text order.
    pub tokens: Vec<DocToken>,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Named entities in text order.
    pub entities: Vec<Entity>,
}

impl Doc {
    /// Tokens that are neither punctuation nor whitespace.
    pub fn words(&self) -> impl Iterator<Item = &DocToken> {
        self.tokens.iter().filter(|t| t.is_word())
    }

    /// Word count of each sentence, in order.
    pub fn sentence_lengths(&self) -> Vec<usize> {
        let mut lengths = vec![0; self.sentence_count];
        for token in self.words() {
            if let Some(slot) = lengths.get_mut(token.sentence) {
                *slot += 1;
            }
        }
        lengths
    }
}

/// Turns raw text into a [`Doc`].
pub trait NlpPipeline: Send + Sync {
    /// Process `text`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Pipeline`](crate::error::AnalysisError::Pipeline)
    /// if the text cannot be processed.
    fn process(&self, text: &str) -> AnalysisResult<Doc>;
}

/// Rule-based Portuguese pipeline.
#[derive(Debug, Clone)]
pub struct RuleBasedPipeline {
    recognizer: EntityRecognizer,
}

impl RuleBasedPipeline {
    /// Build the pipeline, compiling its matchers.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Pipeline`](crate::error::AnalysisError::Pipeline)
    /// if a matcher fails to compile.
    pub fn new() -> AnalysisResult<Self> {
        Ok(Self {
            recognizer: EntityRecognizer::new()?,
        })
    }
}

impl NlpPipeline for RuleBasedPipeline {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn process(&self, text: &str) -> AnalysisResult<Doc> {
        let raw = tokenizer::tokenize(text);
        let segmentation = segmenter::segment(&raw);
        let tags = tagger::tag(&raw, &segmentation);
        let spans = self.recognizer.recognize(&raw, &tags, &segmentation);

        let entities = spans
            .iter()
            .map(|span| Entity {
                text: raw[span.start..span.end]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                label: span.label.to_string(),
            })
            .collect();

        let tokens = raw
            .into_iter()
            .zip(tags)
            .zip(&segmentation.sentence_of)
            .map(|((token, upos), &sentence)| DocToken {
                is_punct: upos == Upos::Punct,
                is_space: token.kind == TokenKind::Space,
                text: token.text,
                upos,
                sentence,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            tokens = tokens.len(),
            sentences = segmentation.count,
            "document processed"
        );
        Ok(Doc {
            tokens,
            sentence_count: segmentation.count,
            entities,
        })
    }
}
