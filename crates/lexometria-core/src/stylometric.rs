//! Stylometric metrics over an NLP-pipeline document.
//!
//! Part-of-speech frequencies, word-length statistics, sentence-length
//! variance, punctuation ratio, Flesch Reading Ease and entity counts. A
//! "word" is any token that is neither punctuation nor whitespace.

use std::sync::Arc;

use tracing::warn;

use crate::metrics::{StylometricMetrics, percentage, round2};
use crate::nlp::{Doc, NlpPipeline};
use crate::pos::Upos;
use crate::readability;

/// Longest word, in characters, that does not count as long.
const LONG_WORD_CHARS: usize = 6;

/// Characters of input kept in log messages.
pub(crate) const PREVIEW_CHARS: usize = 80;

pub(crate) fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Computes [`StylometricMetrics`] with an injected pipeline.
#[derive(Clone)]
pub struct StylometricAnalyzer {
    pipeline: Arc<dyn NlpPipeline>,
}

impl std::fmt::Debug for StylometricAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StylometricAnalyzer").finish_non_exhaustive()
    }
}

impl StylometricAnalyzer {
    /// Wrap a shared pipeline handle.
    pub fn new(pipeline: Arc<dyn NlpPipeline>) -> Self {
        Self { pipeline }
    }

    /// Analyze `text`, counting entities.
    pub fn analyze(&self, text: &str) -> StylometricMetrics {
        self.analyze_with(text, true)
    }

    /// Analyze `text`; entity counts stay zero unless `count_entities`.
    ///
    /// Empty or whitespace-only text returns the defaults without touching
    /// the pipeline. A pipeline failure is logged and also yields defaults.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn analyze_with(&self, text: &str, count_entities: bool) -> StylometricMetrics {
        if text.trim().is_empty() {
            return StylometricMetrics::default();
        }
        match self.pipeline.process(text) {
            Ok(doc) => metrics_from_doc(&doc, count_entities),
            Err(e) => {
                warn!(error = %e, text = %preview(text), "stylometric analysis failed");
                StylometricMetrics::default()
            }
        }
    }
}

/// Compute every stylometric metric from a processed document.
pub fn metrics_from_doc(doc: &Doc, count_entities: bool) -> StylometricMetrics {
    let words: Vec<_> = doc.words().collect();
    let total = words.len();
    let mut metrics = StylometricMetrics::default();

    if total > 0 {
        let share = |upos: Upos| {
            round2(percentage(
                words.iter().filter(|t| t.upos == upos).count(),
                total,
            ))
        };
        metrics.noun_freq = share(Upos::Noun);
        metrics.verb_freq = share(Upos::Verb);
        metrics.adj_freq = share(Upos::Adj);
        metrics.adv_freq = share(Upos::Adv);

        let lengths: Vec<usize> = words.iter().map(|t| t.text.chars().count()).collect();
        metrics.avg_word_length = round2(lengths.iter().sum::<usize>() as f64 / total as f64);
        metrics.long_words_ratio = round2(percentage(
            lengths.iter().filter(|&&n| n > LONG_WORD_CHARS).count(),
            total,
        ));
    }

    metrics.flesch_reading_ease =
        readability::score_words(words.iter().map(|t| t.text.as_str()), doc.sentence_count);
    metrics.sentence_length_variance = round2(population_variance(&doc.sentence_lengths()));

    let non_space = doc.tokens.iter().filter(|t| !t.is_space).count();
    let punct = doc.tokens.iter().filter(|t| t.is_punct).count();
    metrics.punctuation_ratio = round2(percentage(punct, non_space));

    if count_entities {
        for entity in &doc.entities {
            match entity.label.as_str() {
                "PER" | "PERSON" => metrics.per_count += 1,
                "ORG" => metrics.org_count += 1,
                "LOC" | "GPE" | "PLACE" => metrics.loc_count += 1,
                _ => {}
            }
        }
    }

    metrics
}

/// Population variance; zero for fewer than two values.
fn population_variance(values: &[usize]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::{AnalysisError, AnalysisResult};
    use crate::nlp::{DocToken, Entity, RuleBasedPipeline};

    fn word(text: &str, upos: Upos, sentence: usize) -> DocToken {
        DocToken {
            text: text.to_string(),
            upos,
            is_punct: false,
            is_space: false,
            sentence,
        }
    }

    fn punct(text: &str, sentence: usize) -> DocToken {
        DocToken {
            is_punct: true,
            ..word(text, Upos::Punct, sentence)
        }
    }

    fn entity(label: &str) -> Entity {
        Entity {
            text: "x".to_string(),
            label: label.to_string(),
        }
    }

    /// Returns a fixed document and counts calls.
    struct FixedPipeline {
        doc: Doc,
        calls: AtomicUsize,
    }

    impl NlpPipeline for FixedPipeline {
        fn process(&self, _text: &str) -> AnalysisResult<Doc> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.doc.clone())
        }
    }

    struct BrokenPipeline;

    impl NlpPipeline for BrokenPipeline {
        fn process(&self, _text: &str) -> AnalysisResult<Doc> {
            Err(AnalysisError::Pipeline("model missing".into()))
        }
    }

    /// "O gato dorme . Cães latem muito alto !"
    fn sample_doc() -> Doc {
        Doc {
            tokens: vec![
                word("O", Upos::Det, 0),
                word("gato", Upos::Noun, 0),
                word("dorme", Upos::Verb, 0),
                punct(".", 0),
                word("Cães", Upos::Noun, 1),
                word("latem", Upos::Verb, 1),
                word("muito", Upos::Adv, 1),
                word("alto", Upos::Adj, 1),
                punct("!", 1),
            ],
            sentence_count: 2,
            entities: vec![
                entity("PER"),
                entity("PERSON"),
                entity("GPE"),
                entity("ORG"),
                entity("MISC"),
            ],
        }
    }

    fn fixed(doc: Doc) -> Arc<FixedPipeline> {
        Arc::new(FixedPipeline {
            doc,
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn metrics_over_fixed_doc() {
        let m = metrics_from_doc(&sample_doc(), true);
        // 7 words: 2 nouns, 2 verbs, 1 adj, 1 adv
        assert_eq!(m.noun_freq, 28.57);
        assert_eq!(m.verb_freq, 28.57);
        assert_eq!(m.adj_freq, 14.29);
        assert_eq!(m.adv_freq, 14.29);
        // lengths 1,4,5,4,5,5,4 = 28
        assert_eq!(m.avg_word_length, 4.0);
        assert_eq!(m.long_words_ratio, 0.0);
        // sentence lengths 3 and 4
        assert_eq!(m.sentence_length_variance, 0.25);
        // 2 of 9 non-space tokens
        assert_eq!(m.punctuation_ratio, 22.22);
        assert_eq!((m.per_count, m.org_count, m.loc_count), (2, 1, 1));
    }

    #[test]
    fn flesch_uses_word_syllables() {
        let m = metrics_from_doc(&sample_doc(), true);
        // syllables: o1 ga-to2 dor-me2 cães1 la-tem2 mui-to1 al-to2 = 11
        let expected = readability::flesch_reading_ease(7, 2, 11);
        assert_eq!(m.flesch_reading_ease, expected);
    }

    #[test]
    fn entities_skipped_when_disabled() {
        let m = metrics_from_doc(&sample_doc(), false);
        assert_eq!((m.per_count, m.org_count, m.loc_count), (0, 0, 0));
        assert_eq!(m.noun_freq, 28.57);
    }

    #[test]
    fn single_sentence_has_zero_variance() {
        let doc = Doc {
            tokens: vec![word("Sim", Upos::Intj, 0)],
            sentence_count: 1,
            entities: vec![],
        };
        let m = metrics_from_doc(&doc, true);
        assert_eq!(m.sentence_length_variance, 0.0);
        assert_eq!(m.avg_word_length, 3.0);
    }

    #[test]
    fn punctuation_only_doc() {
        let doc = Doc {
            tokens: vec![punct("!", 0), punct("?", 0)],
            sentence_count: 1,
            entities: vec![],
        };
        let m = metrics_from_doc(&doc, true);
        assert_eq!(m.noun_freq, 0.0);
        assert_eq!(m.flesch_reading_ease, 0.0);
        assert_eq!(m.punctuation_ratio, 100.0);
    }

    #[test]
    fn long_words_counted_above_six_chars() {
        let doc = Doc {
            tokens: vec![
                word("palavra", Upos::Noun, 0),
                word("grande", Upos::Adj, 0),
            ],
            sentence_count: 1,
            entities: vec![],
        };
        assert_eq!(metrics_from_doc(&doc, true).long_words_ratio, 50.0);
    }

    #[test]
    fn empty_text_skips_pipeline() {
        let pipeline = fixed(sample_doc());
        let analyzer = StylometricAnalyzer::new(pipeline.clone());
        assert_eq!(analyzer.analyze("  \n "), StylometricMetrics::default());
        assert_eq!(pipeline.calls.load(Ordering::SeqCst), 0);
        analyzer.analyze("texto");
        assert_eq!(pipeline.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pipeline_failure_yields_defaults() {
        let analyzer = StylometricAnalyzer::new(Arc::new(BrokenPipeline));
        assert_eq!(analyzer.analyze("Olá."), StylometricMetrics::default());
    }

    #[test]
    fn rule_based_pipeline_end_to_end() {
        let analyzer = StylometricAnalyzer::new(Arc::new(RuleBasedPipeline::new().unwrap()));
        let m =
            analyzer.analyze("A Maria mora em Lisboa. Ela trabalha na Universidade de Coimbra.");
        assert_eq!((m.per_count, m.org_count, m.loc_count), (1, 1, 1));
        assert!(m.noun_freq + m.verb_freq + m.adj_freq + m.adv_freq <= 100.0);
        assert!(m.punctuation_ratio > 0.0);
        assert!(m.flesch_reading_ease != 0.0);
    }

    #[test]
    fn rule_based_pipeline_counts_irregular_verbs() {
        let analyzer = StylometricAnalyzer::new(Arc::new(RuleBasedPipeline::new().unwrap()));
        let m = analyzer.analyze("Eu vi a Ana. Ela viu o João e a Maria em São Paulo.");
        assert!(m.verb_freq > 0.0);
        let m = analyzer.analyze("O dia foi bom e o carro é novo.");
        assert!(m.adj_freq > 0.0);
    }

    #[test]
    fn variance_helper() {
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[5]), 0.0);
        assert_eq!(population_variance(&[2, 4, 6]), 8.0 / 3.0);
    }
}
