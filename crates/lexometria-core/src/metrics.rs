//! The flat metrics record and its two component parts.
//!
//! Downstream tables depend on the exact column set, so every record carries
//! every key. Failures degrade values to their defaults, never drop keys.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Round half away from zero to `places` decimals.
///
/// All metrics are non-negative except Flesch scores of very dense text, so
/// in practice this is round-half-up.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub(crate) fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub(crate) fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `numerator / denominator * 100`, or 0 when the denominator is 0.
pub(crate) fn percentage(numerator: usize, denominator: usize) -> f64 {
    ratio(numerator, denominator) * 100.0
}

/// Metrics derived from a dependency parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityMetrics {
    /// Mean length of clause.
    #[serde(rename = "MLC")]
    pub mlc: f64,
    /// Mean length of sentence.
    #[serde(rename = "MLS")]
    pub mls: f64,
    /// Dependent clauses per clause.
    #[serde(rename = "DCC")]
    pub dcc: f64,
    /// Coordinated phrases per clause.
    #[serde(rename = "CPC")]
    pub cpc: f64,
    /// Mean dependency-tree depth.
    pub profundidade_media: f64,
    /// Deepest dependency tree.
    pub profundidade_max: usize,
    /// Type-token ratio over non-punctuation tokens.
    pub ttr: f64,
    /// Share of nouns, adjectives and verbs among non-punctuation tokens.
    pub lexical_density: f64,
    /// Non-punctuation tokens.
    pub token_quantity: usize,
}

/// Metrics derived from the NLP pipeline over raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StylometricMetrics {
    /// Percentage of words tagged NOUN.
    pub noun_freq: f64,
    /// Percentage of words tagged VERB.
    pub verb_freq: f64,
    /// Percentage of words tagged ADJ.
    pub adj_freq: f64,
    /// Percentage of words tagged ADV.
    pub adv_freq: f64,
    /// Mean word length in characters.
    pub avg_word_length: f64,
    /// Percentage of words longer than six characters.
    pub long_words_ratio: f64,
    /// Population variance of words per sentence.
    pub sentence_length_variance: f64,
    /// Percentage of non-space tokens that are punctuation.
    pub punctuation_ratio: f64,
    /// Portuguese-adapted Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Person entities.
    pub per_count: usize,
    /// Organisation entities.
    pub org_count: usize,
    /// Location entities.
    pub loc_count: usize,
}

/// The complete per-text record.
///
/// Serializes to a flat object whose keys are exactly [`MetricsRecord::KEYS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsRecord {
    /// Mean length of clause.
    #[serde(rename = "MLC")]
    pub mlc: f64,
    /// Mean length of sentence.
    #[serde(rename = "MLS")]
    pub mls: f64,
    /// Dependent clauses per clause.
    #[serde(rename = "DCC")]
    pub dcc: f64,
    /// Coordinated phrases per clause.
    #[serde(rename = "CPC")]
    pub cpc: f64,
    /// Mean dependency-tree depth.
    pub profundidade_media: f64,
    /// Deepest dependency tree.
    pub profundidade_max: usize,
    /// Type-token ratio.
    pub ttr: f64,
    /// Lexical density.
    pub lexical_density: f64,
    /// Non-punctuation tokens in the parse.
    pub token_quantity: usize,
    /// Percentage of words tagged NOUN.
    pub noun_freq: f64,
    /// Percentage of words tagged VERB.
    pub verb_freq: f64,
    /// Percentage of words tagged ADJ.
    pub adj_freq: f64,
    /// Percentage of words tagged ADV.
    pub adv_freq: f64,
    /// Mean word length in characters.
    pub avg_word_length: f64,
    /// Percentage of words longer than six characters.
    pub long_words_ratio: f64,
    /// Population variance of words per sentence.
    pub sentence_length_variance: f64,
    /// Percentage of non-space tokens that are punctuation.
    pub punctuation_ratio: f64,
    /// Portuguese-adapted Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Person entities.
    pub per_count: usize,
    /// Organisation entities.
    pub org_count: usize,
    /// Location entities.
    pub loc_count: usize,
    /// Space-joined lemmas, punctuation and numeral modifiers removed.
    pub lemmas: String,
}

impl MetricsRecord {
    /// Every key of the serialized record, in column order.
    pub const KEYS: [&'static str; 22] = [
        "MLC",
        "MLS",
        "DCC",
        "CPC",
        "profundidade_media",
        "profundidade_max",
        "ttr",
        "lexical_density",
        "token_quantity",
        "noun_freq",
        "verb_freq",
        "adj_freq",
        "adv_freq",
        "avg_word_length",
        "long_words_ratio",
        "sentence_length_variance",
        "punctuation_ratio",
        "flesch_reading_ease",
        "per_count",
        "org_count",
        "loc_count",
        "lemmas",
    ];

    /// Copy the dependency-parse metrics into this record.
    pub fn set_complexity(&mut self, c: &ComplexityMetrics) {
        self.mlc = c.mlc;
        self.mls = c.mls;
        self.dcc = c.dcc;
        self.cpc = c.cpc;
        self.profundidade_media = c.profundidade_media;
        self.profundidade_max = c.profundidade_max;
        self.ttr = c.ttr;
        self.lexical_density = c.lexical_density;
        self.token_quantity = c.token_quantity;
    }

    /// Copy the stylometric metrics into this record.
    pub fn set_stylometric(&mut self, s: &StylometricMetrics) {
        self.noun_freq = s.noun_freq;
        self.verb_freq = s.verb_freq;
        self.adj_freq = s.adj_freq;
        self.adv_freq = s.adv_freq;
        self.avg_word_length = s.avg_word_length;
        self.long_words_ratio = s.long_words_ratio;
        self.sentence_length_variance = s.sentence_length_variance;
        self.punctuation_ratio = s.punctuation_ratio;
        self.flesch_reading_ease = s.flesch_reading_ease;
        self.per_count = s.per_count;
        self.org_count = s.org_count;
        self.loc_count = s.loc_count;
    }

    /// Zero the entity counts.
    pub fn clear_entities(&mut self) {
        self.per_count = 0;
        self.org_count = 0;
        self.loc_count = 0;
    }

    /// The record as a flat JSON object.
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_serializes_every_key() {
        let map = MetricsRecord::default().to_json_map();
        assert_eq!(map.len(), MetricsRecord::KEYS.len());
        for key in MetricsRecord::KEYS {
            assert!(map.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn default_values_are_zero_and_empty() {
        let map = MetricsRecord::default().to_json_map();
        assert_eq!(map["MLC"], serde_json::json!(0.0));
        assert_eq!(map["profundidade_max"], serde_json::json!(0));
        assert_eq!(map["per_count"], serde_json::json!(0));
        assert_eq!(map["lemmas"], serde_json::json!(""));
        assert!(map["profundidade_max"].is_u64());
        assert!(map["flesch_reading_ease"].is_f64());
    }

    #[test]
    fn keys_keep_column_order() {
        let json = serde_json::to_string(&MetricsRecord::default()).unwrap();
        let positions: Vec<usize> = MetricsRecord::KEYS
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn merge_parts() {
        let mut record = MetricsRecord::default();
        record.set_complexity(&ComplexityMetrics {
            mlc: 4.0,
            token_quantity: 4,
            ..ComplexityMetrics::default()
        });
        record.set_stylometric(&StylometricMetrics {
            noun_freq: 25.0,
            per_count: 2,
            ..StylometricMetrics::default()
        });
        assert_eq!(record.mlc, 4.0);
        assert_eq!(record.token_quantity, 4);
        assert_eq!(record.noun_freq, 25.0);
        record.clear_entities();
        assert_eq!(record.per_count, 0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(2.0 / 3.0, 4), 0.6667);
        assert_eq!(round_to(-1.005, 1), -1.0);
        assert_eq!(round2(69.485_000_000_000_01), 69.49);
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_eq!(ratio(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
