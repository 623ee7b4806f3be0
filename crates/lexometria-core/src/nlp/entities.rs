//! Gazetteer and pattern based named-entity recognition.
//!
//! Candidate spans are runs of capitalised proper-noun-like words in one
//! sentence, optionally joined by lowercase connectors ("Universidade de São
//! Paulo"). Each span is labelled ORG, LOC, PER or MISC.

use aho_corasick::{AhoCorasick, MatchKind};

use super::lexicon::{
    GIVEN_NAMES, LOCATIONS, LOCATIVE_PREPOSITIONS, NAME_CONNECTORS, ORG_MARKERS, TITLES,
};
use super::segmenter::Segmentation;
use super::tokenizer::{RawToken, TokenKind};
use crate::error::{AnalysisError, AnalysisResult};
use crate::pos::Upos;

/// Label for a person.
pub const PER: &str = "PER";
/// Label for an organisation.
pub const ORG: &str = "ORG";
/// Label for a place.
pub const LOC: &str = "LOC";
/// Label for any other name.
pub const MISC: &str = "MISC";

/// A detected entity span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Index of the first token.
    pub start: usize,
    /// Index one past the last token.
    pub end: usize,
    /// Entity label.
    pub label: &'static str,
}

/// Recognizer holding the compiled organisation-marker automaton.
#[derive(Debug, Clone)]
pub struct EntityRecognizer {
    org_markers: AhoCorasick,
}

fn is_name_word(token: &RawToken, upos: Upos) -> bool {
    token.kind == TokenKind::Word
        && token.is_capitalized()
        && !token.text.ends_with('.')
        && matches!(upos, Upos::Propn | Upos::Noun | Upos::Adj)
}

/// Whether each token is the first lexical token of its sentence.
fn sentence_openers(tokens: &[RawToken], segmentation: &Segmentation) -> Vec<bool> {
    let mut seen = None;
    tokens
        .iter()
        .zip(&segmentation.sentence_of)
        .map(|(token, &sentence)| {
            if !token.is_lexical() {
                return false;
            }
            let first = seen != Some(sentence);
            seen = Some(sentence);
            first
        })
        .collect()
}

fn is_acronym(text: &str) -> bool {
    let len = text.chars().count();
    (2..=6).contains(&len) && text.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

impl EntityRecognizer {
    /// Compile the organisation-marker automaton.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Pipeline`] if the automaton cannot be built.
    pub fn new() -> AnalysisResult<Self> {
        let org_markers = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(ORG_MARKERS)
            .map_err(|e| AnalysisError::Pipeline(format!("organisation markers: {e}")))?;
        Ok(Self { org_markers })
    }

    /// Find and label entity spans.
    pub fn recognize(
        &self,
        tokens: &[RawToken],
        tags: &[Upos],
        segmentation: &Segmentation,
    ) -> Vec<Span> {
        let openers = sentence_openers(tokens, segmentation);
        let mut spans = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !is_name_word(&tokens[i], tags[i]) {
                i += 1;
                continue;
            }
            let sentence = segmentation.sentence_of[i];
            let first_has_marker = self.contains_marker(&tokens[i].text.to_lowercase());
            let mut has_marker = first_has_marker;
            let mut end = i + 1;

            while end < tokens.len() && segmentation.sentence_of[end] == sentence {
                if is_name_word(&tokens[end], tags[end]) {
                    has_marker |= self.contains_marker(&tokens[end].text.to_lowercase());
                    end += 1;
                    continue;
                }
                let joins = tokens[end].kind == TokenKind::Word
                    && NAME_CONNECTORS.contains(tokens[end].text.as_str())
                    && (tokens[end].text != "e" || has_marker)
                    && segmentation.sentence_of.get(end + 1) == Some(&sentence)
                    && tokens
                        .get(end + 1)
                        .zip(tags.get(end + 1))
                        .is_some_and(|(t, &u)| is_name_word(t, u));
                if !joins {
                    break;
                }
                end += 1;
            }

            let mut start = i;
            i = end;
            // a capitalised common word opening the sentence is not part of the name
            if openers[start] && tags[start] != Upos::Propn && !first_has_marker {
                start += 1;
                while start < end && !is_name_word(&tokens[start], tags[start]) {
                    start += 1;
                }
            }
            if start < end {
                let label = self.classify(tokens, start, end, has_marker);
                spans.push(Span { start, end, label });
            }
        }

        spans
    }

    fn contains_marker(&self, text: &str) -> bool {
        self.org_markers.find_iter(text).any(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    }

    fn classify(
        &self,
        tokens: &[RawToken],
        start: usize,
        end: usize,
        has_marker: bool,
    ) -> &'static str {
        let words: Vec<&str> = tokens[start..end].iter().map(|t| t.text.as_str()).collect();
        let lower = words.join(" ").to_lowercase();
        let previous = start
            .checked_sub(1)
            .map(|p| tokens[p].text.to_lowercase())
            .unwrap_or_default();

        if has_marker {
            ORG
        } else if LOCATIONS.contains(lower.as_str()) {
            LOC
        } else if words.len() == 1 && is_acronym(words[0]) {
            ORG
        } else if TITLES.contains(previous.as_str())
            || GIVEN_NAMES.contains(words[0].to_lowercase().as_str())
        {
            PER
        } else if LOCATIVE_PREPOSITIONS.contains(previous.as_str()) {
            LOC
        } else {
            MISC
        }
    }
}
