//! Lemma string extraction from parsed sentences.

use crate::annotation::{Sentence, Token};

fn keeps(token: &Token) -> bool {
    !token.deprel.is_punct() && !token.deprel.is_nummod()
}

/// Join the lemmas of every token in sentence order with single spaces.
///
/// Punctuation and numeral modifiers are dropped; repeated lemmas are kept.
pub fn extract(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .flat_map(Sentence::tokens)
        .filter(|t| keeps(t))
        .map(|t| t.lemma.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
