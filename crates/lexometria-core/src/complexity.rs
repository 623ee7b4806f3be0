//! Syntactic complexity over dependency-parsed sentences.
//!
//! Clause, dependent-clause and coordination counts come from the
//! [`Deprel`](crate::annotation::Deprel) predicates; the denominators use
//! every token whose relation is not `punct`.
//!
//! Lexical density here counts NOUN, ADJ and VERB only. Other tools in this
//! space sometimes add manner adverbs; the two definitions are not
//! interchangeable and this module does not try to reconcile them.

use std::collections::HashSet;

use crate::annotation::Sentence;
use crate::metrics::{ComplexityMetrics, ratio, round2, round4};

#[derive(Debug, Default)]
struct Counts {
    sentences: usize,
    content: usize,
    clauses: usize,
    dependent_clauses: usize,
    coordinations: usize,
    lexical: usize,
}

fn count(sentences: &[Sentence]) -> Counts {
    let mut counts = Counts {
        sentences: sentences.len(),
        ..Counts::default()
    };
    for token in sentences.iter().flat_map(Sentence::tokens) {
        if token.is_content() {
            counts.content += 1;
        }
        if token.deprel.is_clause() {
            counts.clauses += 1;
        }
        if token.deprel.is_dependent_clause() {
            counts.dependent_clauses += 1;
        }
        if token.deprel.is_coordination() {
            counts.coordinations += 1;
        }
        if token.upos.is_lexical() {
            counts.lexical += 1;
        }
    }
    counts
}

/// Compute complexity metrics for a parsed text.
///
/// Zero sentences produce the all-zero default.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn analyze(sentences: &[Sentence]) -> ComplexityMetrics {
    if sentences.is_empty() {
        return ComplexityMetrics::default();
    }

    let counts = count(sentences);

    let depths: Vec<usize> = sentences.iter().map(Sentence::depth).collect();
    let depth_mean = depths.iter().sum::<usize>() as f64 / depths.len() as f64;
    let depth_max = depths.iter().copied().max().unwrap_or(0);

    let forms: Vec<&str> = sentences
        .iter()
        .flat_map(Sentence::tokens)
        .filter(|t| t.is_content())
        .map(|t| t.form.as_str())
        .collect();
    let types: HashSet<&str> = forms.iter().copied().collect();

    ComplexityMetrics {
        mlc: round2(ratio(counts.content, counts.clauses)),
        mls: round2(ratio(counts.content, counts.sentences)),
        dcc: round2(ratio(counts.dependent_clauses, counts.clauses)),
        cpc: round2(ratio(counts.coordinations, counts.clauses)),
        profundidade_media: round2(depth_mean),
        profundidade_max: depth_max,
        ttr: round4(ratio(types.len(), forms.len())),
        lexical_density: round4(ratio(counts.lexical, counts.content)),
        token_quantity: counts.content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::tests::GATO;
    use crate::annotation::{Token, parse};
    use crate::pos::Upos;

    #[test]
    fn empty_input_is_default() {
        assert_eq!(analyze(&[]), ComplexityMetrics::default());
    }

    #[test]
    fn example_sentence() {
        let m = analyze(&parse(GATO).unwrap());
        assert_eq!(m.token_quantity, 4);
        assert_eq!(m.mls, 4.0);
        // gato (NOUN) + correu (VERB); the ADV does not count
        assert_eq!(m.lexical_density, 0.5);
        assert_eq!(m.ttr, 1.0);
        assert_eq!(m.profundidade_max, 2);
        assert_eq!(m.profundidade_media, 2.0);
        // no clause tokens, so every per-clause ratio is zero
        assert_eq!(m.mlc, 0.0);
        assert_eq!(m.dcc, 0.0);
        assert_eq!(m.cpc, 0.0);
    }

    fn clause_sentence() -> Sentence {
        // "Ele disse que viria e saiu quando chovia ."
        Sentence::new(vec![
            Token::new(1, "Ele", "ele", Upos::Pron, 2, "nsubj"),
            Token::new(2, "disse", "dizer", Upos::Verb, 0, "root"),
            Token::new(3, "que", "que", Upos::Sconj, 4, "mark"),
            Token::new(4, "viria", "vir", Upos::Verb, 2, "ccomp"),
            Token::new(5, "e", "e", Upos::Cconj, 6, "cc"),
            Token::new(6, "saiu", "sair", Upos::Verb, 2, "conj"),
            Token::new(7, "quando", "quando", Upos::Sconj, 8, "mark"),
            Token::new(8, "chovia", "chover", Upos::Verb, 6, "advcl"),
            Token::new(9, ".", ".", Upos::Punct, 2, "punct"),
        ])
    }

    #[test]
    fn clause_ratios() {
        let m = analyze(&[clause_sentence()]);
        assert_eq!(m.token_quantity, 8);
        // clauses: ccomp, advcl
        assert_eq!(m.mlc, 4.0);
        // dependent: advcl
        assert_eq!(m.dcc, 0.5);
        // coordination: ccomp (contains "cc"), cc, conj
        assert_eq!(m.cpc, 1.5);
        // disse -> saiu -> chovia -> quando
        assert_eq!(m.profundidade_max, 3);
        assert_eq!(m.lexical_density, 0.5);
    }

    #[test]
    fn depth_mean_and_max_across_sentences() {
        let leaf = Sentence::new(vec![Token::new(1, "Sim", "sim", Upos::Intj, 0, "root")]);
        let m = analyze(&[leaf, clause_sentence()]);
        assert_eq!(m.profundidade_max, 3);
        assert_eq!(m.profundidade_media, 1.5);
        assert_eq!(m.mls, 4.5);
    }

    #[test]
    fn single_leaf_sentences_have_zero_depth() {
        let leaf = || Sentence::new(vec![Token::new(1, "Oi", "oi", Upos::Intj, 0, "root")]);
        let m = analyze(&[leaf(), leaf()]);
        assert_eq!(m.profundidade_max, 0);
        assert_eq!(m.profundidade_media, 0.0);
        // repeated form counts once as a type
        assert_eq!(m.ttr, 0.5);
    }

    #[test]
    fn punctuation_only_sentence_has_zero_ratios() {
        let s = Sentence::new(vec![Token::new(1, "!", "!", Upos::Punct, 0, "punct")]);
        let m = analyze(&[s]);
        assert_eq!(m.token_quantity, 0);
        assert_eq!(m.ttr, 0.0);
        assert_eq!(m.lexical_density, 0.0);
        assert_eq!(m.mls, 0.0);
    }

    #[test]
    fn ratios_stay_in_unit_interval() {
        let m = analyze(&[clause_sentence(), parse(GATO).unwrap().remove(0)]);
        assert!((0.0..=1.0).contains(&m.ttr));
        assert!((0.0..=1.0).contains(&m.lexical_density));
        assert!(m.profundidade_max as f64 >= m.profundidade_media);
    }

    #[test]
    fn ttr_is_case_sensitive() {
        let s = Sentence::new(vec![
            Token::new(1, "Casa", "casa", Upos::Noun, 0, "root"),
            Token::new(2, "casa", "casa", Upos::Noun, 1, "appos"),
        ]);
        assert_eq!(analyze(&[s]).ttr, 1.0);
    }
}
