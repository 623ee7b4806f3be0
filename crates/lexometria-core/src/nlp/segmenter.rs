//! Sentence segmentation over tokens.
//!
//! Abbreviations, decimals, URLs and initials are already single tokens by
//! the time this runs, so a boundary is decided from the terminator and what
//! follows it.

use super::tokenizer::{RawToken, TokenKind};

fn is_terminator(token: &RawToken) -> bool {
    token.kind == TokenKind::Punct && matches!(token.text.as_str(), "." | "!" | "?" | "..." | "…")
}

fn is_closer(token: &RawToken) -> bool {
    token.kind == TokenKind::Punct
        && matches!(
            token.text.as_str(),
            "\"" | "'" | "\u{201D}" | "\u{2019}" | ")" | "]" | "»"
        )
}

/// Sentence assignment for a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Sentence index of each token.
    pub sentence_of: Vec<usize>,
    /// Sentences holding at least one non-space token.
    pub count: usize,
}

/// Assign every token to a sentence.
///
/// A sentence ends after a run of terminators and closing quotes/brackets
/// unless the next lexical token starts lowercase, and always at a paragraph
/// break. Space tokens belong to the sentence they close.
pub fn segment(tokens: &[RawToken]) -> Segmentation {
    let mut sentence_of = Vec::with_capacity(tokens.len());
    let mut current = 0;
    let mut has_content = false;
    let mut pending_break = false;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token.kind == TokenKind::Space {
            sentence_of.push(current);
            pending_break = true;
            i += 1;
            continue;
        }

        if pending_break && has_content {
            current += 1;
        }
        pending_break = false;

        if is_terminator(token) {
            let mut end = i;
            while end < tokens.len() && (is_terminator(&tokens[end]) || is_closer(&tokens[end])) {
                sentence_of.push(current);
                end += 1;
            }
            has_content = true;
            pending_break = next_starts_sentence(&tokens[end..]);
            i = end;
            continue;
        }

        sentence_of.push(current);
        has_content = true;
        i += 1;
    }

    let count = if tokens.iter().any(|t| t.kind != TokenKind::Space) {
        current + 1
    } else {
        0
    };
    Segmentation { sentence_of, count }
}

fn next_starts_sentence(rest: &[RawToken]) -> bool {
    match rest.iter().find(|t| t.kind == TokenKind::Space || t.is_lexical()) {
        Some(next) if next.kind != TokenKind::Space => {
            !next.text.starts_with(char::is_lowercase)
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::tokenize;

    fn sentences(text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let seg = segment(&tokens);
        let mut out = vec![String::new(); seg.count];
        for (token, &s) in tokens.iter().zip(&seg.sentence_of) {
            if token.kind == TokenKind::Space {
                continue;
            }
            if !out[s].is_empty() {
                out[s].push(' ');
            }
            out[s].push_str(&token.text);
        }
        out
    }

    #[test]
    fn basic_sentences() {
        assert_eq!(
            sentences("Isto é uma frase. Esta é outra frase."),
            ["Isto é uma frase .", "Esta é outra frase ."]
        );
    }

    #[test]
    fn abbreviations_not_split() {
        let s = sentences("O Dr. Silva foi ao mercado. Ele comprou leite.");
        assert_eq!(s.len(), 2);
        assert!(s[0].contains("Dr. Silva"));
    }

    #[test]
    fn decimal_numbers_not_split() {
        let s = sentences("O preço é 3.14 reais. É barato.");
        assert_eq!(s.len(), 2);
        assert!(s[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        assert_eq!(sentences("Sério? Não acredito! Incrível.").len(), 3);
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        assert_eq!(sentences("Ele disse... e saiu.").len(), 1);
    }

    #[test]
    fn closing_quote_stays_with_its_sentence() {
        let s = sentences("Ela disse: \"Vou.\" Depois saiu.");
        assert_eq!(s, ["Ela disse : \" Vou . \"", "Depois saiu ."]);
    }

    #[test]
    fn paragraph_break_ends_sentence() {
        assert_eq!(sentences("Título sem ponto\n\nTexto do corpo.").len(), 2);
    }

    #[test]
    fn repeated_terminators_form_one_boundary() {
        assert_eq!(sentences("O quê?! Sim.").len(), 2);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(sentences("sem pontuação nenhuma").len(), 1);
    }

    #[test]
    fn empty_and_space_only() {
        assert_eq!(segment(&[]).count, 0);
        let space = tokenize("\n\n");
        assert_eq!(segment(&space).count, 0);
    }

    #[test]
    fn trailing_paragraph_break_adds_no_sentence() {
        let tokens = tokenize("Fim.\n\n");
        let seg = segment(&tokens);
        assert_eq!(seg.count, 1);
        assert_eq!(seg.sentence_of, [0, 0, 0]);
    }

    #[test]
    fn leading_and_repeated_breaks_add_no_sentence() {
        assert_eq!(
            sentences("\n\nInício.\n\n\n\nFim de tudo"),
            ["Início .", "Fim de tudo"]
        );
    }
}
