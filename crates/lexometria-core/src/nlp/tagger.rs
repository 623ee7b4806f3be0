//! Lexicon and suffix driven part-of-speech tagger.

use super::lexicon::{self, GIVEN_NAMES, LOCATIONS, VERB_SHAPED_NOUNS};
use super::segmenter::Segmentation;
use super::tokenizer::{RawToken, TokenKind};
use crate::pos::Upos;

const SYMBOLS: &str = "+-*/=<>%$€£#@&|~^§°×÷";

const GERUND_ENDINGS: &[&str] = &["ando", "endo", "indo"];
const PARTICIPLE_ENDINGS: &[&str] = &[
    "ado", "ada", "ados", "adas", "ido", "ida", "idos", "idas",
];
const FINITE_ENDINGS: &[&str] = &[
    "aram", "eram", "iram", "avam", "ávamos", "íamos", "iam", "ariam", "eriam", "iriam", "ava",
    "ou", "eu", "ei", "amos", "emos", "imos", "asse", "esse", "isse", "ará", "erá", "irá", "arão",
    "erão", "irão",
];
const INFINITIVE_ENDINGS: &[&str] = &["ar", "er", "ir", "or"];
const ADJECTIVE_ENDINGS: &[&str] = &[
    "oso", "osa", "osos", "osas", "ável", "ível", "áveis", "íveis", "ivo", "iva", "ivos", "ivas",
    "ico", "icos", "esco", "esca", "ense", "enses",
];
const CLITICS: &[&str] = &["lo", "la", "los", "las", "se", "me", "te", "lhe", "lhes", "nos"];

/// Words whose adjective or adverb suffix misleads.
const SUFFIX_SHAPED_NOUNS: &[&str] = &[
    "arquivo", "arquivos", "motivo", "motivos", "objetivo", "objetivos", "dispositivo",
    "dispositivos", "incentivo", "incentivos", "aperitivo", "semente", "sementes", "clemente",
    "demente", "dormente", "classe", "interesse", "impasse", "passe", "extremos", "supremos",
];

fn ends_with_any(word: &str, endings: &[&str], min_chars: usize) -> bool {
    word.chars().count() >= min_chars && endings.iter().any(|e| word.ends_with(e))
}

fn is_acronym(text: &str) -> bool {
    let len = text.chars().count();
    (2..=6).contains(&len) && text.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Tag from the shape of a lowercase word alone.
fn morphology(lower: &str, after_auxiliary: bool) -> Upos {
    if SUFFIX_SHAPED_NOUNS.contains(&lower) || VERB_SHAPED_NOUNS.contains(lower) {
        return Upos::Noun;
    }
    if ends_with_any(lower, &["mente"], 7) {
        return Upos::Adv;
    }
    if let Some((stem, clitic)) = lower.split_once('-')
        && CLITICS.contains(&clitic)
        && (stem.ends_with('r') || stem.ends_with(['á', 'ê', 'í', 'ô']) || stem.len() > 3)
    {
        return Upos::Verb;
    }
    if ends_with_any(lower, GERUND_ENDINGS, 5) {
        return Upos::Verb;
    }
    if ends_with_any(lower, PARTICIPLE_ENDINGS, 5) {
        return if after_auxiliary { Upos::Verb } else { Upos::Adj };
    }
    if ends_with_any(lower, INFINITIVE_ENDINGS, 4) {
        return Upos::Verb;
    }
    if ends_with_any(lower, FINITE_ENDINGS, 5) || ends_with_any(lower, &["iu"], 4) {
        return Upos::Verb;
    }
    if ends_with_any(lower, ADJECTIVE_ENDINGS, 5) {
        return Upos::Adj;
    }
    Upos::Noun
}

fn tag_symbolic(token: &RawToken) -> Upos {
    if token.text.chars().all(|c| SYMBOLS.contains(c)) && token.text != "-" {
        Upos::Sym
    } else {
        Upos::Punct
    }
}

fn tag_word(token: &RawToken, sentence_initial: bool, previous: Option<Upos>) -> Upos {
    let text = token.text.as_str();
    let lower = text.to_lowercase();

    if let Some(stem) = lower.strip_suffix('.') {
        // abbreviation or initial carried its period
        return if stem.chars().count() == 1 && token.is_capitalized() {
            Upos::Propn
        } else {
            Upos::Noun
        };
    }
    if is_acronym(text) {
        return Upos::Propn;
    }
    if token.is_capitalized() && !sentence_initial {
        return Upos::Propn;
    }
    if let Some(tag) = lexicon::closed_class(&lower) {
        return tag;
    }
    if token.is_capitalized()
        && (GIVEN_NAMES.contains(lower.as_str()) || LOCATIONS.contains(lower.as_str()))
    {
        return Upos::Propn;
    }
    if let Some(tag) = lexicon::frequent_open_class(&lower) {
        return tag;
    }
    morphology(&lower, previous == Some(Upos::Aux))
}

/// Tag every token. Space tokens are tagged `X`.
pub fn tag(tokens: &[RawToken], segmentation: &Segmentation) -> Vec<Upos> {
    let mut tags = Vec::with_capacity(tokens.len());
    let mut previous_word: Option<Upos> = None;
    let mut sentence_seen: Option<usize> = None;

    for (token, &sentence) in tokens.iter().zip(&segmentation.sentence_of) {
        let upos = match token.kind {
            TokenKind::Space => Upos::X,
            TokenKind::Punct => tag_symbolic(token),
            TokenKind::Number => Upos::Num,
            TokenKind::Link => Upos::X,
            TokenKind::Word => {
                let initial = sentence_seen != Some(sentence);
                if initial {
                    previous_word = None;
                }
                tag_word(token, initial, previous_word)
            }
        };
        if token.is_lexical() {
            sentence_seen = Some(sentence);
            // adverbs between an auxiliary and its participle keep the link
            if upos != Upos::Adv {
                previous_word = Some(upos);
            }
        }
        tags.push(upos);
    }
    tags
}
