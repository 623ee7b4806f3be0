//! Portuguese word tokenizer.
//!
//! Words keep internal hyphens and apostrophes ("guarda-chuva", "d'água"),
//! numbers keep their grouping and decimal separators ("1.234,56"), URLs and
//! e-mail addresses stay whole, and abbreviations from the lexicon keep their
//! period. Every other visible character is its own punctuation token, except
//! that an ellipsis is one token. Whitespace is dropped unless it contains a
//! blank line, in which case the run becomes a single space token.

use regex::Regex;
use std::sync::LazyLock;

use super::lexicon::ABBREVIATIONS;

/// Regex for URLs at the cursor.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://|www\.)\S+").expect("valid regex"));

/// Regex for email addresses at the cursor.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.%+-]+@[\w-]+(?:\.[\w-]+)*\.[A-Za-z]{2,}").expect("valid regex")
});

/// What a token is, before tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, possibly with digits, hyphens or apostrophes.
    Word,
    /// Digits with optional `.`/`,` separators.
    Number,
    /// URL or e-mail address.
    Link,
    /// A single punctuation or symbol character, or an ellipsis.
    Punct,
    /// Whitespace containing a paragraph break.
    Space,
}

/// A token and its byte offset in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Token text as it appears in the source.
    pub text: String,
    /// Token kind.
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
}

impl RawToken {
    /// Whether this token carries lexical content (not punctuation or space).
    pub const fn is_lexical(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Number | TokenKind::Link)
    }

    /// Whether the first character is uppercase.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Split `text` into tokens.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, ch) = chars[i];

        if ch.is_whitespace() {
            let end = scan_while(&chars, i, |c| c.is_whitespace());
            let run = slice(text, &chars, i, end);
            if is_paragraph_break(run) {
                tokens.push(RawToken {
                    text: run.to_string(),
                    kind: TokenKind::Space,
                    start,
                });
            }
            i = end;
            continue;
        }

        if ch.is_alphanumeric() {
            if let Some(link) = match_link(&text[start..]) {
                let end = i + link.chars().count();
                tokens.push(RawToken {
                    text: link.to_string(),
                    kind: TokenKind::Link,
                    start,
                });
                i = end;
                continue;
            }

            let mut end = scan_word(&chars, i);
            let word = slice(text, &chars, i, end);
            let kind = if word.starts_with(|c: char| c.is_ascii_digit())
                && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
            {
                TokenKind::Number
            } else {
                TokenKind::Word
            };
            if kind == TokenKind::Word
                && chars.get(end).is_some_and(|&(_, c)| c == '.')
                && keeps_period(word)
            {
                end += 1;
            }
            tokens.push(RawToken {
                text: slice(text, &chars, i, end).to_string(),
                kind,
                start,
            });
            i = end;
            continue;
        }

        let end = if ch == '.' && is_dot_run(&chars, i) {
            scan_while(&chars, i, |c| c == '.')
        } else {
            i + 1
        };
        tokens.push(RawToken {
            text: slice(text, &chars, i, end).to_string(),
            kind: TokenKind::Punct,
            start,
        });
        i = end;
    }

    tokens
}

fn slice<'a>(text: &'a str, chars: &[(usize, char)], from: usize, to: usize) -> &'a str {
    let start = chars[from].0;
    let end = chars.get(to).map_or(text.len(), |&(pos, _)| pos);
    &text[start..end]
}

fn scan_while(chars: &[(usize, char)], from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = from;
    while i < chars.len() && pred(chars[i].1) {
        i += 1;
    }
    i
}

/// End index of the word starting at `from`.
fn scan_word(chars: &[(usize, char)], from: usize) -> usize {
    let numeric = chars[from].1.is_ascii_digit();
    let mut i = from + 1;
    while i < chars.len() {
        let c = chars[i].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);
        if c.is_alphanumeric() {
            i += 1;
        } else if numeric && matches!(c, '.' | ',') && next.is_some_and(|n| n.is_ascii_digit()) {
            i += 1;
        } else if matches!(c, '-' | '\'' | '\u{2019}') && next.is_some_and(char::is_alphanumeric)
        {
            i += 1;
        } else {
            break;
        }
    }
    i
}

fn keeps_period(word: &str) -> bool {
    let mut letters = word.chars();
    let single_capital =
        letters.next().is_some_and(char::is_uppercase) && letters.next().is_none();
    single_capital || ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

fn is_dot_run(chars: &[(usize, char)], from: usize) -> bool {
    chars.get(from + 1).is_some_and(|&(_, c)| c == '.')
        && chars.get(from + 2).is_some_and(|&(_, c)| c == '.')
}

fn is_paragraph_break(run: &str) -> bool {
    run.matches('\n').count() >= 2
}

fn match_link(rest: &str) -> Option<&str> {
    if let Some(m) = URL_PATTERN.find(rest) {
        let url = m
            .as_str()
            .trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '"', '\'']);
        return Some(url);
    }
    EMAIL_PATTERN.find(rest).map(|m| m.as_str())
}
