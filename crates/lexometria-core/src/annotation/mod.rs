//! Dependency-parse annotations.
//!
//! Annotations arrive as CoNLL-U text: one token per line with ten
//! tab-separated columns, sentences separated by blank lines, `#` comments.
//! [`parse`] turns that text into [`Sentence`] arenas where each token points
//! at its head by index, so tree walks never need parent/child references.
//!
//! The [`client`] module fetches annotations from a UDPipe service.

pub mod client;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnnotationError, AnnotationResult};
use crate::pos::Upos;

pub use client::{AnnotationSource, UdpipeClient};

/// Relation labels that introduce a clause.
const CLAUSE_RELATIONS: &[&str] = &["csubj", "ccomp", "xcomp", "advcl", "acl"];

/// Relation labels that introduce a dependent (adverbial or adnominal) clause.
const DEPENDENT_CLAUSE_RELATIONS: &[&str] = &["advcl", "acl"];

/// Relation labels that mark coordination.
const COORDINATION_RELATIONS: &[&str] = &["conj", "cc"];

/// A dependency relation label such as `nsubj` or `advcl:tmod`.
///
/// The class predicates match by substring, so subtyped labels count toward
/// their base relation. A side effect worth knowing: `ccomp` contains `cc`
/// and therefore also satisfies [`Deprel::is_coordination`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deprel(String);

impl Deprel {
    /// Wrap a raw label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn contains_any(&self, labels: &[&str]) -> bool {
        labels.iter().any(|l| self.0.contains(l))
    }

    /// Clausal subject, clausal complement, open complement, adverbial or
    /// adnominal clause.
    pub fn is_clause(&self) -> bool {
        self.contains_any(CLAUSE_RELATIONS)
    }

    /// Adverbial or adnominal clause.
    pub fn is_dependent_clause(&self) -> bool {
        self.contains_any(DEPENDENT_CLAUSE_RELATIONS)
    }

    /// Conjunct or coordinating conjunction.
    pub fn is_coordination(&self) -> bool {
        self.contains_any(COORDINATION_RELATIONS)
    }

    /// Exactly `punct`.
    pub fn is_punct(&self) -> bool {
        self.0 == "punct"
    }

    /// Exactly `nummod`.
    pub fn is_nummod(&self) -> bool {
        self.0 == "nummod"
    }
}

impl fmt::Display for Deprel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Deprel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// One syntactic word of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 1-based position within the sentence.
    pub id: usize,
    /// Surface form.
    pub form: String,
    /// Lemma (`_` when the parser left it unspecified).
    pub lemma: String,
    /// Universal part-of-speech tag.
    pub upos: Upos,
    /// Id of the governing token, 0 for the root.
    pub head: usize,
    /// Relation to the head.
    pub deprel: Deprel,
}

impl Token {
    /// Build a token. Mostly useful for tests and hand-built trees.
    pub fn new(
        id: usize,
        form: impl Into<String>,
        lemma: impl Into<String>,
        upos: Upos,
        head: usize,
        deprel: impl Into<String>,
    ) -> Self {
        Self {
            id,
            form: form.into(),
            lemma: lemma.into(),
            upos,
            head,
            deprel: Deprel::new(deprel),
        }
    }

    /// Everything except punctuation counts toward token totals.
    pub fn is_content(&self) -> bool {
        !self.deprel.is_punct()
    }
}

/// A parsed sentence stored as an arena of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Wrap tokens whose `id`s run 1..=n in order.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Tokens in sentence order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the root token (the first with head 0).
    pub fn root(&self) -> Option<usize> {
        self.tokens.iter().position(|t| t.head == 0)
    }

    /// Whether exactly one token has head 0.
    ///
    /// Forests and headless sentences parse, but their depth and clause
    /// ratios are not meaningful.
    pub fn is_rooted(&self) -> bool {
        self.tokens.iter().filter(|t| t.head == 0).count() == 1
    }

    /// Child indices for every token, in sentence order.
    pub fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.tokens.len()];
        for (idx, token) in self.tokens.iter().enumerate() {
            if token.head > 0 && token.head <= self.tokens.len() {
                children[token.head - 1].push(idx);
            }
        }
        children
    }

    /// Height of the dependency tree below the root.
    ///
    /// A root without dependents has depth 0; otherwise depth is one more than
    /// the deepest child. Walks an explicit stack, and skips nodes it has
    /// already seen so cyclic input cannot loop.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        let children = self.children();
        let mut height = vec![0usize; self.tokens.len()];
        let mut visited = vec![false; self.tokens.len()];
        let mut stack = vec![(root, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                height[node] = children[node]
                    .iter()
                    .map(|&c| height[c] + 1)
                    .max()
                    .unwrap_or(0);
                continue;
            }
            if visited[node] {
                continue;
            }
            visited[node] = true;
            stack.push((node, true));
            stack.extend(
                children[node]
                    .iter()
                    .filter(|&&c| !visited[c])
                    .map(|&c| (c, false)),
            );
        }

        height[root]
    }
}

/// Parse CoNLL-U text into sentences.
///
/// Multiword-token ranges (`3-4`) and empty nodes (`5.1`) are skipped; only
/// syntactic words become [`Token`]s. Blank or whitespace-only input yields
/// no sentences.
///
/// # Errors
///
/// Returns [`AnnotationError::Format`] when a token line does not have ten
/// columns, an id or head is not an integer, ids are not consecutive from 1,
/// or a head points outside the sentence. A sentence without exactly one root
/// still parses; see [`Sentence::is_rooted`].
#[tracing::instrument(skip_all, fields(annotation_len = annotation.len()))]
pub fn parse(annotation: &str) -> AnnotationResult<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut start_line = 0;

    for (idx, raw) in annotation.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(finish_sentence(std::mem::take(&mut current), start_line)?);
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if current.is_empty() {
            start_line = line_no;
        }
        if let Some(token) = parse_token_line(line, line_no, current.len() + 1)? {
            current.push(token);
        }
    }

    if !current.is_empty() {
        sentences.push(finish_sentence(current, start_line)?);
    }

    tracing::debug!(sentences = sentences.len(), "annotation parsed");
    Ok(sentences)
}

fn format_error(line: usize, message: impl Into<String>) -> AnnotationError {
    AnnotationError::Format {
        line,
        message: message.into(),
    }
}

/// Parse one token line. Returns `None` for range and empty-node lines.
fn parse_token_line(
    line: &str,
    line_no: usize,
    expected_id: usize,
) -> AnnotationResult<Option<Token>> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != 10 {
        return Err(format_error(
            line_no,
            format!("expected 10 tab-separated columns, found {}", columns.len()),
        ));
    }

    let id_field = columns[0];
    if id_field.contains('-') || id_field.contains('.') {
        return Ok(None);
    }
    let id: usize = id_field
        .parse()
        .map_err(|_| format_error(line_no, format!("invalid token id '{id_field}'")))?;
    if id != expected_id {
        return Err(format_error(
            line_no,
            format!("token id {id} out of sequence (expected {expected_id})"),
        ));
    }

    let head_field = columns[6];
    let head: usize = head_field
        .parse()
        .map_err(|_| format_error(line_no, format!("invalid head '{head_field}'")))?;

    let upos = columns[3].parse().unwrap_or(Upos::X);

    Ok(Some(Token {
        id,
        form: columns[1].to_string(),
        lemma: columns[2].to_string(),
        upos,
        head,
        deprel: Deprel::new(columns[7]),
    }))
}

fn finish_sentence(tokens: Vec<Token>, start_line: usize) -> AnnotationResult<Sentence> {
    let len = tokens.len();
    if let Some(bad) = tokens.iter().find(|t| t.head > len) {
        return Err(format_error(
            start_line,
            format!("token {} has head {} outside the sentence", bad.id, bad.head),
        ));
    }
    Ok(Sentence::new(tokens))
}
