//! Markdown-to-prose conversion for model responses.
//!
//! Chat models answer in markdown: headings, bullet lists, bold, the odd code
//! block. The metrics want the words the reader sees, with block structure
//! preserved as paragraph breaks so that a heading or a list item is never
//! glued to the following sentence.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

const BLOCK_BREAK: &str = "\n\n";

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, HTML, YAML frontmatter, link targets,
/// image alt text, emphasis markers and table rules. Keeps heading text,
/// list-item text, table cell text and blockquote text. Each block ends with
/// a blank line.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. } | Tag::HtmlBlock) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Image | TagEnd::HtmlBlock) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push(' '),

            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableRow,
            ) if skip_depth == 0 => end_block(&mut result),
            Event::End(TagEnd::TableHead) if skip_depth == 0 => end_block(&mut result),
            Event::End(TagEnd::TableCell) if skip_depth == 0 => result.push(' '),

            _ => {}
        }
    }

    result.trim().to_string()
}

/// Close the current block unless it is already closed or empty.
fn end_block(out: &mut String) {
    let trimmed = out.trim_end_matches([' ', '\n']).len();
    out.truncate(trimmed);
    if !out.is_empty() {
        out.push_str(BLOCK_BREAK);
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };
    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

/// Whether a path looks like a markdown file.
pub fn is_markdown_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}
