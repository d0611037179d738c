//! Structured Answer Tree
//!
//! Parses the markdown-lite answer body into typed lines so callers can
//! render answers without re-implementing the markup rules:
//! - `- text` -> `Bullet`
//! - `*text*` (single asterisks, whole line) -> `Note`
//! - empty line -> `Break`
//! - anything else -> `Paragraph`
//!
//! Inside paragraphs and bullets, `**text**` becomes `Span::Bold`. An
//! unmatched trailing `**` is kept as literal text.

use serde::Serialize;

/// Inline run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Span {
    Text(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Bold(s) => s,
        }
    }
}

/// One line of an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum AnswerBlock {
    Paragraph(Vec<Span>),
    Bullet(Vec<Span>),
    Note(String),
    Break,
}

/// Parse a full answer body
pub fn parse_answer(answer: &str) -> Vec<AnswerBlock> {
    answer.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> AnswerBlock {
    let trimmed = line.trim_end();

    if trimmed.trim().is_empty() {
        AnswerBlock::Break
    } else if let Some(rest) = trimmed.strip_prefix("- ") {
        AnswerBlock::Bullet(parse_spans(rest))
    } else if is_note(trimmed) {
        AnswerBlock::Note(trimmed[1..trimmed.len() - 1].to_string())
    } else {
        AnswerBlock::Paragraph(parse_spans(trimmed))
    }
}

fn is_note(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('*') && !line.starts_with("**") && line.ends_with('*') && !line.ends_with("**")
}

/// Split text on `**` markers into alternating plain/bold spans
pub fn parse_spans(text: &str) -> Vec<Span> {
    let segments: Vec<&str> = text.split("**").collect();
    // An even segment count means the last marker has no partner
    let balanced_len = if segments.len() % 2 == 0 {
        segments.len() - 1
    } else {
        segments.len()
    };

    let mut spans = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate().take(balanced_len) {
        let is_last_unbalanced = balanced_len < segments.len() && i == balanced_len - 1;
        if is_last_unbalanced {
            let literal = format!("{}**{}", segment, segments[balanced_len]);
            push_span(&mut spans, literal, i % 2 == 1);
        } else {
            push_span(&mut spans, segment.to_string(), i % 2 == 1);
        }
    }
    spans
}

fn push_span(spans: &mut Vec<Span>, text: String, bold: bool) {
    if text.is_empty() {
        return;
    }
    if bold {
        spans.push(Span::Bold(text));
    } else {
        spans.push(Span::Text(text));
    }
}

/// Concatenate span text with markup removed
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
