use crate::query::answer::{plain_text, AnswerBlock};
use crate::query::types::QueryResult;

/// Terminal rendering: markup stripped, bullets indented
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn format(result: &QueryResult) -> String {
        let mut out = String::with_capacity(result.answer.len() + 256);

        for block in result.blocks() {
            match block {
                AnswerBlock::Paragraph(spans) => {
                    out.push_str(&plain_text(&spans));
                    out.push('\n');
                }
                AnswerBlock::Bullet(spans) => {
                    out.push_str("  • ");
                    out.push_str(&plain_text(&spans));
                    out.push('\n');
                }
                AnswerBlock::Note(text) => {
                    out.push_str(&text);
                    out.push('\n');
                }
                AnswerBlock::Break => out.push('\n'),
            }
        }

        if !result.sources.is_empty() {
            out.push_str(&format!("\nSources: {}\n", result.sources.join("; ")));
        }

        let actions = result.actions();
        if !actions.is_empty() {
            out.push_str("\nSuggested actions:\n");
            for action in actions {
                out.push_str(&format!("  → {} ({})\n", action.label, action.action.as_str()));
            }
        }

        out
    }
}
