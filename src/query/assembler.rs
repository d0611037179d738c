//! Response Assembler
//!
//! Wraps a branch's answer text, sources and suggested actions into a
//! `QueryResult`. `type` falls back to `data`; no actions means the field is
//! omitted entirely.

use crate::query::types::{ActionTarget, QueryResult, ResultType, SuggestedAction};

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    answer: String,
    sources: Vec<String>,
    result_type: Option<ResultType>,
    actions: Vec<SuggestedAction>,
}

impl ResponseBuilder {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = Some(result_type);
        self
    }

    pub fn action(mut self, label: impl Into<String>, target: impl Into<ActionTarget>) -> Self {
        self.actions.push(SuggestedAction::new(label, target));
        self
    }

    pub fn build(self) -> QueryResult {
        QueryResult {
            answer: self.answer.trim_end().to_string(),
            sources: self.sources,
            result_type: self.result_type.unwrap_or_default(),
            suggested_actions: if self.actions.is_empty() {
                None
            } else {
                Some(self.actions)
            },
        }
    }
}
