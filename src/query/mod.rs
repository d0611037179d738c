//! Query-to-Answer Engine
//!
//! `process_query(query, projects, funders)` classifies a free-text query
//! into one of eight intents, runs that intent's aggregation over the given
//! records and returns a single `QueryResult`.

pub mod types;
pub mod answer;
pub mod intent;
pub mod branches;
pub mod assembler;
pub mod engine;
pub mod formatters;

#[cfg(test)]
pub(crate) mod fixtures;

pub use answer::{parse_answer, AnswerBlock, Span};
pub use assembler::ResponseBuilder;
pub use engine::{process_query, QueryEngine};
pub use formatters::{JsonFormatter, PlainTextFormatter};
pub use intent::{classify, normalize_query, Intent, QueryContext, INTENT_RULES};
pub use types::{ActionTarget, QueryResult, ResultType, SuggestedAction};
