use serde::Serialize;

use crate::query::answer::AnswerBlock;
use crate::query::types::QueryResult;

/// JSON formatter for query results
pub struct JsonFormatter;

/// Result plus its parsed answer tree, as served over HTTP
#[derive(Debug, Serialize)]
pub struct RenderedResult<'a> {
    #[serde(flatten)]
    pub result: &'a QueryResult,
    pub blocks: Vec<AnswerBlock>,
}

impl<'a> RenderedResult<'a> {
    pub fn new(result: &'a QueryResult) -> Self {
        Self {
            result,
            blocks: result.blocks(),
        }
    }
}

impl JsonFormatter {
    /// Format result as pretty-printed JSON
    pub fn format(result: &QueryResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    /// Format result as compact JSON (no whitespace)
    pub fn format_compact(result: &QueryResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(result)
    }

    /// Result with its answer tree attached under `blocks`
    pub fn to_value_with_blocks(result: &QueryResult) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(RenderedResult::new(result))
    }
}
