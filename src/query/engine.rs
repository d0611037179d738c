//! Query Engine
//!
//! Entry point tying classifier, branches and assembler together. The
//! engine owns nothing but presentation config; projects and funders are
//! borrowed per call, so a single engine can serve concurrent callers.

use crate::config::EngineConfig;
use crate::query::intent::{resolve, Intent, QueryContext};
use crate::query::types::QueryResult;
use crate::records::{FarmProject, Funder};

#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: EngineConfig,
}

impl QueryEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Which branch would answer this query
    pub fn classify(&self, query: &str, projects: &[FarmProject], funders: &[Funder]) -> Intent {
        let ctx = QueryContext::new(query, projects, funders, &self.config);
        resolve(&ctx).intent
    }

    /// Answer a query. Total: every input yields a result.
    pub fn process(&self, query: &str, projects: &[FarmProject], funders: &[Funder]) -> QueryResult {
        let ctx = QueryContext::new(query, projects, funders, &self.config);
        let rule = resolve(&ctx);
        tracing::debug!(
            intent = %rule.intent,
            projects = projects.len(),
            funders = funders.len(),
            "Resolved query"
        );
        (rule.answer)(&ctx)
    }
}

/// Answer a query with the default configuration
pub fn process_query(query: &str, projects: &[FarmProject], funders: &[Funder]) -> QueryResult {
    QueryEngine::default().process(query, projects, funders)
}
