//! Farm Query Engine
//!
//! Answers free-text dashboard questions about farm grant projects, carbon
//! estimates and funder partnerships.
//!
//! Layout:
//! - `records`: project and funder record model
//! - `utils/`: formatting, carbon equivalences, US state table
//! - `query/`: intent classifier, answer branches, response assembly
//! - `data`: snapshot loading and validation
//! - `api_server` (feature `api`): axum HTTP surface
//!
//! The engine is synchronous and total: `process_query` returns a
//! `QueryResult` for every input, including empty queries and empty datasets.

pub mod records;
pub mod utils;
pub mod error;
pub mod config;
pub mod data;
pub mod query;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::EngineConfig;
pub use data::Dataset;
pub use error::DataError;
pub use query::{
    process_query, ActionTarget, Intent, JsonFormatter, PlainTextFormatter, QueryEngine,
    QueryResult, ResultType, SuggestedAction,
};
pub use records::{Availability, CometEstimate, FarmProject, Funder, Practice, ProjectStage};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
