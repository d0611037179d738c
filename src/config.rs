//! Engine Configuration
//!
//! Presentation knobs for the answer branches. Loaded from JSON; any field
//! left out of the file keeps its default. The 50-acre compost threshold and
//! the carbon conversion factors are fixed and deliberately absent here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prefix of a funder's detail page; the slug is appended
    pub story_path_prefix: String,

    /// Practices listed in a single-state breakdown
    pub top_practice_count: usize,

    /// Compost projects listed before the "...and N more" note
    pub compost_list_limit: usize,

    /// Lowercase fragments that mark a query as funder-related
    pub brand_fragments: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            story_path_prefix: "/stories/".to_string(),
            top_practice_count: 3,
            compost_list_limit: 10,
            brand_fragments: vec!["bob's".to_string(), "red mill".to_string()],
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        Ok(config)
    }

    /// Load from `ENGINE_CONFIG` if set, otherwise defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var("ENGINE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Relative path of a funder's detail page
    pub fn story_path(&self, slug: &str) -> String {
        format!("{}{}", self.story_path_prefix, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "compost_list_limit": 5 }"#).unwrap();
        assert_eq!(config.compost_list_limit, 5);
        assert_eq!(config.top_practice_count, 3);
        assert_eq!(config.story_path_prefix, "/stories/");
    }

    #[test]
    fn test_story_path() {
        let config = EngineConfig::default();
        assert_eq!(config.story_path("bobs-red-mill"), "/stories/bobs-red-mill");
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read engine config"));
    }
}
