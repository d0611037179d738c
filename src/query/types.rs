use serde::{Deserialize, Serialize};

use crate::query::answer::{parse_answer, AnswerBlock};

/// Discriminant telling the UI how to present an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Data,
    Narrative,
    List,
}

/// Where a suggested action leads
///
/// Serialized as a bare string: relative paths start with `/`, anything else
/// is an opaque action id handled client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionTarget {
    Path(String),
    Action(String),
}

impl ActionTarget {
    pub fn as_str(&self) -> &str {
        match self {
            ActionTarget::Path(s) | ActionTarget::Action(s) => s,
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, ActionTarget::Path(_))
    }
}

impl From<String> for ActionTarget {
    fn from(target: String) -> Self {
        if target.starts_with('/') {
            ActionTarget::Path(target)
        } else {
            ActionTarget::Action(target)
        }
    }
}

impl From<&str> for ActionTarget {
    fn from(target: &str) -> Self {
        ActionTarget::from(target.to_string())
    }
}

impl From<ActionTarget> for String {
    fn from(target: ActionTarget) -> Self {
        match target {
            ActionTarget::Path(s) | ActionTarget::Action(s) => s,
        }
    }
}

/// Follow-up offered alongside an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub label: String,
    pub action: ActionTarget,
}

impl SuggestedAction {
    pub fn new(label: impl Into<String>, action: impl Into<ActionTarget>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// The engine's single output type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Markdown-lite body: `**bold**`, `- ` bullets, `*italic*` lines
    pub answer: String,
    pub sources: Vec<String>,
    #[serde(rename = "type")]
    pub result_type: ResultType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<Vec<SuggestedAction>>,
}

impl QueryResult {
    /// Parse the answer body into typed lines
    pub fn blocks(&self) -> Vec<AnswerBlock> {
        parse_answer(&self.answer)
    }

    /// Suggested actions, empty when none were attached
    pub fn actions(&self) -> &[SuggestedAction] {
        self.suggested_actions.as_deref().unwrap_or(&[])
    }

    pub fn has_action_target(&self, target: &str) -> bool {
        self.actions().iter().any(|a| a.action.as_str() == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_target_classification() {
        assert!(ActionTarget::from("/stories/bobs-red-mill").is_path());
        assert!(!ActionTarget::from("open-compost-calculator").is_path());
    }

    #[test]
    fn test_serialized_shape() {
        let result = QueryResult {
            answer: "**1 project**".to_string(),
            sources: vec!["Farm project records".to_string()],
            result_type: ResultType::Narrative,
            suggested_actions: Some(vec![SuggestedAction::new("View", "/stories/x")]),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "narrative");
        assert_eq!(json["suggestedActions"][0]["action"], "/stories/x");
        assert_eq!(json["sources"][0], "Farm project records");
    }

    #[test]
    fn test_no_actions_field_omitted() {
        let result = QueryResult {
            answer: String::new(),
            sources: vec![],
            result_type: ResultType::Data,
            suggested_actions: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("suggestedActions").is_none());
        assert!(result.actions().is_empty());
    }
}
