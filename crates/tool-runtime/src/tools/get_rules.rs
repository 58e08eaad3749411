//! `get_rules`: return the raw ruleset text.

use async_trait::async_trait;
use serde_json::Value;

use crate::source::RuleSource;
use crate::tool::{Tool, ToolDefinition, ToolError, ToolResult};

/// Returned instead of the ruleset when none can be found.
pub const NO_RULES_MESSAGE: &str = "No .folder-rules file found.\nCreate one at ~/.folder-rules or set $FOLDER_RULES_PATH.\nFormat: one allowed folder per line, plus pattern: hints.";

pub struct GetRulesTool {
    rules: RuleSource,
}

impl GetRulesTool {
    pub fn new(rules: RuleSource) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl Tool for GetRulesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_rules".to_string(),
            description: "Return the current folder organization rules (raw .folder-rules content). \
                Call this to understand the user's folder structure before suggesting paths."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult, ToolError> {
        let content = match self.rules.snapshot()? {
            Some(rules) => rules.raw.clone(),
            None => NO_RULES_MESSAGE.to_string(),
        };
        Ok(ToolResult::text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folder_rules::RuleLoader;

    #[tokio::test]
    async fn test_returns_raw_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".folder-rules");
        let text = "# mine\nclients\n\npattern:*x* -> clients/\n";
        std::fs::write(&path, text).unwrap();

        let tool = GetRulesTool::new(RuleSource::new(RuleLoader::new(vec![path])));
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.content, text);
    }

    #[tokio::test]
    async fn test_missing_ruleset() {
        let tool = GetRulesTool::new(RuleSource::new(RuleLoader::default()));
        let result = tool.execute(Value::Null).await.unwrap();
        assert_eq!(result.content, NO_RULES_MESSAGE);
    }

    #[tokio::test]
    async fn test_sees_edits_through_shared_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".folder-rules");
        let source = RuleSource::new(RuleLoader::new(vec![path.clone()]));
        let tool = GetRulesTool::new(source.clone());

        let before = tool.execute(Value::Null).await.unwrap();
        assert_eq!(before.content, NO_RULES_MESSAGE);

        std::fs::write(&path, "clients\n").unwrap();
        let after = tool.execute(Value::Null).await.unwrap();
        assert_eq!(after.content, "clients\n");
        assert!(source.snapshot().unwrap().is_some());
    }
}
