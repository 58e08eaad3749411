//! `suggest_location`: suggest a destination, or validate a proposed path.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use folder_rules::{suggest, validate};

use crate::source::RuleSource;
use crate::tool::{optional_str, Tool, ToolDefinition, ToolError, ToolResult};

/// Returned instead of a suggestion when no ruleset can be found.
pub const NO_RULES_MESSAGE: &str = "No .folder-rules file found. Create one at ~/.folder-rules (or set $FOLDER_RULES_PATH) with:\n  - One allowed folder name per line\n  - Optional: pattern:*keyword* -> folder/\nRun 'folder-enforcer init' to generate one from your current structure.";

const DEFAULT_FILE_TYPE: &str = "file";

pub struct SuggestLocationTool {
    rules: RuleSource,
}

impl SuggestLocationTool {
    pub fn new(rules: RuleSource) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl Tool for SuggestLocationTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "suggest_location".to_string(),
            description: "Suggest the best folder for a file, or validate a proposed path. \
                Call this BEFORE saving any file to get the right destination."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "description": {
                        "type": "string",
                        "description": "What the file is (e.g. \"standing desk research\", \"Acme Corp invoice\")"
                    },
                    "file_type": {
                        "type": "string",
                        "description": "\"markdown\", \"pdf\", \"code\", \"folder\", or an extension like \".py\"",
                        "default": DEFAULT_FILE_TYPE
                    },
                    "proposed_path": {
                        "type": "string",
                        "description": "If set, validates this relative path instead of suggesting one"
                    }
                },
                "required": ["description"]
            }),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolResult, ToolError> {
        let description = input
            .get("description")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidInput("missing 'description' field".to_string()))?;
        let file_type = optional_str(&input, "file_type")?.unwrap_or(DEFAULT_FILE_TYPE);
        let proposed_path = optional_str(&input, "proposed_path")?;

        let Some(rules) = self.rules.snapshot()? else {
            debug!("no ruleset available");
            return Ok(ToolResult::text(NO_RULES_MESSAGE));
        };

        let content = match proposed_path {
            Some(path) => {
                debug!(path = %path, "validating proposed path");
                validate(&rules, path).to_string()
            }
            None => {
                let suggestion = suggest(&rules, description, file_type);
                debug!(
                    description = %description,
                    file_type = %file_type,
                    tier = %suggestion.tier(),
                    "suggested location"
                );
                suggestion.to_string()
            }
        };

        Ok(ToolResult::text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folder_rules::RuleLoader;

    const RULES: &str = "clients\nresearch\npattern:*research*|*analysis* -> research/\n";

    fn tool_with_rules(dir: &tempfile::TempDir) -> SuggestLocationTool {
        let path = dir.path().join(".folder-rules");
        std::fs::write(&path, RULES).unwrap();
        SuggestLocationTool::new(RuleSource::new(RuleLoader::new(vec![path])))
    }

    #[tokio::test]
    async fn test_suggests_from_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let tool = tool_with_rules(&dir);
        let result = tool
            .execute(serde_json::json!({"description": "competitor analysis Q1", "file_type": "pdf"}))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result
            .content
            .starts_with("Suggested: research/competitor-analysis-q1.pdf\n"));
    }

    #[tokio::test]
    async fn test_file_type_defaults_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let tool = tool_with_rules(&dir);
        let result = tool
            .execute(serde_json::json!({"description": "random thing"}))
            .await
            .unwrap();

        assert!(result.content.contains("Suggested filename: random-thing\n"));
    }

    #[tokio::test]
    async fn test_proposed_path_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let tool = tool_with_rules(&dir);
        let result = tool
            .execute(serde_json::json!({"description": "", "proposed_path": "clients/acme/invoice.pdf"}))
            .await
            .unwrap();

        assert_eq!(
            result.content,
            "Valid: clients/acme/invoice.pdf is in allowed category 'clients/'"
        );
    }

    #[tokio::test]
    async fn test_empty_proposed_path_means_suggest() {
        let dir = tempfile::tempdir().unwrap();
        let tool = tool_with_rules(&dir);
        let result = tool
            .execute(serde_json::json!({"description": "market research", "proposed_path": ""}))
            .await
            .unwrap();

        assert!(result.content.starts_with("Suggested: research/market-research"));
    }

    #[tokio::test]
    async fn test_missing_ruleset_gives_instructions() {
        let dir = tempfile::tempdir().unwrap();
        let tool = SuggestLocationTool::new(RuleSource::new(RuleLoader::new(vec![
            dir.path().join("absent"),
        ])));
        let result = tool
            .execute(serde_json::json!({"description": "anything"}))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, NO_RULES_MESSAGE);
        assert!(result.content.contains("~/.folder-rules"));
        assert!(result.content.contains("$FOLDER_RULES_PATH"));
    }

    #[tokio::test]
    async fn test_missing_description_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let tool = tool_with_rules(&dir);
        let err = tool
            .execute(serde_json::json!({"file_type": "pdf"}))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_definition() {
        let dir = tempfile::tempdir().unwrap();
        let def = tool_with_rules(&dir).definition();
        assert_eq!(def.name, "suggest_location");
        assert_eq!(def.input_schema["required"], serde_json::json!(["description"]));
    }
}
