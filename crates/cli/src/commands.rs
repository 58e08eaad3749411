use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use folder_core::{Config, RULES_FILENAME};
use folder_mcp::{LineTransport, McpServer};
use folder_rules::{scaffold, suggest, validate, RuleLoader, Ruleset};
use folder_tool_runtime::tools::{get_rules, suggest_location};
use folder_tool_runtime::{register_folder_tools, RuleSource, ToolRegistry};

pub async fn serve(config: &Config, cwd: &Path) -> Result<()> {
    let mut registry = ToolRegistry::new();
    register_folder_tools(&mut registry, RuleSource::for_directory(&config.rules, cwd))
        .context("failed to register tools")?;

    let mut server = McpServer::new(registry).with_name(config.server.name.clone());
    let mut transport = LineTransport::stdio();
    server.run(&mut transport).await.context("MCP server failed")?;
    Ok(())
}

/// Suggestion or validation text, exactly as the `suggest_location` tool returns it.
pub fn suggest_text(
    loader: &RuleLoader,
    description: &str,
    file_type: &str,
    path: Option<&str>,
) -> Result<String> {
    let rules = require_rules(loader, suggest_location::NO_RULES_MESSAGE)?;
    Ok(match path.filter(|p| !p.is_empty()) {
        Some(path) => validate(&rules, path).to_string(),
        None => suggest(&rules, description, file_type).to_string(),
    })
}

/// Validation text and whether the path was accepted.
pub fn validate_path(loader: &RuleLoader, path: &str) -> Result<(String, bool)> {
    let rules = require_rules(loader, suggest_location::NO_RULES_MESSAGE)?;
    let outcome = validate(&rules, path);
    Ok((outcome.to_string(), outcome.is_valid()))
}

pub fn rules_text(loader: &RuleLoader) -> Result<String> {
    let rules = require_rules(loader, get_rules::NO_RULES_MESSAGE)?;
    Ok(rules.raw)
}

/// Generate a starter ruleset for `dir`; write it unless `dry_run`.
///
/// Returns the generated text and the path it was (or would be) written to.
pub fn init(
    dir: &Path,
    output: Option<PathBuf>,
    force: bool,
    dry_run: bool,
) -> Result<(String, PathBuf)> {
    let text = scaffold::generate(dir)
        .with_context(|| format!("failed to scan '{}'", dir.display()))?;
    let target = output.unwrap_or_else(|| dir.join(RULES_FILENAME));

    if !dry_run {
        scaffold::write_rules(&target, &text, force)
            .with_context(|| format!("failed to write '{}'", target.display()))?;
    }
    Ok((text, target))
}

/// Candidate paths in lookup order, flagging the active one.
pub fn where_report(loader: &RuleLoader, config: &Config, json: bool) -> Result<String> {
    let active = loader.find().map(Path::to_path_buf);

    if json {
        let mut summary = config.summary();
        summary["candidates"] = serde_json::json!(loader.candidates());
        summary["active"] = serde_json::json!(active);
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let mut out = String::new();
    for candidate in loader.candidates() {
        let marker = if active.as_deref() == Some(candidate.as_path()) {
            "*"
        } else if candidate.is_file() {
            "+"
        } else {
            "-"
        };
        out.push_str(&format!("{marker} {}\n", candidate.display()));
    }
    match &active {
        Some(path) => out.push_str(&format!("Active: {}", path.display())),
        None => out.push_str("Active: (none)"),
    }
    Ok(out)
}

fn require_rules(loader: &RuleLoader, not_found: &str) -> Result<Ruleset> {
    match loader.load()? {
        Some((path, rules)) => {
            info!(path = %path.display(), "Using ruleset");
            Ok(rules)
        }
        None => bail!("{not_found}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folder_core::RulesConfig;

    const RULES: &str = "clients\nresearch\n_archive\npattern:*invoice* -> clients/\n";

    fn loader_for(dir: &tempfile::TempDir) -> RuleLoader {
        let path = dir.path().join(RULES_FILENAME);
        std::fs::write(&path, RULES).unwrap();
        RuleLoader::new(vec![path])
    }

    #[test]
    fn test_suggest_text_matches_tool_output() {
        let dir = tempfile::tempdir().unwrap();
        let text = suggest_text(&loader_for(&dir), "Acme invoice", "pdf", None).unwrap();
        assert_eq!(
            text,
            "Suggested: clients/acme-invoice.pdf\nReason: Matched pattern *invoice* -> clients/\nCategory: clients"
        );
    }

    #[test]
    fn test_suggest_text_with_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let text =
            suggest_text(&loader_for(&dir), "ignored", "file", Some("research/notes.md")).unwrap();
        assert_eq!(text, "Valid: research/notes.md is in allowed category 'research/'");
    }

    #[test]
    fn test_validate_path_reports_acceptance() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_for(&dir);

        let (_, ok) = validate_path(&loader, "_archive/old.zip").unwrap();
        assert!(ok);

        let (text, ok) = validate_path(&loader, "../escape").unwrap();
        assert!(!ok);
        assert!(text.starts_with("Invalid: only relative paths"));
    }

    #[test]
    fn test_missing_ruleset_is_error_with_guidance() {
        let dir = tempfile::tempdir().unwrap();
        let loader = RuleLoader::new(vec![dir.path().join("absent")]);
        let err = rules_text(&loader).unwrap_err();
        assert_eq!(err.to_string(), get_rules::NO_RULES_MESSAGE);
    }

    #[test]
    fn test_rules_text_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(rules_text(&loader_for(&dir)).unwrap(), RULES);
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("projects")).unwrap();

        let (text, target) = init(dir.path(), None, false, false).unwrap();
        assert_eq!(target, dir.path().join(RULES_FILENAME));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), text);
        assert!(text.lines().any(|l| l == "projects"));

        assert!(init(dir.path(), None, false, false).is_err());
        assert!(init(dir.path(), None, true, false).is_ok());
    }

    #[test]
    fn test_init_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (_, target) = init(dir.path(), None, false, true).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_where_report_marks_active() {
        let dir = tempfile::tempdir().unwrap();
        let cwd_rules = dir.path().join(RULES_FILENAME);
        std::fs::write(&cwd_rules, "clients\n").unwrap();

        let rules_config = RulesConfig {
            path_override: None,
            home_path: Some(dir.path().join("home-rules")),
        };
        let config = Config::from_lookup(|_| None, None);
        let loader = RuleLoader::for_directory(&rules_config, dir.path());

        let report = where_report(&loader, &config, false).unwrap();
        assert!(report.contains(&format!("* {}", cwd_rules.display())));
        assert!(report.ends_with(&format!("Active: {}", cwd_rules.display())));

        let json: serde_json::Value =
            serde_json::from_str(&where_report(&loader, &config, true).unwrap()).unwrap();
        assert_eq!(json["active"], serde_json::json!(cwd_rules));
        assert_eq!(json["candidates"].as_array().unwrap().len(), 2);
    }
}
