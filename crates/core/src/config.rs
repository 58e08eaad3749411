use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of a ruleset, both in the working directory and in `$HOME`.
pub const RULES_FILENAME: &str = ".folder-rules";

/// Environment variable that points at an explicit ruleset file.
pub const RULES_PATH_ENV: &str = "FOLDER_RULES_PATH";

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rules: RulesConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self::from_lookup(env_opt, dirs::home_dir())
    }

    /// Build config from an arbitrary key lookup and home directory.
    ///
    /// Empty values are treated as unset, same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F, home: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|s| !s.is_empty());
        Self {
            rules: RulesConfig::from_lookup(&lookup, home),
            server: ServerConfig::from_lookup(&lookup),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  rules:   override={}, home={}",
            display_opt(&self.rules.path_override),
            display_opt(&self.rules.home_path),
        );
        tracing::info!("  server:  name={}", self.server.name);
    }

    /// Return a JSON view of the resolved settings.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "rules": {
                "path_override": self.rules.path_override,
                "home_path": self.rules.home_path,
                "filename": RULES_FILENAME,
            },
            "server": { "name": self.server.name },
        })
    }
}

fn display_opt(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}

// ── Rules ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Explicit ruleset path from `FOLDER_RULES_PATH`.
    pub path_override: Option<PathBuf>,
    /// `~/.folder-rules`, when a home directory is known.
    pub home_path: Option<PathBuf>,
}

impl RulesConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Self {
        Self {
            path_override: lookup(RULES_PATH_ENV).map(PathBuf::from),
            home_path: home.map(|h| h.join(RULES_FILENAME)),
        }
    }

    /// Replace the override path (e.g. from a CLI flag).
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.path_override = path;
        }
        self
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name reported to MCP clients during `initialize`.
    pub name: String,
}

impl ServerConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: lookup("FOLDER_ENFORCER_SERVER_NAME")
                .unwrap_or_else(|| "folder-enforcer".to_string()),
        }
    }
}
