//! Core [`RuleLoader`]: ordered candidate paths and file loading.

use std::fs;
use std::path::{Path, PathBuf};

use folder_core::{RulesConfig, RULES_FILENAME};
use tracing::{debug, info};

use super::error::Result;
use crate::parse::parse;
use crate::schema::Ruleset;

/// Ordered list of places a ruleset may live.
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    candidates: Vec<PathBuf>,
}

impl RuleLoader {
    /// Loader over an explicit candidate list, tried in order.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Standard discovery order: override, then `search_paths`, then home.
    pub fn from_config(config: &RulesConfig, search_paths: &[PathBuf]) -> Self {
        let mut candidates = Vec::with_capacity(search_paths.len() + 2);
        candidates.extend(config.path_override.iter().cloned());
        candidates.extend(search_paths.iter().cloned());
        candidates.extend(config.home_path.iter().cloned());
        Self { candidates }
    }

    /// Standard discovery order with `dir/.folder-rules` as the search path.
    pub fn for_directory(config: &RulesConfig, dir: &Path) -> Self {
        Self::from_config(config, &[dir.join(RULES_FILENAME)])
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that is an existing regular file.
    pub fn find(&self) -> Option<&Path> {
        let found = self
            .candidates
            .iter()
            .find(|p| p.is_file())
            .map(PathBuf::as_path);
        match found {
            Some(path) => debug!(path = %path.display(), "found ruleset"),
            None => debug!(candidates = self.candidates.len(), "no ruleset found"),
        }
        found
    }

    /// Locate and parse the ruleset without caching.
    pub fn load(&self) -> Result<Option<(PathBuf, Ruleset)>> {
        match self.find() {
            Some(path) => Ok(Some((path.to_path_buf(), load_file(path)?))),
            None => Ok(None),
        }
    }
}

/// Read and parse a ruleset file.
pub fn load_file(path: &Path) -> Result<Ruleset> {
    let contents = fs::read_to_string(path)?;
    let rules = parse(&contents);
    info!(
        path = %path.display(),
        categories = rules.allowed.len(),
        patterns = rules.patterns.len(),
        "loaded ruleset"
    );
    Ok(rules)
}
