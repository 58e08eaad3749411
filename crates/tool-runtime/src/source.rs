//! Shared, lazily refreshed access to the current ruleset.

use std::path::Path;
use std::sync::{Arc, Mutex};

use folder_core::RulesConfig;
use folder_rules::{RuleLoader, Ruleset, RulesCache};

use crate::tool::ToolError;

/// Cloneable handle to one [`RulesCache`], shared by every tool of a server.
#[derive(Debug, Clone)]
pub struct RuleSource {
    cache: Arc<Mutex<RulesCache>>,
}

impl RuleSource {
    pub fn new(loader: RuleLoader) -> Self {
        Self {
            cache: Arc::new(Mutex::new(RulesCache::new(loader))),
        }
    }

    /// Standard discovery order rooted at `dir`.
    pub fn for_directory(config: &RulesConfig, dir: &Path) -> Self {
        Self::new(RuleLoader::for_directory(config, dir))
    }

    /// Current ruleset, or `None` when no ruleset file exists.
    pub fn snapshot(&self) -> Result<Option<Arc<Ruleset>>, ToolError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| ToolError::ExecutionFailed("rules cache lock poisoned".to_string()))?;
        Ok(cache.current()?)
    }
}
