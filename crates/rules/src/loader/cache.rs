//! [`RulesCache`]: the last parsed ruleset, keyed by path and mtime.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use super::core::{load_file, RuleLoader};
use super::error::{LoadStatus, Result};
use crate::schema::Ruleset;

#[derive(Debug)]
struct Cached {
    path: PathBuf,
    modified: Option<SystemTime>,
    rules: Arc<Ruleset>,
}

/// Caller-owned ruleset cache.
///
/// Holds no process-wide state: each owner decides how to share it.
#[derive(Debug)]
pub struct RulesCache {
    loader: RuleLoader,
    cached: Option<Cached>,
}

impl RulesCache {
    pub fn new(loader: RuleLoader) -> Self {
        Self {
            loader,
            cached: None,
        }
    }

    /// Current ruleset snapshot, re-parsing if the file changed.
    pub fn current(&mut self) -> Result<Option<Arc<Ruleset>>> {
        self.refresh()?;
        Ok(self.cached.as_ref().map(|c| Arc::clone(&c.rules)))
    }

    /// Path of the cached snapshot, if any.
    pub fn path(&self) -> Option<&Path> {
        self.cached.as_ref().map(|c| c.path.as_path())
    }

    /// Bring the cache in line with the filesystem.
    ///
    /// A file whose mtime cannot be read is re-parsed on every call.
    pub fn refresh(&mut self) -> Result<LoadStatus> {
        let Some(path) = self.loader.find().map(Path::to_path_buf) else {
            if self.cached.take().is_some() {
                debug!("ruleset disappeared, dropping cached snapshot");
            }
            return Ok(LoadStatus::Missing);
        };

        let modified = fs::metadata(&path)?.modified().ok();

        if let Some(cached) = &self.cached {
            if cached.path == path && modified.is_some() && cached.modified == modified {
                debug!(path = %path.display(), "ruleset unchanged, using cache");
                return Ok(LoadStatus::Unchanged { path });
            }
        }

        let rules = Arc::new(load_file(&path)?);
        self.cached = Some(Cached {
            path: path.clone(),
            modified,
            rules,
        });
        Ok(LoadStatus::Loaded { path })
    }
}
