//! Error types and load status for the ruleset loader.

use std::path::PathBuf;

/// Errors that can occur while loading or writing a ruleset.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error while scaffolding.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Refusing to replace an existing ruleset file.
    #[error("Ruleset already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Result alias for ruleset operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// What [`RulesCache::refresh`](super::RulesCache::refresh) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File was (re)parsed.
    Loaded { path: PathBuf },
    /// Cached snapshot is still current.
    Unchanged { path: PathBuf },
    /// No candidate file exists.
    Missing,
}
