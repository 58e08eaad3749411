//! Rule-based folder suggestion engine.
//!
//! This crate provides:
//! - A line-oriented ruleset format (categories plus `pattern:` hints)
//! - Three-tier destination suggestion for a free-text description
//! - Validation of proposed relative paths
//! - Filesystem discovery with an mtime-keyed ruleset cache
//! - Starter ruleset scaffolding from an existing directory tree
//!
//! Engine functions are pure over an immutable [`Ruleset`] and safe to call
//! concurrently on a shared snapshot.

pub mod glob;
pub mod loader;
pub mod matcher;
pub mod parse;
pub mod scaffold;
pub mod schema;
pub mod slug;
pub mod validation;

pub use glob::Glob;
pub use loader::{load_file, LoadStatus, RuleError, RuleLoader, RulesCache};
pub use matcher::{suggest, Suggestion, Tier};
pub use parse::parse;
pub use schema::{visible_categories, PatternRule, Ruleset};
pub use slug::{extension_for, slugify, FileType};
pub use validation::{validate, Rejection, Validation};
