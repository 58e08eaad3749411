//! Ruleset discovery, loading, and modification-time caching.
//!
//! Discovery order: `$FOLDER_RULES_PATH`, caller search paths (usually
//! `./.folder-rules`), then `~/.folder-rules`. The first existing regular
//! file wins. [`RulesCache`] re-parses only when the resolved file or its
//! modification time changes.

mod cache;
mod core;
mod error;


pub use self::cache::RulesCache;
pub use self::core::{load_file, RuleLoader};
pub use self::error::{LoadStatus, Result, RuleError};
