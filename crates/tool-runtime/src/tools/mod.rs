//! Caller-facing tools: `suggest_location` and `get_rules`.
//!
//! Both read through the same [`RuleSource`] so a ruleset edit is picked up
//! by the next call to either tool.

pub mod get_rules;
pub mod suggest_location;

pub use get_rules::GetRulesTool;
pub use suggest_location::SuggestLocationTool;

use crate::registry::{RegistryError, ToolRegistry};
use crate::source::RuleSource;

/// Register both folder tools against one shared source.
pub fn register_folder_tools(
    registry: &mut ToolRegistry,
    source: RuleSource,
) -> Result<(), RegistryError> {
    registry.register(SuggestLocationTool::new(source.clone()))?;
    registry.register(GetRulesTool::new(source))?;
    Ok(())
}
