//! Tool surface for the folder rules engine.
//!
//! Exposes the engine as named tools with JSON Schema inputs so an agent
//! shell (see `folder-mcp`) can call them.

pub mod registry;
pub mod source;
pub mod tool;
pub mod tools;

pub use registry::{RegistryError, ToolRegistry};
pub use source::RuleSource;
pub use tool::{Tool, ToolDefinition, ToolError, ToolResult};
pub use tools::{register_folder_tools, GetRulesTool, SuggestLocationTool};
