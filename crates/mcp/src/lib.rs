//! MCP (Model Context Protocol) server for folder-enforcer.
//!
//! Speaks JSON-RPC 2.0 over newline-delimited stdio and exposes a
//! `ToolRegistry` (normally `suggest_location` and `get_rules`) to an agent.
//!
//! - **types**: JSON-RPC 2.0 and MCP-specific protocol types
//! - **transport**: line transport over any async reader/writer pair
//! - **server**: request dispatch
//! - **error**: protocol error mapping
//!
//! ```no_run
//! use folder_mcp::server::McpServer;
//! use folder_mcp::transport::LineTransport;
//! use folder_tool_runtime::ToolRegistry;
//!
//! # async fn example() {
//! let mut server = McpServer::new(ToolRegistry::new());
//! let mut transport = LineTransport::stdio();
//! server.run(&mut transport).await.unwrap();
//! # }
//! ```

pub mod error;
pub mod server;
pub mod transport;
pub mod types;

pub use error::McpError;
pub use server::{McpServer, DEFAULT_INSTRUCTIONS};
pub use transport::{LineTransport, McpTransport, StdioTransport};
pub use types::*;
