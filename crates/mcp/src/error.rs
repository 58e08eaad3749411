//! Error types for the MCP crate.

use crate::types::{error_codes, JsonRpcError};

/// Errors that can occur while serving MCP requests.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// The requested tool is not in the registry.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

impl McpError {
    /// Convert to a JSON-RPC error object.
    pub fn to_rpc_error(&self) -> JsonRpcError {
        let code = match self {
            McpError::JsonParse(_) => error_codes::PARSE_ERROR,
            McpError::MethodNotFound(_) => error_codes::METHOD_NOT_FOUND,
            McpError::InvalidParams(_) | McpError::ToolNotFound(_) => error_codes::INVALID_PARAMS,
            McpError::Transport(_) => error_codes::INTERNAL_ERROR,
        };
        JsonRpcError {
            code,
            message: self.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_codes() {
        assert_eq!(
            McpError::MethodNotFound("x".into()).to_rpc_error().code,
            error_codes::METHOD_NOT_FOUND
        );
        assert_eq!(
            McpError::ToolNotFound("x".into()).to_rpc_error().code,
            error_codes::INVALID_PARAMS
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert_eq!(McpError::from(io).to_rpc_error().code, error_codes::INTERNAL_ERROR);
    }
}
