//! MCP server implementation.
//!
//! Wraps a `ToolRegistry` and exposes its tools over the MCP protocol.

use serde::Serialize;
use serde_json::Value;

use folder_tool_runtime::{ToolRegistry, ToolResult};

use crate::error::McpError;
use crate::transport::McpTransport;
use crate::types::*;

/// Guidance sent to the agent in the `initialize` result.
pub const DEFAULT_INSTRUCTIONS: &str = "File organization assistant. Call suggest_location BEFORE saving any \
file to get the right folder path. Call get_rules to see the user's folder structure.";

/// MCP server that bridges a `ToolRegistry` to MCP clients.
pub struct McpServer {
    registry: ToolRegistry,
    server_name: String,
    server_version: String,
    initialized: bool,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            server_name: "folder-enforcer".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            initialized: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the server loop until the transport is closed.
    ///
    /// Malformed lines get a parse-error response with id 0; the loop keeps
    /// going. Only transport failures end it early.
    pub async fn run<T: McpTransport>(&mut self, transport: &mut T) -> Result<(), McpError> {
        tracing::info!(server = %self.server_name, tools = self.registry.len(), "MCP server starting");

        while let Some(line) = transport.receive().await? {
            tracing::debug!(message = %line, "Received message");

            let raw: Value = match serde_json::from_str(&line) {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to parse JSON");
                    let resp = parse_error_response(McpError::JsonParse(e));
                    transport.send(&serde_json::to_string(&resp)?).await?;
                    continue;
                }
            };

            // No "id" means notification: never answered.
            if raw.get("id").is_none() {
                if let Ok(notif) = serde_json::from_value::<JsonRpcNotification>(raw) {
                    self.handle_notification(&notif);
                }
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_value(raw) {
                Ok(req) => req,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to parse JSON-RPC request");
                    let resp = parse_error_response(McpError::JsonParse(e));
                    transport.send(&serde_json::to_string(&resp)?).await?;
                    continue;
                }
            };

            let response = self.handle_request(&request).await;
            let json = serde_json::to_string(&response)?;
            tracing::debug!(response = %json, "Sending response");
            transport.send(&json).await?;
        }

        tracing::info!("Transport closed, shutting down");
        Ok(())
    }

    /// Handle a single JSON-RPC request and produce a response.
    pub async fn handle_request(&mut self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_list_tools(id),
            "tools/call" => self.handle_call_tool(id, &request.params).await,
            method => {
                tracing::warn!(method = %method, "Unknown method");
                error_response(id, McpError::MethodNotFound(method.to_string()))
            }
        }
    }

    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        match notif.method.as_str() {
            "notifications/initialized" => tracing::info!("Client confirmed initialization"),
            method => tracing::debug!(method = %method, "Ignoring notification"),
        }
    }

    fn handle_initialize(&mut self, id: RpcId) -> JsonRpcResponse {
        tracing::info!("Handling initialize");
        self.initialized = true;

        respond(
            id,
            InitializeResult {
                protocol_version: PROTOCOL_VERSION.to_string(),
                capabilities: ServerCapabilities {
                    tools: Some(ToolsCapability { list_changed: false }),
                },
                server_info: ServerInfo {
                    name: self.server_name.clone(),
                    version: Some(self.server_version.clone()),
                },
                instructions: Some(DEFAULT_INSTRUCTIONS.to_string()),
            },
        )
    }

    fn handle_list_tools(&self, id: RpcId) -> JsonRpcResponse {
        tracing::debug!("Handling tools/list");
        let tools = self.registry.list().into_iter().map(ToolInfo::from).collect();
        respond(id, ListToolsResult { tools })
    }

    async fn handle_call_tool(&self, id: RpcId, params: &Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return error_response(id, McpError::InvalidParams("missing params".to_string()));
        };

        let call: CallToolParams = match serde_json::from_value(params.clone()) {
            Ok(p) => p,
            Err(e) => return error_response(id, McpError::InvalidParams(e.to_string())),
        };

        tracing::debug!(tool = %call.name, "Handling tools/call");

        let Some(tool) = self.registry.get(&call.name) else {
            return error_response(id, McpError::ToolNotFound(call.name));
        };

        // Tool failures are reported in-band so the agent can read them.
        let result = match tool.execute(call.arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = %call.name, error = %e, "Tool call failed");
                ToolResult::error(e.to_string())
            }
        };

        respond(id, CallToolResult::from(result))
    }
}

fn respond(id: RpcId, result: impl Serialize) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(val) => JsonRpcResponse::success(id, val),
        Err(e) => error_response(id, McpError::JsonParse(e)),
    }
}

fn error_response(id: RpcId, err: McpError) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(err.to_rpc_error()),
    }
}

fn parse_error_response(err: McpError) -> JsonRpcResponse {
    error_response(RpcId::Number(0), err)
}
