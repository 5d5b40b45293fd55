use serde::Serialize;

use super::request::RpcId;
use crate::client::NetBoxError;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope. Exactly one of `result`/`error` is set;
/// the constructors are the only way to build one.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    /// `null` when the request id could not be recovered (e.g. parse error),
    /// per JSON-RPC 2.0; never omitted.
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object.
///
/// Server-defined codes (the -32000 range) are stable:
///
/// - `-32000` — NetBox token not configured
/// - `-32001` — unknown tool
/// - `-32002` — downstream object not found (HTTP 404)
/// - `-32003` — downstream rejected the request (other 4xx)
/// - `-32004` — downstream unavailable (5xx)
/// - `-32005` — downstream transport failure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self { code: -32700, message: "Parse error".into(), data: None }
    }

    pub fn invalid_request() -> Self {
        Self { code: -32600, message: "Invalid Request".into(), data: None }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self { code: -32602, message: detail.into(), data: None }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self { code: -32603, message: detail.into(), data: None }
    }

    pub fn token_not_configured() -> Self {
        Self {
            code: -32000,
            message: "NetBox token not configured".into(),
            data: None,
        }
    }

    pub fn tool_not_found(name: &str) -> Self {
        Self {
            code: -32001,
            message: format!("Unknown tool: {name}"),
            data: None,
        }
    }
}

/// Map an adapter failure onto the stable downstream error codes, carrying
/// the HTTP status and endpoint path in `data` when known.
impl From<NetBoxError> for JsonRpcError {
    fn from(err: NetBoxError) -> Self {
        match &err {
            NetBoxError::Status { status, path } => {
                let code = match *status {
                    404 => -32002,
                    400..=499 => -32003,
                    _ => -32004,
                };
                Self {
                    code,
                    message: err.to_string(),
                    data: Some(serde_json::json!({ "status": status, "path": path })),
                }
            }
            NetBoxError::Transport(_) | NetBoxError::Url(_) => Self {
                code: -32005,
                message: err.to_string(),
                data: None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// MCP tool call result wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    /// Wrap a sequence of downstream objects as a single JSON text block.
    /// An empty sequence serializes as `[]`, never as prose.
    pub fn objects(objects: &[serde_json::Value]) -> Self {
        Self::text(serde_json::Value::Array(objects.to_vec()).to_string())
    }
}
