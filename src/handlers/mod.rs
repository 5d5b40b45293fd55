pub mod tool_call;

use serde_json::json;

use crate::protocol::{InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams};
use crate::server::{AppState, Session, PROTOCOL_VERSION};

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(
    req: &JsonRpcRequest,
    state: &AppState,
    session: Option<&Session>,
) -> Option<JsonRpcResponse> {
    tracing::debug!(method = %req.method, "handling MCP message");

    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok())
            {
                if let (Some(session), Some(version)) = (session, params.protocol_version) {
                    session.set_protocol_version(version);
                }
                if let Some(client) = params.client_info {
                    tracing::info!(
                        client = client.name.as_deref().unwrap_or("unknown"),
                        version = client.version.as_deref().unwrap_or("unknown"),
                        "client initialized"
                    );
                }
            }
            let result = json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "mcp-netbox-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        method if method.starts_with("notifications/") => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), json!({}))),

        "tools/list" => {
            let tools: Vec<_> = state
                .registry
                .list()
                .iter()
                .map(|descriptor| {
                    json!({
                        "name": descriptor.name,
                        "description": descriptor.description,
                        "inputSchema": descriptor.input_schema(),
                    })
                })
                .collect();
            Some(JsonRpcResponse::success(req.id.clone(), json!({ "tools": tools })))
        }

        "resources/list" => {
            Some(JsonRpcResponse::success(req.id.clone(), json!({ "resources": [] })))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}")),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let response = match tool_call::handle(&params, state).await {
                Ok(result) => match serde_json::to_value(&result) {
                    Ok(result_json) => JsonRpcResponse::success(req.id.clone(), result_json),
                    Err(e) => JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::internal_error(format!("result serialization failed: {e}")),
                    ),
                },
                Err(error) => JsonRpcResponse::error(req.id.clone(), error),
            };
            Some(response)
        }

        _ => {
            if req.is_notification() {
                return None;
            }
            Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::method_not_found(&req.method),
            ))
        }
    }
}
