use serde_json::{Map, Value};

use crate::protocol::{JsonRpcError, ToolCallParams, ToolResult};
use crate::server::AppState;
use crate::translate;

/// Handle a `tools/call`: resolve the tool, translate the argument bag into
/// a downstream query, execute it, and wrap the result sequence.
///
/// Adapter failures become JSON-RPC errors here; they never escape as
/// process-level failures.
pub async fn handle(params: &ToolCallParams, state: &AppState) -> Result<ToolResult, JsonRpcError> {
    if state.config.netbox_token.is_empty() {
        return Err(JsonRpcError::token_not_configured());
    }

    let Some(descriptor) = state.registry.resolve(&params.name) else {
        tracing::warn!(tool = %params.name, "tools/call for unregistered tool");
        return Err(JsonRpcError::tool_not_found(&params.name));
    };

    let args: Map<String, Value> = match &params.arguments {
        None => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(JsonRpcError::invalid_params("arguments must be an object")),
    };

    tracing::info!(tool = %params.name, "executing tool");
    let objects = translate::execute(&state.client, descriptor, &args)
        .await
        .map_err(|e| {
            tracing::error!(tool = %params.name, error = %e, "downstream query failed");
            JsonRpcError::from(e)
        })?;

    Ok(ToolResult::objects(&objects))
}
