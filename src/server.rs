//! Streamable HTTP transport and session management.
//!
//! One MCP endpoint (`/api/mcp`) speaks JSON-RPC 2.0: POST carries messages,
//! GET with `Accept: text/event-stream` opens a heartbeat SSE stream, DELETE
//! tears the session down. Each session owns a cancellation token; every
//! in-flight `tools/call` races a child of that token, so teardown drops the
//! downstream request without producing a response on the session.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use futures::StreamExt;
use serde_json::{json, Value};
use tokio_stream::wrappers::IntervalStream;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::client::NetBoxClient;
use crate::config::ServerConfig;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
use crate::registry::ToolRegistry;
use crate::catalog;

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2025-03-26";

/// Header correlating requests to a logical session.
const SESSION_HEADER: &str = "mcp-session-id";

/// Interval between idle-session sweeps and SSE heartbeats.
const SWEEP_INTERVAL: Duration = Duration::from_secs(30);
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(15);

/// One logical client session. Created on `initialize`, destroyed on
/// DELETE, disconnect of its stream, or idle timeout.
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    cancel: CancellationToken,
    in_flight: AtomicUsize,
    last_seen: Mutex<Instant>,
    protocol_version: OnceLock<String>,
}

impl Session {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            cancel: CancellationToken::new(),
            in_flight: AtomicUsize::new(0),
            last_seen: Mutex::new(Instant::now()),
            protocol_version: OnceLock::new(),
        })
    }

    /// Token cancelled when the session is torn down.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Child token for one in-flight call.
    pub fn child_token(&self) -> CancellationToken {
        self.cancel.child_token()
    }

    pub fn set_protocol_version(&self, version: String) {
        let _ = self.protocol_version.set(version);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Relaxed)
    }

    fn touch(&self) {
        if let Ok(mut seen) = self.last_seen.lock() {
            *seen = Instant::now();
        }
    }

    fn idle_for(&self) -> Duration {
        self.last_seen
            .lock()
            .map(|seen| seen.elapsed())
            .unwrap_or_default()
    }
}

/// Tracks one in-flight call for its owning session.
pub struct InFlightGuard {
    session: Arc<Session>,
}

impl InFlightGuard {
    fn new(session: Arc<Session>) -> Self {
        session.in_flight.fetch_add(1, Ordering::Relaxed);
        Self { session }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.session.in_flight.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Session table. No cross-session shared mutable state; the map itself is
/// the only synchronized structure.
pub struct SessionManager {
    sessions: DashMap<String, Arc<Session>>,
    idle_timeout: Duration,
}

impl SessionManager {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    pub fn create(&self) -> Arc<Session> {
        let session = Session::new();
        self.sessions.insert(session.id.clone(), Arc::clone(&session));
        tracing::info!(session = %session.id, "session created");
        session
    }

    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        let session = self.sessions.get(id).map(|s| Arc::clone(&s));
        if let Some(ref s) = session {
            s.touch();
        }
        session
    }

    /// Remove a session and cancel its in-flight calls.
    pub fn remove(&self, id: &str) -> bool {
        match self.sessions.remove(id) {
            Some((_, session)) => {
                session.cancel.cancel();
                tracing::info!(session = %id, in_flight = session.in_flight(), "session terminated");
                true
            }
            None => false,
        }
    }

    /// Tear down sessions idle past the timeout. Returns how many were swept.
    pub fn sweep_idle(&self) -> usize {
        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter(|entry| entry.value().idle_for() > self.idle_timeout)
            .map(|entry| entry.key().clone())
            .collect();
        for id in &stale {
            tracing::info!(session = %id, "sweeping idle session");
            self.remove(id);
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Shared server state: configuration, registry, and client are read-only
/// after startup; the session table is the only mutable structure.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registry: Arc<ToolRegistry>,
    pub client: NetBoxClient,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let registry = catalog::build_registry()?;
        let client = NetBoxClient::new(&config.netbox_url, &config.netbox_token)?;
        let sessions = SessionManager::new(config.session_idle_timeout);
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            client,
            sessions: Arc::new(sessions),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/mcp", get(mcp_get).post(mcp_post).delete(mcp_delete))
        .route("/health", get(health))
        .with_state(state)
}

/// Run the server until ctrl-c.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config)?;
    let listen_addr = state.config.listen_addr;

    let sessions = Arc::clone(&state.sessions);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            sessions.sweep_idle();
        }
    });

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(%listen_addr, "mcp-netbox-server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;
    Ok(())
}

fn rpc_response(response: JsonRpcResponse) -> Response {
    Json(response).into_response()
}

fn header_session(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok())
}

async fn mcp_post(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    // Parse in two steps so a syntactically broken body and a structurally
    // invalid envelope get distinct errors, echoing the id when recoverable.
    let value: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable request body");
            return rpc_response(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
        }
    };
    let req: JsonRpcRequest = match serde_json::from_value(value.clone()) {
        Ok(r) => r,
        Err(_) => {
            let id = value
                .get("id")
                .and_then(|v| serde_json::from_value::<RpcId>(v.clone()).ok());
            return rpc_response(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }
    };
    if req.jsonrpc != "2.0" {
        return rpc_response(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::invalid_request(),
        ));
    }

    let existing = header_session(&headers).and_then(|id| state.sessions.get(id));
    // A fresh initialize without a session header mints one.
    let minted = if req.method == "initialize" && existing.is_none() {
        Some(state.sessions.create())
    } else {
        None
    };
    let session = existing.or_else(|| minted.clone());

    let response = if req.method == "tools/call" {
        let _guard = session.as_ref().map(|s| InFlightGuard::new(Arc::clone(s)));
        let token = session
            .as_ref()
            .map(|s| s.child_token())
            .unwrap_or_default();
        tokio::select! {
            _ = token.cancelled() => {
                // Session torn down mid-call: the downstream future is
                // dropped and no JSON-RPC message is emitted.
                tracing::debug!("tools/call cancelled by session teardown");
                return StatusCode::NO_CONTENT.into_response();
            }
            resp = handlers::dispatch(&req, &state, session.as_deref()) => resp,
        }
    } else {
        handlers::dispatch(&req, &state, session.as_deref()).await
    };

    match response {
        None => StatusCode::ACCEPTED.into_response(),
        Some(resp) => match minted {
            Some(session) => (
                [(SESSION_HEADER, session.id.clone())],
                Json(resp),
            )
                .into_response(),
            None => rpc_response(resp),
        },
    }
}

async fn mcp_get(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let wants_stream = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/event-stream"));

    if !wants_stream {
        return Json(json!({
            "name": "mcp-netbox-server",
            "version": env!("CARGO_PKG_VERSION"),
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "instructions": "Query a NetBox instance over the MCP streamable HTTP transport"
        }))
        .into_response();
    }

    let session = header_session(&headers).and_then(|id| state.sessions.get(id));
    if header_session(&headers).is_some() && session.is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    // A stream without a session stays open until the client disconnects.
    let cancel = session
        .map(|s| s.cancellation())
        .unwrap_or_default();

    let heartbeats = IntervalStream::new(tokio::time::interval(HEARTBEAT_INTERVAL))
        .map(|_| {
            Ok::<Event, Infallible>(
                Event::default().event("heartbeat").data(
                    json!({ "type": "heartbeat", "timestamp": Utc::now().to_rfc3339() })
                        .to_string(),
                ),
            )
        })
        .take_until(async move { cancel.cancelled().await });

    Sse::new(heartbeats)
        .keep_alive(KeepAlive::default())
        .into_response()
}

async fn mcp_delete(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = header_session(&headers) {
        state.sessions.remove(id);
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Liveness probe: reports whether downstream configuration is present,
/// never touches NetBox itself.
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "netbox_url": state.config.netbox_url,
        "netbox_configured": !state.config.netbox_token.is_empty(),
        "transport": "streamable-http",
        "protocol_version": PROTOCOL_VERSION,
        "mcp_endpoint": "/api/mcp",
        "sessions": state.sessions.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn teardown_cancels_all_in_flight_calls() {
        let manager = SessionManager::new(Duration::from_secs(300));
        let session = manager.create();

        let mut handles = Vec::new();
        for _ in 0..3 {
            let token = session.child_token();
            let guard = InFlightGuard::new(Arc::clone(&session));
            handles.push(tokio::spawn(async move {
                let _guard = guard;
                tokio::select! {
                    _ = token.cancelled() => true,
                    _ = tokio::time::sleep(Duration::from_secs(60)) => false,
                }
            }));
        }

        // Let the tasks start waiting.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(session.in_flight(), 3);

        assert!(manager.remove(&session.id));
        for handle in handles {
            assert!(handle.await.unwrap(), "call should observe cancellation");
        }
        assert_eq!(session.in_flight(), 0);
        assert!(manager.is_empty());
    }

    #[tokio::test]
    async fn idle_sessions_are_swept() {
        let manager = SessionManager::new(Duration::from_millis(10));
        let session = manager.create();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(manager.sweep_idle(), 1);
        assert!(manager.get(&session.id).is_none());
    }

    #[tokio::test]
    async fn touch_keeps_sessions_alive() {
        let manager = SessionManager::new(Duration::from_secs(300));
        let session = manager.create();
        assert_eq!(manager.sweep_idle(), 0);
        assert!(manager.get(&session.id).is_some());
    }
}
