//! HTTP transport tests: drive the router directly with `tower::oneshot`,
//! no listening socket required.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mcp_netbox_server::config::ServerConfig;
use mcp_netbox_server::server::{self, AppState};

const SESSION_HEADER: &str = "mcp-session-id";

fn state_with_url(netbox_url: String) -> AppState {
    let config = ServerConfig {
        netbox_url,
        netbox_token: "test-token".into(),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        session_idle_timeout: Duration::from_secs(300),
    };
    AppState::new(config).unwrap()
}

fn test_state() -> AppState {
    state_with_url("http://netbox.invalid".into())
}

/// A NetBox stand-in whose collection endpoint stalls until the test ends.
async fn stalling_netbox() -> std::net::SocketAddr {
    async fn stall() -> Json<Value> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Json(json!({"count": 0, "results": []}))
    }
    let app = Router::new().route("/api/dcim/devices/", get(stall));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn app(state: &AppState) -> Router {
    server::router(state.clone())
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn initialize_request() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "clientInfo": {"name": "transport-tests", "version": "0.0.0"}
        }
    })
}

#[tokio::test]
async fn initialize_mints_a_session() {
    let state = test_state();

    let response = app(&state).oneshot(post_json(initialize_request())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session_id = response
        .headers()
        .get(SESSION_HEADER)
        .expect("initialize must return a session id")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!session_id.is_empty());
    assert_eq!(state.sessions.len(), 1);

    let body = body_json(response).await;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"]["protocolVersion"], "2025-03-26");
    assert!(body["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn initialize_with_existing_session_mints_nothing() {
    let state = test_state();
    let session = state.sessions.create();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .header(SESSION_HEADER, session.id.as_str())
        .body(Body::from(initialize_request().to_string()))
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SESSION_HEADER).is_none());
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error_and_does_not_wedge_the_server() {
    let state = test_state();

    let broken = Request::builder()
        .method(Method::POST)
        .uri("/api/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(&state).oneshot(broken).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], -32700);
    // Unrecoverable id serializes as an explicit null.
    assert!(matches!(body.get("id"), Some(Value::Null)));

    // The next well-formed request is unaffected.
    let response = app(&state)
        .oneshot(post_json(json!({
            "jsonrpc": "2.0", "id": 2, "method": "ping", "params": {}
        })))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["id"], 2);
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn wrong_jsonrpc_version_is_invalid_request_with_id_echoed() {
    let state = test_state();

    let response = app(&state)
        .oneshot(post_json(json!({
            "jsonrpc": "1.0", "id": 9, "method": "ping", "params": {}
        })))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], 9);
}

#[tokio::test]
async fn notifications_are_accepted_without_a_body() {
    let state = test_state();

    let response = app(&state)
        .oneshot(post_json(json!({
            "jsonrpc": "2.0", "method": "notifications/initialized"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn delete_tears_the_session_down() {
    let state = test_state();
    let session = state.sessions.create();
    assert_eq!(state.sessions.len(), 1);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/mcp")
        .header(SESSION_HEADER, session.id.as_str())
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.sessions.is_empty());
    assert!(session.cancellation().is_cancelled());
}

#[tokio::test]
async fn teardown_mid_call_returns_no_content_and_no_message() {
    let addr = stalling_netbox().await;
    let state = state_with_url(format!("http://{addr}"));
    let session = state.sessions.create();

    let call = Request::builder()
        .method(Method::POST)
        .uri("/api/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .header(SESSION_HEADER, session.id.as_str())
        .body(Body::from(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "tools/call",
                "params": {"name": "search_devices", "arguments": {}}
            })
            .to_string(),
        ))
        .unwrap();
    let router = app(&state);
    let in_flight = tokio::spawn(async move { router.oneshot(call).await.unwrap() });

    // Let the call reach the stalled downstream request.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(session.in_flight(), 1);

    let delete = Request::builder()
        .method(Method::DELETE)
        .uri("/api/mcp")
        .header(SESSION_HEADER, session.id.as_str())
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The cancelled call yields no JSON-RPC message at all.
    let response = in_flight.await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
    assert_eq!(session.in_flight(), 0);
}

#[tokio::test]
async fn plain_get_returns_server_info() {
    let state = test_state();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/mcp")
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "mcp-netbox-server");
    assert_eq!(body["protocolVersion"], "2025-03-26");
}

#[tokio::test]
async fn sse_get_with_unknown_session_is_not_found() {
    let state = test_state();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/mcp")
        .header(header::ACCEPT, "text/event-stream")
        .header(SESSION_HEADER, "no-such-session")
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sse_get_with_known_session_opens_a_stream() {
    let state = test_state();
    let session = state.sessions.create();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/mcp")
        .header(header::ACCEPT, "text/event-stream")
        .header(SESSION_HEADER, session.id.as_str())
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
}

#[tokio::test]
async fn health_reports_configuration() {
    let state = test_state();
    state.sessions.create();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["netbox_configured"], true);
    assert_eq!(body["transport"], "streamable-http");
    assert_eq!(body["sessions"], 1);
}
