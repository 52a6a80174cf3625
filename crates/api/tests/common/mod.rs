//! Shared helpers for API integration tests.
//!
//! [`build_test_app`] wires the real router and middleware stack onto a
//! test database pool; the request helpers drive it through
//! `tower::ServiceExt::oneshot` without binding a socket.

// Each test binary compiles this module separately and uses a subset of
// the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use skillswap_api::auth::jwt::JwtConfig;
use skillswap_api::config::ServerConfig;
use skillswap_api::router::build_app_router;
use skillswap_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Integration tests exercise the same middleware stack (CORS, request ID,
/// timeout, tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the full response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Domain fixtures
// ---------------------------------------------------------------------------

/// Register a user through the API; returns their id and bearer token.
pub async fn register_user(app: &Router, email: &str, name: &str) -> (i64, String) {
    let body = json!({
        "email": email,
        "password": "swordfish-9",
        "name": name,
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "registration should succeed"
    );

    let json = body_json(response).await;
    let id = json["data"]["user"]["id"].as_i64().unwrap();
    let token = json["data"]["token"].as_str().unwrap().to_string();
    (id, token)
}

/// Create a taxonomy skill and list it on the caller's profile; returns
/// the listing id.
pub async fn list_skill(app: &Router, token: &str, name: &str, skill_type: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/skills",
        json!({ "name": name, "category": "Test" }),
        token,
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "skill creation should succeed"
    );
    let skill_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/users/skills",
        json!({ "skill_id": skill_id, "skill_type": skill_type, "level": "INTERMEDIATE" }),
        token,
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "listing creation should succeed"
    );
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Two registered users with one listing each, ready to swap.
pub struct SwapPair {
    pub requester_id: i64,
    pub requester_token: String,
    pub receiver_id: i64,
    pub receiver_token: String,
    /// Listing owned by the requester (the offered side).
    pub offered_id: i64,
    /// Listing owned by the receiver (the wanted side).
    pub wanted_id: i64,
}

/// Register two users and give each one listed skill.
///
/// `tag` keeps emails and skill names unique when one test sets up more
/// than one pair.
pub async fn setup_swap_pair(app: &Router, tag: &str) -> SwapPair {
    let (requester_id, requester_token) =
        register_user(app, &format!("{tag}-requester@example.com"), "Requester").await;
    let (receiver_id, receiver_token) =
        register_user(app, &format!("{tag}-receiver@example.com"), "Receiver").await;

    let offered_id = list_skill(app, &requester_token, &format!("{tag} guitar"), "OFFERED").await;
    let wanted_id = list_skill(app, &receiver_token, &format!("{tag} spanish"), "OFFERED").await;

    SwapPair {
        requester_id,
        requester_token,
        receiver_id,
        receiver_token,
        offered_id,
        wanted_id,
    }
}

/// Send a swap request from the pair's requester to its receiver; returns
/// the swap id.
pub async fn create_swap(app: &Router, pair: &SwapPair) -> i64 {
    let body = json!({
        "receiver_id": pair.receiver_id,
        "skill_offered_id": pair.offered_id,
        "skill_wanted_id": pair.wanted_id,
        "message": "Shall we trade?",
    });
    let response = post_json_auth(app.clone(), "/api/v1/swaps", body, &pair.requester_token).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "swap creation should succeed"
    );
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Drive a swap toward a target status as the given caller.
pub async fn transition_swap(app: &Router, token: &str, swap_id: i64, status: &str) -> Response {
    put_json_auth(
        app.clone(),
        &format!("/api/v1/swaps/{swap_id}"),
        json!({ "status": status }),
        token,
    )
    .await
}
