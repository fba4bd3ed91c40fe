//! Shared setup for the HTTP integration tests.
//!
//! The app runs over [`MemoryUserStore`] and [`StubCatalogClient`], so no
//! database or network is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pokeadmin_api::auth::jwt::JwtConfig;
use pokeadmin_api::config::ServerConfig;
use pokeadmin_api::router::build_app_router;
use pokeadmin_api::state::AppState;
use pokeadmin_catalog::{CatalogConfig, StubCatalogClient};
use pokeadmin_db::repositories::MemoryUserStore;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const CATALOG_URL: &str = "http://catalog.test/api/v2";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 5,
        },
        catalog: CatalogConfig {
            base_url: CATALOG_URL.to_string(),
            cache_capacity: 1_000,
        },
    }
}

/// Build the full application router with the production middleware stack.
///
/// Returns the stub upstream so tests can seed bodies and count requests.
pub fn build_test_app() -> (Router, Arc<StubCatalogClient>) {
    let config = test_config();
    let stub = Arc::new(StubCatalogClient::new());
    let state = AppState::new(
        config.clone(),
        Arc::new(MemoryUserStore::new()),
        stub.clone(),
    );
    (build_app_router(state, &config), stub)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::PATCH, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "pallet-town-1";

pub async fn register(app: Router, email: &str, name: &str) -> Value {
    let body = json!({ "email": email, "name": name, "password": TEST_PASSWORD });
    let response = post_json(app, "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Register an account and return a bearer token for it.
pub async fn register_and_login(app: Router, email: &str) -> String {
    register(app.clone(), email, "Ash").await;
    let body = json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .expect("login should return an access token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Catalog fixtures
// ---------------------------------------------------------------------------

pub fn detail_url(id: i64) -> String {
    format!("{CATALOG_URL}/pokemon/{id}/")
}

pub fn list_url(limit: u32, offset: u32) -> String {
    format!("{CATALOG_URL}/pokemon?limit={limit}&offset={offset}")
}

pub fn index_url() -> String {
    format!("{CATALOG_URL}/pokemon?limit=10000")
}

pub fn type_url(kind: &str) -> String {
    format!("{CATALOG_URL}/type/{kind}")
}

pub fn detail_body(id: i64, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": [{ "slot": 1, "type": { "name": kind, "url": type_url(kind) } }],
        "sprites": {
            "other": {
                "official-artwork": {
                    "front_default": format!("https://img.test/artwork/{id}.png")
                }
            }
        },
        "stats": [{ "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } }],
        "abilities": [
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false, "slot": 1 }
        ]
    })
}

fn entry(id: i64, name: &str) -> Value {
    json!({ "name": name, "url": detail_url(id) })
}

pub fn list_body(entries: &[(i64, &str)]) -> Value {
    let results: Vec<Value> = entries.iter().map(|(id, name)| entry(*id, name)).collect();
    json!({ "count": results.len(), "results": results })
}

pub fn type_body(entries: &[(i64, &str)]) -> Value {
    let members: Vec<Value> = entries
        .iter()
        .map(|(id, name)| json!({ "slot": 1, "pokemon": entry(*id, name) }))
        .collect();
    json!({ "pokemon": members })
}

pub fn serve_details(stub: &StubCatalogClient, entries: &[(i64, &str)], kind: &str) {
    for (id, name) in entries {
        stub.insert(detail_url(*id), detail_body(*id, name, kind));
    }
}
