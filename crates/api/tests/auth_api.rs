//! HTTP-level tests for `/auth/login` and `/auth/register`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, register, TEST_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn register_returns_created_user_without_hash() {
    let (app, _) = common::build_test_app();

    let body = json!({
        "email": "misty@cerulean.test",
        "name": "Misty",
        "password": "starmie-1",
        "phone": "555-0101"
    });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "misty@cerulean.test");
    assert_eq!(json["role"], "USER");
    assert_eq!(json["phone"], "555-0101");
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let (app, _) = common::build_test_app();
    register(app.clone(), "misty@cerulean.test", "Misty").await;

    let body = json!({ "email": "misty@cerulean.test", "name": "Other", "password": "psyduck-1" });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let (app, _) = common::build_test_app();

    let cases = [
        json!({ "email": "not-an-email", "name": "Misty", "password": "starmie-1" }),
        json!({ "email": "misty@cerulean.test", "name": "", "password": "starmie-1" }),
        json!({ "email": "misty@cerulean.test", "name": "Misty", "password": "short" }),
    ];

    for body in cases {
        let response = post_json(app.clone(), "/auth/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn login_success_returns_token_and_user() {
    let (app, _) = common::build_test_app();
    let user = register(app.clone(), "brock@pewter.test", "Brock").await;

    let body = json!({ "email": "brock@pewter.test", "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["user"]["id"], user["id"]);
    assert_eq!(json["user"]["email"], "brock@pewter.test");
    assert_eq!(json["user"]["name"], "Brock");
    assert_eq!(json["user"]["role"], "USER");

    // The issued token opens protected routes.
    let token = json["access_token"].as_str().unwrap();
    let response = get_auth(app, "/users", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (app, _) = common::build_test_app();
    register(app.clone(), "brock@pewter.test", "Brock").await;

    let wrong_password = post_json(
        app.clone(),
        "/auth/login",
        json!({ "email": "brock@pewter.test", "password": "not-the-password" }),
    )
    .await;
    let unknown_email = post_json(
        app,
        "/auth/login",
        json!({ "email": "nobody@pewter.test", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong_password).await, body_json(unknown_email).await);
}

#[tokio::test]
async fn login_rejects_short_password_before_lookup() {
    let (app, _) = common::build_test_app();

    let body = json!({ "email": "brock@pewter.test", "password": "onix" });
    let response = post_json(app, "/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
