//! Integration tests for registration, login, and token checks.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "Ann", "email": "ann@pqp.test", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["user"]["email"], "ann@pqp.test");
    assert_eq!(response.body["user"]["role"], "user");
    assert!(response.body["user"].get("password").is_none());
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = helpers::TestApp::new().await;
    app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "Other", "email": "ANN@pqp.test", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["ok"], false);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_requires_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "ann@pqp.test" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ann@pqp.test", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["name"], "Ann");
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = helpers::TestApp::new().await;
    app.register("Ann", "ann@pqp.test", "secret").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ann@pqp.test", "password": "nope" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@pqp.test", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
}

#[tokio::test]
async fn test_me_reflects_token_claims() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "ann@pqp.test");
    assert_eq!(response.body["user"]["role"], "user");
}

#[tokio::test]
async fn test_me_rejects_missing_and_bad_tokens() {
    let app = helpers::TestApp::new().await;

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app.request("GET", "/api/auth/me", None, Some("not.a.jwt")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_token_is_forbidden_on_admin_routes() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app.request("GET", "/api/admin/papers", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_promotion_takes_effect_on_next_login() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app.request("GET", "/api/admin/papers", None, Some(&admin)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().is_some_and(|a| a.is_empty()));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_without_upload_root() {
    let app = helpers::TestApp::new().await;
    std::fs::remove_dir_all(app.upload_dir.path()).unwrap();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["status"], "degraded");
}
