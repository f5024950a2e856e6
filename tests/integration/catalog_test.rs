//! Integration tests for the subject catalog.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

fn maths() -> serde_json::Value {
    json!({ "grp": "BSc", "year": "2023", "semester": "1", "subject": "Mathematics" })
}

#[tokio::test]
async fn test_startup_seed_fills_empty_catalog() {
    let app = helpers::TestApp::seeded().await;

    let response = app.request("GET", "/api/subjects", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let subjects = response.body.as_array().expect("array");
    assert_eq!(subjects.len(), 37);
}

#[tokio::test]
async fn test_catalog_starts_empty_without_seed() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/subjects", None, None).await;

    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_add_requires_sign_in() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/subjects/add", Some(maths()), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_add_returns_refreshed_catalog() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app
        .request("POST", "/api/subjects/add", Some(maths()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["subject"]["subject"], "Mathematics");
    assert_eq!(response.body["subjects"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_duplicate_ignores_case_and_whitespace() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;
    app.request("POST", "/api/subjects/add", Some(maths()), Some(&token))
        .await;

    let response = app
        .request(
            "POST",
            "/api/subjects/add",
            Some(json!({ "grp": " bsc ", "year": "2023", "semester": "1", "subject": "MATHEMATICS" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    let list = app.request("GET", "/api/subjects", None, None).await;
    assert_eq!(list.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_missing_semester_is_stored_as_na() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/subjects/add",
            Some(json!({ "grp": "MBA", "year": "2022", "subject": "Finance" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject"]["semester"], "NA");
}

#[tokio::test]
async fn test_add_requires_classification_fields() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/subjects/add",
            Some(json!({ "grp": "BSc", "subject": "Physics" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "grp, year and subject required");
}

#[tokio::test]
async fn test_admin_routes_need_admin_role() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ann", "ann@pqp.test", "secret").await;

    let response = app
        .request("POST", "/api/admin/subject", Some(maths()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_delete_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;

    let added = app
        .request("POST", "/api/admin/subject", Some(maths()), Some(&admin))
        .await;
    assert_eq!(added.status, StatusCode::OK);
    let id = added.body["subject"]["id"].as_str().expect("id").to_string();

    let path = format!("/api/admin/subject/delete/{id}");
    let first = app.request("POST", &path, None, Some(&admin)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["message"], "Subject deleted");
    assert_eq!(first.body["subjects"], json!([]));

    let second = app.request("POST", &path, None, Some(&admin)).await;
    assert_eq!(second.status, StatusCode::OK);

    let malformed = app
        .request("POST", "/api/admin/subject/delete/not-an-id", None, Some(&admin))
        .await;
    assert_eq!(malformed.status, StatusCode::OK);
}
