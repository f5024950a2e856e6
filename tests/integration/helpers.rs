//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use pqphub_api::AppState;
use pqphub_core::config::AppConfig;
use pqphub_database::Database;

/// Multipart boundary used by [`TestApp::upload`].
const BOUNDARY: &str = "pqphub-test-boundary";

/// Test application context backed by an in-memory store.
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Application state, for direct service access
    pub state: AppState,
    /// Upload root; removed when the app drops
    pub upload_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Body parsed as JSON, or `Null`
    pub body: Value,
}

impl TestApp {
    /// App with an empty catalog
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// App whose catalog was seeded at startup
    pub async fn seeded() -> Self {
        Self::with_config(|c| c.catalog.seed_on_startup = true).await
    }

    /// App built from the default config after `adjust` runs on it
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let upload_dir = TempDir::new().expect("temp dir");

        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.catalog.seed_on_startup = false;
        config.storage.upload_root = upload_dir.path().to_string_lossy().into_owned();
        adjust(&mut config);

        let state = pqphub_api::build_state_with(config, Database::in_memory())
            .await
            .expect("Failed to build state");
        let router = pqphub_api::build_app(state.clone());

        Self {
            router,
            state,
            upload_dir,
        }
    }

    /// Register an account and return its token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "name": name, "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Register failed: {:?}", response.body);
        token_of(&response)
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Login failed: {:?}", response.body);
        token_of(&response)
    }

    /// Register, promote, and log in again so the token carries the admin role
    pub async fn admin_token(&self) -> String {
        self.register("Admin", "admin@pqp.test", "admin-pass").await;
        let promoted = self
            .state
            .auth_service
            .promote("admin@pqp.test")
            .await
            .expect("promote");
        assert!(promoted);
        self.login("admin@pqp.test", "admin-pass").await
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body_str)).expect("Failed to build request");
        self.send(req).await
    }

    /// Create a paper and return its id
    pub async fn create_paper(&self, token: &str, title: &str, grp: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/upload/create-paper",
                Some(serde_json::json!({
                    "title": title,
                    "grp": grp,
                    "year": "2023",
                    "semester": "1",
                    "subject": "Mathematics"
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Create failed: {:?}", response.body);
        response.body["paperId"]
            .as_str()
            .expect("paperId in response")
            .to_string()
    }

    /// Upload files as multipart `files` parts alongside a `paperId` part
    pub async fn upload(
        &self,
        token: &str,
        paper_id: &str,
        files: &[(&str, &str, &[u8])],
    ) -> TestResponse {
        self.upload_parts(token, Some(paper_id), files).await
    }

    /// Upload files, sending the `paperId` part only when given
    pub async fn upload_parts(
        &self,
        token: &str,
        paper_id: Option<&str>,
        files: &[(&str, &str, &[u8])],
    ) -> TestResponse {
        let mut body = Vec::new();
        if let Some(paper_id) = paper_id {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"paperId\"\r\n\r\n{paper_id}\r\n"
                )
                .as_bytes(),
            );
        }
        for (name, mime, data) in files {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\nContent-Type: {mime}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/upload/files")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}

fn token_of(response: &TestResponse) -> String {
    response.body["token"]
        .as_str()
        .expect("token in response")
        .to_string()
}
