//! Integration tests for paper submission, moderation, and downloads.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

const PDF: &[u8] = b"%PDF-1.4 fake paper body";

#[tokio::test]
async fn test_submission_moderation_and_download_flow() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    let admin = app.admin_token().await;

    let paper_id = app.create_paper(&user, "Maths 2023", "BSc").await;
    let uploaded = app
        .upload(
            &user,
            &paper_id,
            &[
                ("part1.pdf", "application/pdf", PDF),
                ("part2.txt", "text/plain", b"answers"),
            ],
        )
        .await;
    assert_eq!(uploaded.status, StatusCode::OK, "{:?}", uploaded.body);
    assert_eq!(uploaded.body["uploaded"], 2);

    // Pending papers stay out of the public approved listing.
    let public = app.request("GET", "/api/papers?approved=1", None, None).await;
    assert_eq!(public.body, json!([]));

    let queue = app.request("GET", "/api/admin/papers", None, Some(&admin)).await;
    assert_eq!(queue.body[0]["id"], paper_id.as_str());
    assert_eq!(queue.body[0]["uploader"], "Ann");
    assert_eq!(queue.body[0]["approved"], 0);

    let approved = app
        .request("POST", &format!("/api/admin/approve/{paper_id}"), None, Some(&admin))
        .await;
    assert_eq!(approved.body, json!({ "ok": true }));

    let public = app.request("GET", "/api/papers?approved=1", None, None).await;
    assert_eq!(public.body.as_array().map(Vec::len), Some(1));
    assert_eq!(public.body[0]["approved"], 1);

    let files = app
        .request("GET", &format!("/api/papers/{paper_id}/files"), None, None)
        .await;
    let pdf = files
        .body
        .as_array()
        .and_then(|all| all.iter().find(|f| f["originalname"] == "part1.pdf"))
        .cloned()
        .expect("pdf record");
    assert_eq!(pdf["mimetype"], "application/pdf");

    let file_id = pdf["id"].as_str().expect("file id");
    let download = app
        .request("GET", &format!("/api/file/{file_id}"), None, None)
        .await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.bytes, PDF);
    assert_eq!(download.headers["content-type"], "application/pdf");

    let top = app.request("GET", "/api/most-downloaded", None, None).await;
    assert_eq!(top.body[0]["id"], paper_id.as_str());
    assert_eq!(top.body[0]["downloads"], 1);
}

#[tokio::test]
async fn test_create_paper_requires_fields_and_sign_in() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    let body = json!({ "grp": "BSc", "year": "2023", "subject": "Physics" });

    let anonymous = app
        .request("POST", "/api/upload/create-paper", Some(body.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let missing_title = app
        .request("POST", "/api/upload/create-paper", Some(body), Some(&user))
        .await;
    assert_eq!(missing_title.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_to_unknown_paper_is_not_found() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;

    let unknown = app
        .upload(
            &user,
            "00000000-0000-4000-8000-000000000000",
            &[("a.pdf", "application/pdf", PDF)],
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .upload(&user, "42", &[("a.pdf", "application/pdf", PDF)])
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_without_paper_id_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    let files: &[(&str, &str, &[u8])] = &[("a.pdf", "application/pdf", PDF)];

    for paper_id in [Some(""), Some("   "), None] {
        let response = app.upload_parts(&user, paper_id, files).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{paper_id:?}");
        assert_eq!(response.body["ok"], false);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert_eq!(response.body["message"], "Missing paperId");
    }
    assert_eq!(std::fs::read_dir(app.upload_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_too_many_files() {
    let app = helpers::TestApp::with_config(|c| c.storage.max_files_per_upload = 1).await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    let paper_id = app.create_paper(&user, "Maths", "BSc").await;

    let response = app
        .upload(
            &user,
            &paper_id,
            &[("a.pdf", "application/pdf", PDF), ("b.pdf", "application/pdf", PDF)],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let files = app
        .request("GET", &format!("/api/papers/{paper_id}/files"), None, None)
        .await;
    assert_eq!(files.body, json!([]));
}

#[tokio::test]
async fn test_approve_is_idempotent_and_reports_missing() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    let admin = app.admin_token().await;
    let paper_id = app.create_paper(&user, "Maths", "BSc").await;

    for _ in 0..2 {
        let response = app
            .request("POST", &format!("/api/admin/approve/{paper_id}"), None, Some(&admin))
            .await;
        assert_eq!(response.body, json!({ "ok": true }));
    }

    let missing = app
        .request(
            "POST",
            "/api/admin/approve/00000000-0000-4000-8000-000000000000",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(missing.body, json!({ "ok": false }));

    let malformed = app
        .request("POST", "/api/admin/approve/abc", None, Some(&admin))
        .await;
    assert_eq!(malformed.body, json!({ "ok": false }));
}

#[tokio::test]
async fn test_reject_removes_paper_files_and_disk_contents() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    let admin = app.admin_token().await;
    let paper_id = app.create_paper(&user, "Maths", "BSc").await;
    let uploaded = app
        .upload(&user, &paper_id, &[("a.pdf", "application/pdf", PDF)])
        .await;
    let file_id = uploaded.body["files"][0]["id"]
        .as_str()
        .expect("file id")
        .to_string();
    let filepath = uploaded.body["files"][0]["filepath"]
        .as_str()
        .expect("filepath")
        .to_string();
    assert!(std::path::Path::new(&filepath).exists());

    let rejected = app
        .request("POST", &format!("/api/admin/reject/{paper_id}"), None, Some(&admin))
        .await;
    assert_eq!(rejected.body, json!({ "ok": true }));

    let all = app.request("GET", "/api/admin/papers", None, Some(&admin)).await;
    assert_eq!(all.body, json!([]));

    let download = app
        .request("GET", &format!("/api/file/{file_id}"), None, None)
        .await;
    assert_eq!(download.status, StatusCode::NOT_FOUND);
    assert!(!std::path::Path::new(&filepath).exists());

    let again = app
        .request("POST", &format!("/api/admin/reject/{paper_id}"), None, Some(&admin))
        .await;
    assert_eq!(again.body, json!({ "ok": false }));
}

#[tokio::test]
async fn test_download_unknown_file_is_not_found() {
    let app = helpers::TestApp::new().await;

    let unknown = app
        .request("GET", "/api/file/00000000-0000-4000-8000-000000000000", None, None)
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app.request("GET", "/api/file/xyz", None, None).await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_paper_list_filters() {
    let app = helpers::TestApp::new().await;
    let user = app.register("Ann", "ann@pqp.test", "secret").await;
    app.create_paper(&user, "Maths", "BSc").await;
    app.create_paper(&user, "Finance", "MBA").await;

    let bsc = app.request("GET", "/api/papers?grp=BSc", None, None).await;
    assert_eq!(bsc.body.as_array().map(Vec::len), Some(1));
    assert_eq!(bsc.body[0]["title"], "Maths");

    let everything = app
        .request("GET", "/api/papers?grp=&approved=", None, None)
        .await;
    assert_eq!(everything.body.as_array().map(Vec::len), Some(2));

    let pending = app.request("GET", "/api/papers?approved=0", None, None).await;
    assert_eq!(pending.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_approved_botany_paper_counts_downloads_per_paper() {
    let app = helpers::TestApp::new().await;
    let user = app.register("A", "a@pqp.test", "secret").await;
    let admin = app.admin_token().await;

    let created = app
        .request(
            "POST",
            "/api/upload/create-paper",
            Some(json!({
                "title": "Midterm",
                "grp": "BSc",
                "year": "1st Year",
                "semester": "Semester 1",
                "subject": "Botany"
            })),
            Some(&user),
        )
        .await;
    let paper_id = created.body["paperId"].as_str().expect("paperId").to_string();
    let uploaded = app
        .upload(
            &user,
            &paper_id,
            &[
                ("q.pdf", "application/pdf", PDF),
                ("a.pdf", "application/pdf", PDF),
            ],
        )
        .await;
    app.request("POST", &format!("/api/admin/approve/{paper_id}"), None, Some(&admin))
        .await;

    let query = "/api/papers?approved=1&subject=Botany";
    let listed = app.request("GET", query, None, None).await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));
    assert_eq!(listed.body[0]["title"], "Midterm");
    assert_eq!(listed.body[0]["downloads"], 0);

    let first = uploaded.body["files"][0]["id"].as_str().expect("id");
    app.request("GET", &format!("/api/file/{first}"), None, None).await;
    let listed = app.request("GET", query, None, None).await;
    assert_eq!(listed.body[0]["downloads"], 1);

    let second = uploaded.body["files"][1]["id"].as_str().expect("id");
    app.request("GET", &format!("/api/file/{second}"), None, None).await;
    let listed = app.request("GET", query, None, None).await;
    assert_eq!(listed.body[0]["downloads"], 2);
}
