use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use exemptlog::config::Config;
use exemptlog::core::SubmissionService;
use exemptlog::roster::{Roster, RosterHandle};
use exemptlog::server::router;
use exemptlog::utils::DateKey;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

fn service_for(root: &Path, lists: &Path) -> Arc<SubmissionService> {
    let cfg = Config {
        lists_dir: lists.to_string_lossy().to_string(),
        static_dir: root.to_string_lossy().to_string(),
        ..Config::default()
    };
    let roster = Roster::from_reader("App ID,Name,Year,Role\n101,Ananya Rao,2nd,Avionics Lead\n".as_bytes())
        .expect("roster");
    Arc::new(SubmissionService::new(&cfg, Arc::new(RosterHandle::loaded(roster))))
}

fn submit_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn sample_payload(reason: &str) -> Value {
    json!({
        "personal": { "name": "A", "app_id": "101" },
        "reason": reason,
        "lectures": [
            { "course": "C1", "faculty": "F1", "startTime": "09:00", "endTime": "10:00" },
            { "course": "C2", "faculty": "F2", "startTime": "10:00", "endTime": "11:00" }
        ]
    })
}

#[tokio::test]
async fn test_submit_saves_request_and_updates_spreadsheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let lists = dir.path().join("lists");
    let service = service_for(dir.path(), &lists);
    let app = router(service.clone(), dir.path());
    let today = DateKey::today();

    let resp = app
        .clone()
        .oneshot(submit_request(&sample_payload("first")))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "success": true, "message": "Request saved and Excel updated" })
    );

    let resp = app
        .oneshot(submit_request(&sample_payload("second")))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = service.store().read_all(&today).expect("daily log");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].reason(), "first");
    assert_eq!(stored[1].reason(), "second");
    assert!(stored[0].id <= stored[1].id);

    let raw: Value =
        serde_json::from_str(&fs::read_to_string(service.store().log_path(&today)).unwrap())
            .unwrap();
    assert!(raw[0]["submittedAt"].is_string());
    assert_eq!(raw[0]["lectures"][1]["startTime"], "10:00");

    let xlsx = fs::read(service.xlsx_path(&today)).expect("daily spreadsheet");
    assert!(xlsx.starts_with(b"PK"));
}

#[tokio::test]
async fn test_submit_accepts_non_string_form_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let lists = dir.path().join("lists");
    let service = service_for(dir.path(), &lists);
    let app = router(service.clone(), dir.path());
    let today = DateKey::today();

    let body = json!({
        "personal": { "name": "A", "app_id": 101 },
        "reason": null,
        "lectures": [
            { "course": "C1", "faculty": "F1", "startTime": "09:00", "endTime": "10:00" }
        ]
    });
    let resp = app.oneshot(submit_request(&body)).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = service.store().read_all(&today).expect("daily log");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].app_id(), "101");
    assert_eq!(stored[0].reason(), "");
    assert!(service.xlsx_path(&today).exists());
}

#[tokio::test]
async fn test_submit_failure_is_a_generic_500() {
    let dir = tempfile::tempdir().expect("tempdir");
    // lists dir is a regular file: every write fails
    let lists = dir.path().join("lists");
    fs::write(&lists, "not a directory").unwrap();
    let app = router(service_for(dir.path(), &lists), dir.path());

    let resp = app
        .oneshot(submit_request(&sample_payload("r")))
        .await
        .expect("response");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Failed to process request" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let lists = dir.path().join("lists");
    let service = service_for(dir.path(), &lists);
    let app = router(service.clone(), dir.path());
    let today = DateKey::today();

    let req = Request::builder()
        .method("POST")
        .uri("/submit")
        .header("content-type", "application/json")
        .body(Body::from("{\"personal\": "))
        .unwrap();
    let resp = app.oneshot(req).await.expect("response");

    assert!(resp.status().is_client_error());
    assert!(!service.store().exists(&today));
}

#[tokio::test]
async fn test_static_form_is_served() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), "<form id=\"exemption-form\"></form>").unwrap();
    let lists = dir.path().join("lists");
    let app = router(service_for(dir.path(), &lists), dir.path());

    let req = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("response");

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("exemption-form"));
}
