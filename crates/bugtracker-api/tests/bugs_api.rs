use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use bugtracker_api::{routes, ApiState, ServerConfig};
use bugtracker_core::{Bug, BugStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(store: BugStore, config: ServerConfig) -> Router {
    routes::create_router(ApiState::new(store, config))
}

fn app() -> Router {
    app_with(BugStore::new(), ServerConfig::default())
}

async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(body) => {
            send_raw(
                app,
                method,
                uri,
                Some("application/json"),
                Body::from(body.to_string()),
            )
            .await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    }
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_create_bug() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/bugs",
        Some(json!({ "title": "New bug", "description": "Details" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "1");
    assert_eq!(body["title"], "New bug");
    assert_eq!(body["description"], "Details");
    assert_eq!(body["status"], "open");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_defaults_description() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/bugs",
        Some(json!({ "title": "No details" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn test_create_rejects_short_title() {
    let (status, body) = send(&app(), "POST", "/api/bugs", Some(json!({ "title": "hi" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": ["Title must be at least 3 characters long"] })
    );
}

#[tokio::test]
async fn test_create_reports_every_rule() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/bugs",
        Some(json!({ "title": 42, "description": "a".repeat(1001) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "Title must be at least 3 characters long",
            "Description is too long"
        ])
    );
}

#[tokio::test]
async fn test_create_without_body() {
    let (status, body) = send(&app(), "POST", "/api/bugs", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0], "Title must be at least 3 characters long");
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = app();

    send(&app, "POST", "/api/bugs", Some(json!({ "title": "Bug A" }))).await;
    send(&app, "POST", "/api/bugs", Some(json!({ "title": "Bug B" }))).await;

    let (status, body) = send(&app, "GET", "/api/bugs", None).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|bug| bug["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Bug B", "Bug A"]);
}

#[tokio::test]
async fn test_list_seeded_store() {
    let store = BugStore::new();
    store
        .reset(vec![Bug::new(
            "41".to_string(),
            "Seeded bug".to_string(),
            String::new(),
        )])
        .await;
    let app = app_with(store, ServerConfig::default());

    let (_, body) = send(&app, "GET", "/api/bugs", None).await;
    assert_eq!(body[0]["id"], "41");

    let (_, created) = send(&app, "POST", "/api/bugs", Some(json!({ "title": "After seed" }))).await;
    assert_eq!(created["id"], "42");
}

#[tokio::test]
async fn test_update_status() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/bugs", Some(json!({ "title": "Bug B" }))).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/bugs/{id}"),
        Some(json!({ "status": "resolved" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "resolved");
    assert_eq!(body["title"], "Bug B");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_ignores_unknown_and_non_string_fields() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/bugs", Some(json!({ "title": "Sticky" }))).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/bugs/{id}"),
        Some(json!({ "title": 7, "id": "99", "priority": "high" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_update_validates_supplied_fields() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/bugs", Some(json!({ "title": "Valid" }))).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/bugs/{id}"),
        Some(json!({ "title": " x ", "status": "closed" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "Title must be at least 3 characters long",
            "Status must be one of: open, in-progress, resolved"
        ])
    );

    let (_, list) = send(&app, "GET", "/api/bugs", None).await;
    assert_eq!(list[0]["title"], "Valid");
}

#[tokio::test]
async fn test_update_missing_bug() {
    let (status, body) = send(
        &app(),
        "PATCH",
        "/api/bugs/999",
        Some(json!({ "status": "open" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Bug not found" }));
}

#[tokio::test]
async fn test_delete_missing_bug() {
    let (status, body) = send(&app(), "DELETE", "/api/bugs/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Bug not found");
}

#[tokio::test]
async fn test_bug_lifecycle() {
    let app = app();

    let (status, created) = send(&app, "POST", "/api/bugs", Some(json!({ "title": "Fix login" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "open");
    let uri = format!("/api/bugs/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(&app, "PATCH", &uri, Some(json!({ "status": "resolved" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "resolved");

    let (status, deleted) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "status": "open" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_goes_to_error_handler() {
    let (status, body) = send_raw(
        &app(),
        "POST",
        "/api/bugs",
        Some("application/json"),
        Body::from("{\"title\":"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body.get("stack").is_none());
}

#[tokio::test]
async fn test_scalar_json_goes_to_error_handler() {
    let (status, body) = send_raw(
        &app(),
        "POST",
        "/api/bugs",
        Some("application/json"),
        Body::from(r#""hello""#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_body_without_content_type_is_ignored() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/bugs", Some(json!({ "title": "Untyped" }))).await;
    let uri = format!("/api/bugs/{}", created["id"].as_str().unwrap());

    let (status, body) = send_raw(
        &app,
        "PATCH",
        &uri,
        None,
        Body::from(json!({ "status": "resolved" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "open");
}

#[tokio::test]
async fn test_development_mode_includes_stack() {
    let app = app_with(BugStore::new(), ServerConfig::development());

    let (status, body) = send_raw(
        &app,
        "POST",
        "/api/bugs",
        Some("application/json"),
        Body::from("{oops}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["stack"].is_string());
}

async fn boom() -> &'static str {
    panic!("Boom")
}

#[tokio::test]
async fn test_panics_become_500() {
    let router = Router::new().route("/boom", get(boom));

    let production = routes::with_error_handling(router.clone(), Arc::new(ServerConfig::default()));
    let (status, body) = send(&production, "GET", "/boom", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Boom" }));

    let development = routes::with_error_handling(router, Arc::new(ServerConfig::development()));
    let (status, body) = send(&development, "GET", "/boom", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Boom");
    assert!(body["stack"].as_str().unwrap().contains("Boom"));
}
