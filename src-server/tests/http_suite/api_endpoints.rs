// FICHIER : src-server/tests/http_suite/api_endpoints.rs

use crate::init_http_env;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_reports_service() {
    let env = init_http_env();
    let (status, body) = env.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "service": "epsilon-content"}));
}

#[tokio::test]
async fn get_of_never_written_resource_is_empty_array() {
    let env = init_http_env();
    let (status, body) = env.get("/api/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(!env.data_root.exists());
}

#[tokio::test]
async fn get_of_corrupted_resource_is_empty_array() {
    let env = init_http_env();
    std::fs::create_dir_all(&env.data_root).unwrap();
    std::fs::write(env.data_root.join("videos.json"), "{ nope").unwrap();

    let (status, body) = env.get("/api/videos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_resource_is_404() {
    let env = init_http_env();
    let (status, body) = env.get("/api/teachers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));

    let (status, _) = env.post("/api/teachers", r#"{"action":"create"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn active_query_filters_and_sorts() {
    let env = init_http_env();
    let images = json!({"action": "sync", "images": [
        {"id": 1, "src": "/a.jpg", "order": 2, "active": true},
        {"id": 2, "src": "/b.jpg", "order": 1, "active": false},
        {"id": 3, "src": "/c.jpg", "order": 1}
    ]});
    let (status, _) = env.post("/api/gallery", &images.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = env.get("/api/gallery").await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, active) = env.get("/api/gallery?active=true").await;
    let ids: Vec<i64> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1]);
}
