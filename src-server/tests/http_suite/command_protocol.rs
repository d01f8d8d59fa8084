// FICHIER : src-server/tests/http_suite/command_protocol.rs

use crate::init_http_env;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn course_create_update_delete_over_http() {
    let env = init_http_env();

    let (status, created) = env
        .post(
            "/api/courses",
            &json!({"action": "create", "course": {
                "title": "Mathématiques 12", "description": "Programme CBSE",
                "icon": "🧮", "faculty": ["R. Sharma"], "features": ["Tests hebdo"]
            }})
            .to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], json!(true));
    let id = created["course"]["id"].clone();
    assert!(id.is_i64());

    let mut course = created["course"].clone();
    course["title"] = json!("Mathématiques 12 (2025)");
    let (status, updated) = env
        .post(
            "/api/courses",
            &json!({"action": "update", "course": course}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["course"]["title"], json!("Mathématiques 12 (2025)"));

    let (_, listed) = env.get("/api/courses").await;
    assert_eq!(listed, json!([course]));

    let (status, deleted) = env
        .post("/api/courses", &json!({"action": "delete", "id": id}).to_string())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"success": true, "removed": 1}));
    assert_eq!(env.get("/api/courses").await.1, json!([]));
}

#[tokio::test]
async fn invalid_action_replies_and_touches_nothing() {
    let env = init_http_env();
    for body in [
        r#"{"action":"explode"}"#,
        r#"{"video":{"title":"sans action"}}"#,
        r#"{"action":"reorder","ids":[1]}"#,
    ] {
        let (status, reply) = env.post("/api/videos", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply, json!({"success": false, "message": "Invalid action"}));
    }
    assert!(!env.data_root.join("videos.json").exists());
}

#[tokio::test]
async fn malformed_json_is_a_protocol_failure() {
    let env = init_http_env();
    let (status, reply) = env.post("/api/courses", "{ not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["success"], json!(false));
    assert!(reply["message"].as_str().unwrap().contains("JSON"));
}

#[tokio::test]
async fn validation_failures_are_400_and_unknown_update_is_404() {
    let env = init_http_env();

    let (status, reply) = env
        .post(
            "/api/courses",
            &json!({"action": "create", "course": {"title": "sans description"}}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["success"], json!(false));

    let (status, _) = env
        .post(
            "/api/courses",
            &json!({"action": "update", "course": {"id": 5, "title": "T", "description": "D"}})
                .to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!env.data_root.join("courses.json").exists());
}

#[tokio::test]
async fn video_sync_and_reorder_counts() {
    let env = init_http_env();
    let (status, reply) = env
        .post(
            "/api/course-videos",
            &json!({"action": "sync", "videos": [
                {"id": "yt-a", "title": "A", "videoId": "yt-a", "thumbnail": "https://img/a.jpg"},
                {"id": "yt-b", "title": "B", "videoId": "yt-b", "thumbnail": "https://img/b.jpg"}
            ]})
            .to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["count"], json!(2));
    assert_eq!(reply["videos"][1]["id"], json!("yt-b"));

    env.post(
        "/api/hero-images",
        &json!({"action": "sync", "images": [
            {"id": 1, "src": "/a.jpg", "order": 1},
            {"id": 2, "src": "/b.jpg", "order": 2}
        ]})
        .to_string(),
    )
    .await;
    let (status, reply) = env
        .post(
            "/api/hero-images",
            &json!({"action": "reorder", "ids": [2, 1]}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({"success": true, "count": 2}));

    let (_, hero) = env.get("/api/hero-images?active=true").await;
    assert_eq!(hero[0]["id"], json!(2));
}

#[tokio::test]
async fn contact_form_submission_is_create_only() {
    let env = init_http_env();
    let message = json!({"name": "Asha", "email": "a@example.com", "phone": "+91 1", "message": "Horaires ?"});

    let (status, reply) = env
        .post(
            "/api/contact-messages",
            &json!({"action": "create", "message": message}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["message"]["name"], json!("Asha"));

    let (status, reply) = env
        .post(
            "/api/contact-messages",
            &json!({"action": "delete", "id": reply["message"]["id"]}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["message"], json!("Invalid action"));
}
