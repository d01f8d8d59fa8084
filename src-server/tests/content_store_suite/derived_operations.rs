// FICHIER : src-server/tests/content_store_suite/derived_operations.rs

use crate::init_test_env;
use epsilon::content_store::{CollectionStore, RecordId, ResourceKind};
use epsilon::utils::AppError;
use serde_json::{json, Value};

fn titles(records: &[Value]) -> Vec<&str> {
    records.iter().filter_map(|r| r["title"].as_str()).collect()
}

#[tokio::test]
async fn append_grows_by_one_and_keeps_prior_order() {
    let env = init_test_env();
    let prior = vec![
        json!({"id": 1, "title": "A", "description": "a"}),
        json!({"id": 2, "title": "B", "description": "b"}),
    ];
    env.store.save("courses", &prior).await.unwrap();

    let stored = env
        .manager
        .append(
            ResourceKind::Courses,
            json!({"title": "C", "description": "c", "id": 2}),
        )
        .await
        .unwrap();

    let after = env.manager.list(ResourceKind::Courses).await.unwrap();
    assert_eq!(after.len(), prior.len() + 1);
    assert_eq!(&after[..2], &prior[..]);
    assert_eq!(after[2], stored);
    // L'identifiant fourni est remplacé par un identifiant fabriqué
    assert!(stored["id"].as_i64().unwrap() > 1_600_000_000_000);
}

#[tokio::test]
async fn videos_are_added_at_the_front_with_string_ids() {
    let env = init_test_env();
    for title in ["Un", "Deux", "Trois"] {
        env.manager
            .append(ResourceKind::CourseVideos, json!({"title": title}))
            .await
            .unwrap();
    }

    let videos = env.manager.list(ResourceKind::CourseVideos).await.unwrap();
    assert_eq!(titles(&videos), vec!["Trois", "Deux", "Un"]);
    assert!(videos.iter().all(|v| v["id"].is_string()));

    let mut ids: Vec<&str> = videos.iter().map(|v| v["id"].as_str().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn delete_by_id_keeps_the_rest_in_order() {
    let env = init_test_env();
    env.store
        .save(
            "downloads",
            &[
                json!({"id": 1, "title": "A"}),
                json!({"id": 2, "title": "B"}),
                json!({"id": 3, "title": "C"}),
            ],
        )
        .await
        .unwrap();

    let removed = env
        .manager
        .delete_by_id(ResourceKind::Downloads, &RecordId::Int(2))
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let ids: Vec<Value> = env
        .manager
        .list(ResourceKind::Downloads)
        .await
        .unwrap()
        .iter()
        .map(|r| r["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(1), json!(3)]);
}

#[tokio::test]
async fn delete_uses_strict_id_equality() {
    let env = init_test_env();
    env.store
        .save("videos", &[json!({"id": "1", "title": "chaîne"}), json!({"id": 1, "title": "nombre"})])
        .await
        .unwrap();

    let removed = env
        .manager
        .delete_by_id(ResourceKind::Videos, &RecordId::from("1"))
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(
        titles(&env.manager.list(ResourceKind::Videos).await.unwrap()),
        vec!["nombre"]
    );
}

#[tokio::test]
async fn delete_without_match_still_writes_the_file() {
    let env = init_test_env();
    let removed = env
        .manager
        .delete_by_id(ResourceKind::Courses, &RecordId::Int(42))
        .await
        .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(env.raw("courses").as_deref(), Some("[]"));
}

#[tokio::test]
async fn update_replaces_exactly_one_record() {
    let env = init_test_env();
    let original = vec![
        json!({"id": 10, "title": "A", "description": "a", "price": "100"}),
        json!({"id": 11, "title": "B", "description": "b"}),
        json!({"id": 12, "title": "C", "description": "c"}),
    ];
    env.store.save("courses", &original).await.unwrap();

    let replacement = json!({"id": 11, "title": "B2", "description": "nouvelle"});
    let stored = env
        .manager
        .update_by_id(ResourceKind::Courses, replacement.clone())
        .await
        .unwrap();
    assert_eq!(stored, replacement);

    let after = env.manager.list(ResourceKind::Courses).await.unwrap();
    assert_eq!(after[0], original[0]);
    assert_eq!(after[1], replacement);
    assert_eq!(after[2], original[2]);
    // Remplacement complet : pas de fusion des anciens champs
    assert!(after[1].get("price").is_none());
}

#[tokio::test]
async fn update_of_unknown_id_writes_nothing() {
    let env = init_test_env();
    env.store
        .save("courses", &[json!({"id": 1, "title": "A", "description": "a"})])
        .await
        .unwrap();
    let before = env.raw("courses");

    let err = env
        .manager
        .update_by_id(
            ResourceKind::Courses,
            json!({"id": 2, "title": "X", "description": "x"}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(env.raw("courses"), before);
}

#[tokio::test]
async fn sync_discards_prior_state() {
    let env = init_test_env();
    env.store
        .save("videos", &[json!({"id": "old", "title": "Ancienne"})])
        .await
        .unwrap();

    let replacement = vec![
        json!({"id": "yt1", "title": "Nouvelle 1", "videoId": "yt1"}),
        json!({"id": "yt2", "title": "Nouvelle 2", "videoId": "yt2"}),
    ];
    let count = env
        .manager
        .replace_all(ResourceKind::Videos, replacement.clone())
        .await
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        env.store.load("videos").await.unwrap().into_collection(),
        replacement
    );

    // Sync vide : collection vidée
    env.manager
        .replace_all(ResourceKind::Videos, vec![])
        .await
        .unwrap();
    assert!(env.manager.list(ResourceKind::Videos).await.unwrap().is_empty());
}

#[tokio::test]
async fn reorder_then_public_view() {
    let env = init_test_env();
    env.store
        .save(
            "announcements",
            &[
                json!({"id": 1, "text": "Un", "order": 1, "active": true}),
                json!({"id": 2, "text": "Deux", "order": 2, "active": false}),
                json!({"id": 3, "text": "Trois", "order": 3, "active": true}),
            ],
        )
        .await
        .unwrap();

    env.manager
        .reorder(ResourceKind::Announcements, &[RecordId::Int(3), RecordId::Int(2)])
        .await
        .unwrap();

    let texts: Vec<Value> = env
        .manager
        .list_active(ResourceKind::Announcements)
        .await
        .unwrap()
        .iter()
        .map(|r| r["text"].clone())
        .collect();
    assert_eq!(texts, vec![json!("Trois"), json!("Un")]);

    let orders: Vec<Value> = env
        .manager
        .list(ResourceKind::Announcements)
        .await
        .unwrap()
        .iter()
        .map(|r| json!([r["id"], r["order"]]))
        .collect();
    assert_eq!(orders, vec![json!([3, 1]), json!([2, 2]), json!([1, 3])]);
}

#[tokio::test]
async fn append_on_corrupted_collection_starts_fresh() {
    let env = init_test_env();
    env.plant("hero-images", "[{\"id\": 1, \"src\": ");

    let rec = env
        .manager
        .append(ResourceKind::HeroImages, json!({"src": "/porsche.jpg", "order": 1}))
        .await
        .unwrap();
    assert_eq!(rec["id"], json!(1));
    assert_eq!(env.manager.list(ResourceKind::HeroImages).await.unwrap(), vec![rec]);
}
