// FICHIER : src-server/tests/content_store_suite/storage_contract.rs

use crate::init_test_env;
use epsilon::content_store::{CollectionStore, LoadOutcome};
use epsilon::utils::AppError;
use serde_json::json;

#[tokio::test]
async fn save_then_load_is_deep_equal() {
    let env = init_test_env();
    let collection = vec![
        json!({"id": 1, "title": "Maths", "faculty": ["R. Sharma"], "price": "₹2000"}),
        json!({"id": "dQw4w9WgXcQ", "thumbnail": null, "tags": {"level": [10, 11, 12]}}),
        json!({"id": 3.5, "ratio": -0.25, "ok": false}),
    ];

    env.store.save("courses", &collection).await.unwrap();
    assert_eq!(
        env.store.load("courses").await.unwrap(),
        LoadOutcome::Loaded(collection)
    );
}

#[tokio::test]
async fn never_saved_collection_is_missing_and_empty() {
    let env = init_test_env();
    let outcome = env.store.load("announcements").await.unwrap();
    assert!(outcome.is_missing());
    assert!(outcome.into_collection().is_empty());
    // La lecture ne crée rien
    assert!(!env.data_root.exists());
}

#[tokio::test]
async fn corrupted_file_reads_as_empty_without_error() {
    let env = init_test_env();
    for garbage in ["{\"id\": 1", "", "null", "{\"id\": 1}", "<html>"] {
        env.plant("gallery", garbage);
        let outcome = env.store.load("gallery").await.unwrap();
        assert!(outcome.is_corrupted(), "'{garbage}' devrait être Corrupted");
        assert!(outcome.into_collection().is_empty());
    }
}

#[tokio::test]
async fn save_writes_pretty_json_and_leaves_no_temp_file() {
    let env = init_test_env();
    env.store
        .save("downloads", &[json!({"id": 1, "title": "Syllabus"})])
        .await
        .unwrap();

    assert_eq!(
        env.raw("downloads").unwrap(),
        "[\n  {\n    \"id\": 1,\n    \"title\": \"Syllabus\"\n  }\n]"
    );
    let leftovers: Vec<_> = std::fs::read_dir(&env.data_root)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn save_overwrites_whole_collection() {
    let env = init_test_env();
    env.store
        .save("videos", &[json!({"id": "a"}), json!({"id": "b"})])
        .await
        .unwrap();
    env.store.save("videos", &[json!({"id": "c"})]).await.unwrap();

    assert_eq!(
        env.store.load("videos").await.unwrap().into_collection(),
        vec![json!({"id": "c"})]
    );
}

#[tokio::test]
async fn unreadable_path_is_an_io_error() {
    let env = init_test_env();
    // Un dossier à la place du fichier : ni absent ni corrompu
    std::fs::create_dir_all(env.file("courses")).unwrap();
    let res = env.store.load("courses").await;
    assert!(matches!(res, Err(AppError::Io(_))));
}

#[tokio::test]
async fn unsafe_names_are_rejected() {
    let env = init_test_env();
    for name in ["../courses", "a/b", "", "COURSES", "x.json"] {
        assert!(matches!(
            env.store.save(name, &[]).await,
            Err(AppError::Validation(_))
        ));
    }
    assert!(!env.data_root.exists());
}
