//! Behavioral tests for the recipe store backends
//!
//! The same lifecycle properties run against the in-memory and JSON-file
//! backends through the `RecipeStore` trait. The Redis backend runs the
//! round-trip only when a real instance is available (`REDIS_URL` set,
//! `cargo test -- --ignored`).

use chrono::Utc;
use ladle_core::store::{JsonFileStore, MemoryStore, RecipeStore, RedisStore};
use ladle_core::{RecipeDraft, StoreError};
use uuid::Uuid;

fn draft(name: &str, tags: &[&str]) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: vec!["flour".to_string(), "water".to_string()],
        instructions: vec!["Mix".to_string(), "Bake".to_string()],
    }
}

async fn check_crud_properties(store: &dyn RecipeStore) {
    let before = Utc::now();

    // Create assigns a fresh id and a timestamp no earlier than the request
    let first = store.create(draft("Flatbread", &["bread"])).await.unwrap();
    assert!(!first.id.is_nil());
    assert!(first.published_at >= before);

    let second = store
        .create(draft("Focaccia", &["Bread", "italian"]))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    // List returns everything created so far
    let all = store.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|r| r.id == first.id));
    assert!(all.iter().any(|r| r.id == second.id));

    // Unknown ids signal NotFound
    assert!(matches!(
        store.get(Uuid::new_v4()).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.update(Uuid::new_v4(), draft("Nope", &[])).await,
        Err(StoreError::NotFound(_))
    ));

    // Update replaces the draft fields but keeps id and timestamp
    let updated = store
        .update(first.id, draft("Naan", &["bread", "indian"]))
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.published_at, first.published_at);
    assert_eq!(updated.name, "Naan");
    assert_eq!(updated.tags, vec!["bread", "indian"]);
    assert_eq!(store.get(first.id).await.unwrap().name, "Naan");

    // Tag search is case-insensitive equality, not substring match
    let hits = store.search_tag("BREAD").await.unwrap();
    assert_eq!(hits.len(), 2);
    let hits = store.search_tag("Italian").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, second.id);
    assert!(store.search_tag("brea").await.unwrap().is_empty());
    assert!(store.search_tag("soup").await.unwrap().is_empty());

    // Delete removes the record; a second delete signals NotFound
    store.delete(second.id).await.unwrap();
    assert!(matches!(
        store.get(second.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.delete(second.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_memory_store_properties() {
    let store = MemoryStore::new();
    check_crud_properties(&store).await;
}

#[tokio::test]
async fn test_json_file_store_properties() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("recipes.json"))
        .await
        .unwrap();
    check_crud_properties(&store).await;
}

#[tokio::test]
async fn test_json_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");

    let created = {
        let store = JsonFileStore::open(&path).await.unwrap();
        store
            .create(draft("Granola", &["breakfast"]))
            .await
            .unwrap()
    };

    let store = JsonFileStore::open(&path).await.unwrap();
    let found = store.get(created.id).await.unwrap();
    assert_eq!(found, created);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

/// Round-trip against a real Redis instance:
/// `REDIS_URL=redis://127.0.0.1 cargo test -- --ignored`
#[tokio::test]
#[ignore]
async fn test_redis_store_round_trip() {
    let url = std::env::var("REDIS_URL").expect("REDIS_URL must be set for this test");
    let store = RedisStore::connect(&url).await.unwrap();

    let created = store.create(draft("Congee", &["rice"])).await.unwrap();
    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let hits = store.search_tag("RICE").await.unwrap();
    assert!(hits.iter().any(|r| r.id == created.id));

    store.delete(created.id).await.unwrap();
    assert!(matches!(
        store.get(created.id).await,
        Err(StoreError::NotFound(_))
    ));
}
