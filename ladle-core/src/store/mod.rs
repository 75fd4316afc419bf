//! Record stores backing the recipe API

mod json_file;
mod memory;
mod redis;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use redis::RedisStore;

use crate::error::{StoreError, StoreResult};
use crate::types::{Recipe, RecipeDraft};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Abstract recipe store trait
///
/// Handlers hold the store as a trait object behind shared state. Lookup
/// by id is a keyed access in every backend, not a scan.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All records, order unspecified
    async fn list(&self) -> StoreResult<Vec<Recipe>>;

    /// Insert a new record built from the draft and return it
    ///
    /// The store assigns the id and the publish timestamp.
    async fn create(&self, draft: RecipeDraft) -> StoreResult<Recipe>;

    /// The record with the given id
    async fn get(&self, id: Uuid) -> StoreResult<Recipe>;

    /// Replace the client-editable fields of the record with the given id
    ///
    /// The id and publish timestamp stay as they were.
    async fn update(&self, id: Uuid, draft: RecipeDraft) -> StoreResult<Recipe>;

    /// Remove the record with the given id
    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// All records carrying `term` as a tag, compared case-insensitively
    async fn search_tag(&self, term: &str) -> StoreResult<Vec<Recipe>>;
}

/// Open the store named by a URL
///
/// `memory:` keeps records in the process, `file:<path>` snapshots them to a
/// JSON file, `redis://` (or `rediss://`) keeps them in a Redis hash.
pub async fn open(url: &str) -> StoreResult<Arc<dyn RecipeStore>> {
    if url == "memory:" || url == "memory" {
        info!("Opening in-memory recipe store");
        return Ok(Arc::new(MemoryStore::new()));
    }
    if let Some(path) = url.strip_prefix("file:") {
        info!("Opening JSON file recipe store at {}", path);
        return Ok(Arc::new(JsonFileStore::open(path).await?));
    }
    if url.starts_with("redis://") || url.starts_with("rediss://") {
        info!("Opening Redis recipe store");
        return Ok(Arc::new(RedisStore::connect(url).await?));
    }
    Err(StoreError::UnsupportedUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory() {
        let store = open("memory:").await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("file:{}", dir.path().join("recipes.json").display());
        let store = open(&url).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_unknown_scheme() {
        let err = open("postgres://nope").await.err().unwrap();
        assert!(matches!(err, StoreError::UnsupportedUrl(_)));
    }
}
