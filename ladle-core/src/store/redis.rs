//! Redis-backed recipe store
//!
//! Records live in a single hash: field = recipe id, value = the recipe
//! JSON document. The hash gives keyed lookup by id; the tag scan pulls
//! every document and filters client-side, same as the other backends.

use super::RecipeStore;
use crate::error::{StoreError, StoreResult};
use crate::types::{Recipe, RecipeDraft};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;
use uuid::Uuid;

/// Hash holding every recipe document
const RECIPES_KEY: &str = "ladle:recipes";

/// Recipe store backed by a Redis hash
///
/// `ConnectionManager` reconnects on its own and is cheap to clone, so each
/// operation takes its own handle.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connect to the Redis instance at `url`
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        info!("Connected to Redis recipe store");
        Ok(Self { manager })
    }

    fn decode(doc: &str) -> StoreResult<Recipe> {
        Ok(serde_json::from_str(doc)?)
    }
}

#[async_trait]
impl RecipeStore for RedisStore {
    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        let mut conn = self.manager.clone();
        let docs: Vec<String> = conn.hvals(RECIPES_KEY).await?;
        docs.iter().map(|doc| Self::decode(doc)).collect()
    }

    async fn create(&self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let recipe = Recipe::new(draft);
        let doc = serde_json::to_string(&recipe)?;
        let mut conn = self.manager.clone();
        conn.hset::<_, _, _, ()>(RECIPES_KEY, recipe.id.to_string(), doc)
            .await?;
        Ok(recipe)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Recipe> {
        let mut conn = self.manager.clone();
        let doc: Option<String> = conn.hget(RECIPES_KEY, id.to_string()).await?;
        match doc {
            Some(doc) => Self::decode(&doc),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn update(&self, id: Uuid, draft: RecipeDraft) -> StoreResult<Recipe> {
        // Read-modify-write; not atomic under concurrent writers.
        let mut recipe = self.get(id).await?;
        recipe.apply(draft);
        let doc = serde_json::to_string(&recipe)?;
        let mut conn = self.manager.clone();
        conn.hset::<_, _, _, ()>(RECIPES_KEY, id.to_string(), doc)
            .await?;
        Ok(recipe)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut conn = self.manager.clone();
        let removed: u64 = conn.hdel(RECIPES_KEY, id.to_string()).await?;
        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn search_tag(&self, term: &str) -> StoreResult<Vec<Recipe>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|recipe| recipe.has_tag(term))
            .collect())
    }
}
