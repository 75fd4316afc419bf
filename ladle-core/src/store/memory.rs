//! In-memory recipe store

use super::RecipeStore;
use crate::error::{StoreError, StoreResult};
use crate::types::{Recipe, RecipeDraft};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Recipe store backed by a process-local map keyed by id
///
/// The map lives behind an async `RwLock`; read-modify-write sequences
/// serialize on the write lock.
#[derive(Default)]
pub struct MemoryStore {
    recipes: RwLock<HashMap<Uuid, Recipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        Ok(self.recipes.read().await.values().cloned().collect())
    }

    async fn create(&self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let recipe = Recipe::new(draft);
        self.recipes
            .write()
            .await
            .insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Recipe> {
        self.recipes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: Uuid, draft: RecipeDraft) -> StoreResult<Recipe> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        recipe.apply(draft);
        Ok(recipe.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.recipes
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn search_tag(&self, term: &str) -> StoreResult<Vec<Recipe>> {
        Ok(self
            .recipes
            .read()
            .await
            .values()
            .filter(|recipe| recipe.has_tag(term))
            .cloned()
            .collect())
    }
}
