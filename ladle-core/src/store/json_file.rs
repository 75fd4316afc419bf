//! JSON-file-backed recipe store

use super::RecipeStore;
use crate::error::{StoreError, StoreResult};
use crate::types::{Recipe, RecipeDraft};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Recipe store that snapshots a keyed map to a JSON file
///
/// The snapshot is a JSON array of records. Reads are served from memory;
/// every mutation rewrites the file. Writes go to a temp file in the same
/// directory and rename into place, so a crash never leaves a partial
/// snapshot behind.
pub struct JsonFileStore {
    path: PathBuf,
    recipes: RwLock<HashMap<Uuid, Recipe>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading the existing snapshot
    ///
    /// A missing file starts the store empty. The parent directory is
    /// created if it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let recipes = match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                let records: Vec<Recipe> = serde_json::from_str(&data)?;
                records.into_iter().map(|r| (r.id, r)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            recipes: RwLock::new(recipes),
        })
    }

    /// Write the snapshot atomically: temp file first, then rename
    async fn save(&self, recipes: &HashMap<Uuid, Recipe>) -> StoreResult<()> {
        let records: Vec<&Recipe> = recipes.values().collect();
        let data = serde_json::to_string_pretty(&records)?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for JsonFileStore {
    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        Ok(self.recipes.read().await.values().cloned().collect())
    }

    async fn create(&self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let recipe = Recipe::new(draft);
        let mut recipes = self.recipes.write().await;
        recipes.insert(recipe.id, recipe.clone());
        self.save(&recipes).await?;
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
        let updated = recipe.clone();
        self.save(&recipes).await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut recipes = self.recipes.write().await;
        recipes.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.save(&recipes).await?;
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("recipes.json"))
            .await
            .unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let store = JsonFileStore::open(&path).await.unwrap();

        store.create(RecipeDraft::default()).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = JsonFileStore::open(&path).await.err().unwrap();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
