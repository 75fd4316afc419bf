//! Application state

use crate::config::Config;
use anyhow::Result;
use ladle_core::store::{self, RecipeStore};
use std::sync::Arc;

/// Shared application state
///
/// Handlers receive the record store through this state rather than any
/// process-wide global; the trait object hides which backend is running.
#[derive(Clone)]
pub struct AppState {
    /// Record store for recipes
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    /// Create application state from configuration
    pub async fn new(config: &Config) -> Result<Self> {
        let store = store::open(&config.store_url).await?;
        Ok(Self { store })
    }
}
