//! Recipe CRUD handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use ladle_core::{Recipe, RecipeDraft};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameters for tag search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Tag to match, case-insensitively
    pub tag: Option<String>,
}

/// Body of the delete response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Parse a path id; an id that is not a UUID can never match a record
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(format!("Recipe not found: {}", id)))
}

/// Unwrap a JSON body, mapping every rejection to a 400
fn require_draft(body: Result<Json<RecipeDraft>, JsonRejection>) -> Result<RecipeDraft, ApiError> {
    match body {
        Ok(Json(draft)) => Ok(draft),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

/// List all recipes
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

/// Create a recipe from the request body
///
/// The store assigns the id and publish timestamp; anything the client
/// sends for either is ignored.
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let draft = require_draft(body)?;
    let recipe = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get one recipe by id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.store.get(id).await?))
}

/// Replace the client-editable fields of a recipe
///
/// Bound to both PUT and PATCH. The id and publish timestamp survive the
/// update untouched.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_id(&id)?;
    let draft = require_draft(body)?;
    Ok(Json(state.store.update(id, draft).await?))
}

/// Delete a recipe by id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "recipe deleted",
    }))
}

/// Search recipes by tag
///
/// Zero matches answer 404, mirroring get-by-id on an unknown record.
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let tag = match query.tag.as_deref() {
        Some(tag) if !tag.is_empty() => tag,
        _ => {
            return Err(ApiError::BadRequest(
                "Missing search parameter: tag".to_string(),
            ))
        }
    };

    let matches = state.store.search_tag(tag).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound(format!("No recipe is tagged {}", tag)));
    }
    Ok(Json(matches))
}
