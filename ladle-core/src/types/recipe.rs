//! The recipe record and its client-supplied draft form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recipe record
///
/// Serializes with the wire field names the API has always used
/// (`publishedAt`, lowercase everything else). The id and publish timestamp
/// are assigned by the store at creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Recipe name
    pub name: String,

    /// Tags, matched case-insensitively by search
    pub tags: Vec<String>,

    /// Ordered ingredient lines
    pub ingredients: Vec<String>,

    /// Ordered instruction steps
    pub instructions: Vec<String>,

    /// Set when the record is created, immutable thereafter
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new record from a client draft, assigning a fresh id and
    /// the current publish timestamp
    pub fn new(draft: RecipeDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            published_at: Utc::now(),
        }
    }

    /// Replace every client-editable field, keeping id and timestamp
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.tags = draft.tags;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
    }

    /// Whether any tag equals `term`, ignoring case
    pub fn has_tag(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.tags.iter().any(|tag| tag.to_lowercase() == term)
    }
}

/// The client-supplied portion of a recipe
///
/// Missing fields default to empty, matching the permissive decoding the API
/// has always had. Unknown keys (including a client-sent `id` or
/// `publishedAt`) are ignored; the store assigns both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
