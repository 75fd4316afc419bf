//! Ladle Core Library
//!
//! This crate provides the record type and store abstraction for the Ladle
//! recipe service. Handlers only ever talk to a [`store::RecipeStore`] trait
//! object; the concrete backend (in-memory map, JSON file snapshot, or a
//! Redis document collection) is picked at startup from a store URL.

pub mod error;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use store::RecipeStore;
pub use types::{Recipe, RecipeDraft};
