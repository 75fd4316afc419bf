//! Core types for Ladle recipe records

mod recipe;

pub use recipe::{Recipe, RecipeDraft};
