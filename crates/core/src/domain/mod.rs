// Domain Layer - Pure business logic and entities

pub mod error;
pub mod recipe;

// Re-exports
pub use error::DomainError;
pub use recipe::{Recipe, RecipeDraft, RecipeId};
