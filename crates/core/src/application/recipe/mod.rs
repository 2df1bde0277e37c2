// Recipe Service - Core use cases for recipe management

pub mod create;
pub mod delete;
pub mod update;

use crate::domain::{Recipe, RecipeDraft, RecipeId};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, RecipeRepository, TimeProvider};
use std::sync::Arc;

/// Recipe Service
///
/// Owns no state of its own; the repository it is handed is the single
/// source of truth for the process (or the test fixture that built it).
#[derive(Clone)]
pub struct RecipeService {
    repo: Arc<dyn RecipeRepository>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl RecipeService {
    pub fn new(
        repo: Arc<dyn RecipeRepository>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            repo,
            id_provider,
            time_provider,
        }
    }

    /// Create a recipe with a fresh ID and publish time
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe> {
        create::execute(
            self.repo.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            draft,
        )
        .await
    }

    /// All recipes in insertion order
    pub async fn list(&self) -> Result<Vec<Recipe>> {
        self.repo.list().await
    }

    /// Recipes tagged with `tag` (ASCII case-insensitive). Empty is not an error.
    pub async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>> {
        self.repo.find_by_tag(tag).await
    }

    /// Get a single recipe
    pub async fn get(&self, id: &RecipeId) -> Result<Recipe> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    /// Replace all fields except `id` and `publishedAt`
    pub async fn update(&self, id: &RecipeId, draft: RecipeDraft) -> Result<Recipe> {
        update::execute(self.repo.as_ref(), id, draft).await
    }

    /// Remove a recipe
    pub async fn delete(&self, id: &RecipeId) -> Result<()> {
        delete::execute(self.repo.as_ref(), id).await
    }

    /// Number of stored recipes
    pub async fn count(&self) -> Result<usize> {
        self.repo.count().await
    }
}
