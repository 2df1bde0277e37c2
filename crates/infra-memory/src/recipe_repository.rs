// In-Memory RecipeRepository Implementation

use async_trait::async_trait;
use recipebook_core::domain::{Recipe, RecipeDraft, RecipeId};
use recipebook_core::error::Result;
use recipebook_core::port::RecipeRepository;
use tokio::sync::RwLock;
use tracing::debug;

/// Recipe store backed by a `Vec` behind a single lock.
///
/// Reads take the shared lock, writes the exclusive one. Every trait method
/// acquires the lock exactly once, so lookup-then-mutate in `update` and
/// `delete` is atomic with respect to other callers.
#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `recipes` (kept in the given order)
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn insert(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        recipes.push(recipe.clone());

        debug!(recipe_id = %recipe.id, count = recipes.len(), "Inserted recipe");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.read().await.clone())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        let found: Vec<Recipe> = recipes.iter().filter(|r| r.has_tag(tag)).cloned().collect();

        debug!(tag = %tag, matches = found.len(), "Searched recipes by tag");
        Ok(found)
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().find(|r| &r.id == id).cloned())
    }

    async fn update(&self, id: &RecipeId, draft: RecipeDraft) -> Result<Option<Recipe>> {
        let mut recipes = self.recipes.write().await;

        let Some(recipe) = recipes.iter_mut().find(|r| &r.id == id) else {
            return Ok(None);
        };
        recipe.apply(draft);

        debug!(recipe_id = %id, "Updated recipe");
        Ok(Some(recipe.clone()))
    }

    async fn delete(&self, id: &RecipeId) -> Result<Option<Recipe>> {
        let mut recipes = self.recipes.write().await;

        let Some(pos) = recipes.iter().position(|r| &r.id == id) else {
            return Ok(None);
        };
        // Vec::remove shifts the tail, preserving relative order
        let removed = recipes.remove(pos);

        debug!(recipe_id = %id, count = recipes.len(), "Deleted recipe");
        Ok(Some(removed))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.recipes.read().await.len())
    }
}
