// Recipe Repository Port (Interface)

use crate::domain::{Recipe, RecipeDraft, RecipeId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for the recipe collection.
///
/// Implementations must make each method a single critical section: the
/// lookup and the mutation inside `update`/`delete` cannot interleave with
/// other writers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Append a recipe (insertion order is listing order)
    async fn insert(&self, recipe: &Recipe) -> Result<()>;

    /// All recipes in insertion order
    async fn list(&self) -> Result<Vec<Recipe>>;

    /// Recipes with at least one tag equal to `tag`, ignoring ASCII case
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>>;

    /// Find recipe by ID
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>>;

    /// Apply `draft` to the recipe with `id`. Returns `None` if absent.
    async fn update(&self, id: &RecipeId, draft: RecipeDraft) -> Result<Option<Recipe>>;

    /// Remove the recipe with `id`, keeping the others in order. Returns `None` if absent.
    async fn delete(&self, id: &RecipeId) -> Result<Option<Recipe>>;

    /// Number of stored recipes
    async fn count(&self) -> Result<usize>;
}
