// Update Use Case

use crate::domain::{Recipe, RecipeDraft, RecipeId};
use crate::error::{AppError, Result};
use crate::port::RecipeRepository;
use tracing::{info, warn};

/// Execute update use case
///
/// Replaces every caller-owned field. `publishedAt` keeps its creation value.
pub async fn execute(
    repo: &dyn RecipeRepository,
    id: &RecipeId,
    draft: RecipeDraft,
) -> Result<Recipe> {
    match repo.update(id, draft).await? {
        Some(recipe) => {
            info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe updated");
            Ok(recipe)
        }
        None => {
            warn!(recipe_id = %id, "Update of unknown recipe");
            Err(AppError::recipe_not_found(id))
        }
    }
}
