// Delete Use Case

use crate::domain::RecipeId;
use crate::error::{AppError, Result};
use crate::port::RecipeRepository;
use tracing::{info, warn};

/// Execute delete use case
pub async fn execute(repo: &dyn RecipeRepository, id: &RecipeId) -> Result<()> {
    match repo.delete(id).await? {
        Some(removed) => {
            info!(recipe_id = %removed.id, "Recipe deleted");
            Ok(())
        }
        None => {
            warn!(recipe_id = %id, "Delete of unknown recipe");
            Err(AppError::recipe_not_found(id))
        }
    }
}
