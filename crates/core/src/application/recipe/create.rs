// Create Use Case

use crate::domain::{Recipe, RecipeDraft};
use crate::error::Result;
use crate::port::{IdProvider, RecipeRepository, TimeProvider};
use tracing::info;

/// Execute create use case
///
/// # Arguments
///
/// * `repo` - Recipe repository
/// * `id_provider` - ID generator (injected for determinism)
/// * `time_provider` - Time provider (injected for determinism)
/// * `draft` - Caller-supplied fields
pub async fn execute(
    repo: &dyn RecipeRepository,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    draft: RecipeDraft,
) -> Result<Recipe> {
    // ID and publish time are always store-assigned
    let recipe_id = id_provider.generate_id();
    let published_at = time_provider.now();

    let recipe = Recipe::new(recipe_id, published_at, draft)?;

    repo.insert(&recipe).await?;

    info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe created");

    Ok(recipe)
}
