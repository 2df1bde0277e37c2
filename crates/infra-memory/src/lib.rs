// Recipe Book Infrastructure - In-Memory Adapter
// Implements: RecipeRepository

mod recipe_repository;

pub use recipe_repository::InMemoryRecipeRepository;
