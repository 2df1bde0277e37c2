// Application Layer - Use Cases

pub mod recipe;

// Re-exports
pub use recipe::RecipeService;
