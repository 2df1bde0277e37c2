//! Recipe Book SDK - Rust Client Library
//!
//! Provides a typed async client for the Recipe Book HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use recipebook_sdk::{RecipeBookClient, RecipeDraft};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RecipeBookClient::connect("http://127.0.0.1:5000")?;
//!
//!     let recipe = client
//!         .create(&RecipeDraft {
//!             name: "Tea".to_string(),
//!             tags: vec!["drink".to_string()],
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("Recipe created: {}", recipe.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::RecipeBookClient;
pub use error::{Result, SdkError};
pub use types::{HealthResponse, MessageResponse, Recipe, RecipeDraft};
