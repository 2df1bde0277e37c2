// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build the error returned when no recipe carries `id`
    pub fn recipe_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Recipe {} not found", id))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
