//! SDK Request/Response Types
//!
//! Mirrors the JSON shapes served by the api-http crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields sent on create and update
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeDraft {
    pub name: String,
    pub tags: Vec<String>,
    pub instructions: Vec<String>,
    pub ingredients: Vec<String>,
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

/// Confirmation or error body
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response from the health endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub recipes: usize,
}
