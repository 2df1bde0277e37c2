//! HTTP Request/Response Types
//!
//! Request bodies reuse `RecipeDraft` from core; these are the extra envelopes.

use serde::{Deserialize, Serialize};

/// `{"message": ...}` body used for confirmations and errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub recipes: usize,
}
