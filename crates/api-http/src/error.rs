//! HTTP Error Types
//!
//! Maps application errors to HTTP status codes.

use crate::types::MessageResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recipebook_core::error::AppError;
use tracing::error;

/// Body text for every 404, regardless of which ID was asked for
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Wrapper so `AppError` can be returned straight from handlers
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// A body that does not decode (syntax or field types) is a 400
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self(AppError::Validation(format!("Invalid recipe body: {}", err)))
    }
}

/// Status code for an application error
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) | AppError::Domain(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);

        let message = match self.0 {
            AppError::NotFound(_) => RECIPE_NOT_FOUND.to_string(),
            AppError::Validation(msg) => msg,
            other => {
                error!(error = %other, "Request failed");
                other.to_string()
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
