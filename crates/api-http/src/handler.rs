//! HTTP Route Handlers
//!
//! Each handler parses its input, calls one `RecipeService` operation and
//! serializes the result.

use crate::error::ApiError;
use crate::types::{HealthResponse, MessageResponse};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use recipebook_core::application::RecipeService;
use recipebook_core::domain::{Recipe, RecipeDraft, RecipeId};

type ApiResult<T> = Result<T, ApiError>;

/// Decode a draft from the raw body. The `Content-Type` header is not checked.
fn parse_draft(body: &[u8]) -> ApiResult<RecipeDraft> {
    Ok(serde_json::from_slice(body)?)
}

/// POST /recipes
pub async fn create_recipe(
    State(service): State<RecipeService>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let draft = parse_draft(&body)?;
    let recipe = service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /recipes
pub async fn list_recipes(State(service): State<RecipeService>) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(service.list().await?))
}

/// GET /recipes/search/:tag
pub async fn search_recipes(
    State(service): State<RecipeService>,
    Path(tag): Path<String>,
) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(service.search_by_tag(&tag).await?))
}

/// GET /recipes/:id
pub async fn get_recipe(
    State(service): State<RecipeService>,
    Path(id): Path<RecipeId>,
) -> ApiResult<Json<Recipe>> {
    Ok(Json(service.get(&id).await?))
}

/// PUT /recipes/:id
pub async fn update_recipe(
    State(service): State<RecipeService>,
    Path(id): Path<RecipeId>,
    body: Bytes,
) -> ApiResult<Json<Recipe>> {
    let draft = parse_draft(&body)?;
    let recipe = service.update(&id, draft).await?;

    Ok(Json(recipe))
}

/// DELETE /recipes/:id
pub async fn delete_recipe(
    State(service): State<RecipeService>,
    Path(id): Path<RecipeId>,
) -> ApiResult<Json<MessageResponse>> {
    service.delete(&id).await?;

    Ok(Json(MessageResponse::new("Recipe deleted")))
}

/// GET /health
pub async fn health(State(service): State<RecipeService>) -> ApiResult<Json<HealthResponse>> {
    let recipes = service.count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: recipebook_core::VERSION.to_string(),
        recipes,
    }))
}
