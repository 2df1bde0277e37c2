//! Recipe Book Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{HealthResponse, MessageResponse, Recipe, RecipeDraft};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Recipe Book HTTP Client
///
/// # Example
///
/// ```no_run
/// use recipebook_sdk::RecipeBookClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RecipeBookClient::connect("http://127.0.0.1:5000")?;
/// let recipes = client.list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RecipeBookClient {
    client: Client,
    base_url: Url,
}

impl RecipeBookClient {
    /// Create a client for the server at `url` (e.g., `http://127.0.0.1:5000`)
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(url.as_ref())
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", url.as_ref(), e)))?;

        if base_url.cannot_be_a_base() {
            return Err(SdkError::InvalidUrl(url.as_ref().to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a recipe. The server assigns its ID and publish time.
    ///
    /// ```no_run
    /// # use recipebook_sdk::{RecipeBookClient, RecipeDraft};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = RecipeBookClient::connect("http://127.0.0.1:5000")?;
    /// let recipe = client
    ///     .create(&RecipeDraft {
    ///         name: "Tea".to_string(),
    ///         tags: vec!["drink".to_string()],
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("Created {}", recipe.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, draft: &RecipeDraft) -> Result<Recipe> {
        let response = self
            .client
            .post(self.url(&["recipes"])?)
            .json(draft)
            .send()
            .await?;

        decode(response).await
    }

    /// List every recipe in insertion order
    pub async fn list(&self) -> Result<Vec<Recipe>> {
        let response = self.client.get(self.url(&["recipes"])?).send().await?;
        decode(response).await
    }

    /// Recipes carrying `tag` (case-insensitive on the server)
    pub async fn search(&self, tag: &str) -> Result<Vec<Recipe>> {
        let response = self
            .client
            .get(self.url(&["recipes", "search", tag])?)
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch a single recipe by ID
    pub async fn get(&self, id: &str) -> Result<Recipe> {
        let response = self.client.get(self.url(&["recipes", id])?).send().await?;
        decode(response).await
    }

    /// Replace every field of a recipe except its ID and publish time
    pub async fn update(&self, id: &str, draft: &RecipeDraft) -> Result<Recipe> {
        let response = self
            .client
            .put(self.url(&["recipes", id])?)
            .json(draft)
            .send()
            .await?;

        decode(response).await
    }

    /// Delete a recipe, returning the server's confirmation message
    pub async fn delete(&self, id: &str) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&["recipes", id])?)
            .send()
            .await?;

        let confirmation: MessageResponse = decode(response).await?;
        Ok(confirmation.message)
    }

    /// Server health and recipe count
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url(&["health"])?).send().await?;
        decode(response).await
    }

    /// Append percent-encoded path segments to the base URL
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }

    let message = serde_json::from_slice::<MessageResponse>(&bytes)
        .map(|body| body.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());

    Err(SdkError::from_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_rejects_invalid_url() {
        assert!(matches!(
            RecipeBookClient::connect("not a url"),
            Err(SdkError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_encodes_segments() {
        let client = RecipeBookClient::connect("http://127.0.0.1:5000/").unwrap();
        let url = client.url(&["recipes", "search", "hot drink"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/recipes/search/hot%20drink");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = RecipeBookClient::connect("http://localhost/api").unwrap();
        let url = client.url(&["recipes", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/recipes/abc");
    }
}
