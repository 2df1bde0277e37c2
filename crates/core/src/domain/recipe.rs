// Recipe Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::{DomainError, Result};

/// Recipe ID (UUID v4 in production)
pub type RecipeId = String;

/// Caller-supplied recipe fields.
///
/// Missing or `null` fields default to empty. Store-owned fields (`ID`,
/// `publishedAt`) are not part of the draft, so a body that carries them has
/// them dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

/// Recipe Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "ID")]
    pub id: RecipeId,
    pub name: String,
    pub tags: Vec<String>,
    pub instructions: Vec<String>,
    pub ingredients: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe from a draft
    ///
    /// # Arguments
    ///
    /// * `id` - Unique recipe ID (injected, not generated)
    /// * `published_at` - Publish timestamp (injected, not system time)
    /// * `draft` - Caller-supplied fields
    pub fn new(
        id: impl Into<String>,
        published_at: DateTime<Utc>,
        draft: RecipeDraft,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::ValidationError(
                "Recipe ID cannot be empty".to_string(),
            ));
        }

        let RecipeDraft {
            name,
            tags,
            instructions,
            ingredients,
        } = draft;

        Ok(Self {
            id,
            name,
            tags,
            instructions,
            ingredients,
            published_at,
        })
    }

    /// True if any tag equals `tag` ignoring ASCII case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Overwrite every caller-owned field with the draft's values.
    /// `id` and `published_at` are left untouched.
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.tags = draft.tags;
        self.instructions = draft.instructions;
        self.ingredients = draft.ingredients;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn published() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let result = Recipe::new("", published(), RecipeDraft::new("Tea"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_has_tag_ignores_ascii_case() {
        let recipe = Recipe::new(
            "r-1",
            published(),
            RecipeDraft::new("Sandwich").with_tags(["Lunch", "Quick"]),
        )
        .unwrap();

        assert!(recipe.has_tag("lunch"));
        assert!(recipe.has_tag("QUICK"));
        assert!(!recipe.has_tag("dinner"));
        assert!(!recipe.has_tag(""));
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut recipe = Recipe::new(
            "r-2",
            published(),
            RecipeDraft::new("Tea").with_tags(["drink"]),
        )
        .unwrap();

        recipe.apply(
            RecipeDraft::new("Tea2")
                .with_tags(["drink", "hot"])
                .with_ingredients(["water", "leaves"]),
        );

        assert_eq!(recipe.id, "r-2");
        assert_eq!(recipe.published_at, published());
        assert_eq!(recipe.name, "Tea2");
        assert_eq!(recipe.tags, vec!["drink", "hot"]);
        assert_eq!(recipe.ingredients, vec!["water", "leaves"]);
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_recipe_json_field_names() {
        let recipe = Recipe::new(
            "r-3",
            published(),
            RecipeDraft::new("Soup").with_instructions(["boil"]),
        )
        .unwrap();

        let value = serde_json::to_value(&recipe).expect("serialize");
        assert_eq!(value["ID"], "r-3");
        assert_eq!(value["name"], "Soup");
        assert_eq!(value["instructions"], json!(["boil"]));
        assert_eq!(value["publishedAt"], "2024-03-01T12:00:00Z");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_draft_ignores_store_owned_fields() {
        let draft: RecipeDraft = serde_json::from_value(json!({
            "ID": "caller-chosen",
            "name": "Tea",
            "tags": ["drink"],
            "publishedAt": "1999-01-01T00:00:00Z"
        }))
        .expect("deserialize");

        assert_eq!(draft, RecipeDraft::new("Tea").with_tags(["drink"]));
    }

    #[test]
    fn test_draft_missing_fields_default_to_empty() {
        let draft: RecipeDraft = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(draft, RecipeDraft::default());
    }

    #[test]
    fn test_draft_null_fields_default_to_empty() {
        let draft: RecipeDraft = serde_json::from_value(json!({
            "name": "Tea",
            "tags": null,
            "instructions": null,
            "ingredients": null
        }))
        .expect("deserialize");
        assert_eq!(draft, RecipeDraft::new("Tea"));

        let draft: RecipeDraft =
            serde_json::from_value(json!({"name": null, "tags": ["a"]})).expect("deserialize");
        assert_eq!(draft, RecipeDraft::default().with_tags(["a"]));
    }

    #[test]
    fn test_draft_wrong_type_still_rejected() {
        let result = serde_json::from_value::<RecipeDraft>(json!({"tags": "drink"}));
        assert!(result.is_err());
    }
}
