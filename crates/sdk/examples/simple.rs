//! Simple SDK Example
//!
//! Walks one recipe through its whole lifecycle.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package recipebook-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package recipebook-sdk --example simple
//!    ```

use recipebook_sdk::{RecipeBookClient, RecipeDraft, SdkError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Recipe Book SDK - Simple Example");
    println!("================================\n");

    // 1. Connect to server
    println!("1. Connecting to server...");
    let client = RecipeBookClient::connect("http://127.0.0.1:5000")?;
    let health = client.health().await?;
    println!("   ✓ Connected (v{}, {} recipes)\n", health.version, health.recipes);

    // 2. Create a recipe
    println!("2. Creating a recipe...");
    let recipe = client
        .create(&RecipeDraft {
            name: "Tea".to_string(),
            tags: vec!["drink".to_string()],
            instructions: vec!["Boil water".to_string(), "Steep for 3 minutes".to_string()],
            ingredients: vec!["water".to_string(), "tea leaves".to_string()],
        })
        .await?;

    println!("   ✓ Recipe created:");
    println!("     - ID: {}", recipe.id);
    println!("     - Published: {}\n", recipe.published_at);

    // 3. Search by tag (case-insensitive)
    println!("3. Searching for tag DRINK...");
    let found = client.search("DRINK").await?;
    println!("   ✓ {} match(es)\n", found.len());

    // 4. Update it
    println!("4. Updating recipe...");
    let updated = client
        .update(
            &recipe.id,
            &RecipeDraft {
                name: "Tea2".to_string(),
                tags: vec!["drink".to_string(), "hot".to_string()],
                ..Default::default()
            },
        )
        .await?;
    println!("   ✓ Name is now {}\n", updated.name);

    // 5. Delete it twice; the second delete must report NotFound
    println!("5. Deleting recipe...");
    let message = client.delete(&recipe.id).await?;
    println!("   ✓ {}", message);

    match client.delete(&recipe.id).await {
        Err(SdkError::NotFound(msg)) => println!("   ✓ Second delete rejected: {}", msg),
        other => println!("   ⚠ Unexpected result: {:?}", other.map(|_| ())),
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
