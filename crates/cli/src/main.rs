//! Recipe Book CLI - Command-line interface for the Recipe Book service

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use recipebook_sdk::{Recipe, RecipeBookClient, RecipeDraft, SdkError};
use tabled::{Table, Tabled};

const DEFAULT_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "recipebook-cli")]
#[command(about = "Recipe Book CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL
    #[arg(long, env = "RECIPEBOOK_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new recipe
    Create(RecipeArgs),

    /// List all recipes
    List,

    /// Find recipes by tag (case-insensitive)
    Search {
        /// Tag to look for
        tag: String,
    },

    /// Show one recipe with its ingredients and steps
    Show {
        /// Recipe ID
        id: String,
    },

    /// Replace a recipe's fields
    Update {
        /// Recipe ID
        id: String,

        #[command(flatten)]
        recipe: RecipeArgs,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },

    /// Show server status
    Status,
}

#[derive(Args)]
struct RecipeArgs {
    /// Recipe name
    #[arg(short, long)]
    name: String,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Instruction step (repeatable, in order)
    #[arg(short, long = "instruction")]
    instructions: Vec<String>,

    /// Ingredient (repeatable)
    #[arg(short = 'g', long = "ingredient")]
    ingredients: Vec<String>,
}

impl From<RecipeArgs> for RecipeDraft {
    fn from(args: RecipeArgs) -> Self {
        RecipeDraft {
            name: args.name,
            tags: args.tags,
            instructions: args.instructions,
            ingredients: args.ingredients,
        }
    }
}

#[derive(Tabled)]
struct RecipeRow {
    id: String,
    name: String,
    tags: String,
    ingredients: usize,
    steps: usize,
    published: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            tags: recipe.tags.join(", "),
            ingredients: recipe.ingredients.len(),
            steps: recipe.instructions.len(),
            published: recipe.published_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("{}", "No recipes found".yellow());
        return;
    }

    let rows: Vec<RecipeRow> = recipes.iter().map(RecipeRow::from).collect();
    println!("{}", Table::new(rows));
}

fn print_recipe_detail(recipe: &Recipe) {
    println!("{}", recipe.name.cyan().bold());
    println!("  {} {}", "ID:".bold(), recipe.id);
    println!("  {} {}", "Tags:".bold(), recipe.tags.join(", "));
    println!("  {} {}", "Published:".bold(), recipe.published_at);

    println!("\n{}", "Ingredients".bold());
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }

    println!("\n{}", "Instructions".bold());
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = RecipeBookClient::connect(&cli.url).context("Invalid server URL")?;

    match cli.command {
        Commands::Create(args) => {
            let recipe = client
                .create(&args.into())
                .await
                .context("Failed to create recipe")?;

            println!("{}", "✓ Recipe created successfully".green().bold());
            println!();
            print_recipes(&[recipe]);
        }

        Commands::List => {
            let recipes = client.list().await.context("Failed to list recipes")?;
            print_recipes(&recipes);
        }

        Commands::Search { tag } => {
            let recipes = client.search(&tag).await.context("Search failed")?;
            println!(
                "{}",
                format!("{} recipe(s) tagged '{}'", recipes.len(), tag)
                    .cyan()
                    .bold()
            );
            print_recipes(&recipes);
        }

        Commands::Show { id } => match client.get(&id).await {
            Ok(recipe) => print_recipe_detail(&recipe),
            Err(SdkError::NotFound(_)) => {
                println!("{}", format!("✗ Recipe {} not found", id).red());
            }
            Err(e) => return Err(e).context("Failed to fetch recipe"),
        },

        Commands::Update { id, recipe } => match client.update(&id, &recipe.into()).await {
            Ok(updated) => {
                println!("{}", format!("✓ Recipe {} updated", id).green().bold());
                println!();
                print_recipes(&[updated]);
            }
            Err(SdkError::NotFound(_)) => {
                println!("{}", format!("✗ Recipe {} not found", id).red());
            }
            Err(e) => return Err(e).context("Failed to update recipe"),
        },

        Commands::Delete { id } => match client.delete(&id).await {
            Ok(message) => println!("{}", format!("✓ {} ({})", message, id).green().bold()),
            Err(SdkError::NotFound(_)) => {
                println!("{}", format!("✗ Recipe {} not found", id).red());
            }
            Err(e) => return Err(e).context("Failed to delete recipe"),
        },

        Commands::Status => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match client.health().await {
                Ok(health) => {
                    println!("  {} {}", "URL:".bold(), cli.url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), health.version);
                    println!("  {} {}", "Recipes:".bold(), health.recipes);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "recipebook-cli",
            "create",
            "--name",
            "Tea",
            "--tag",
            "drink",
            "--tag",
            "hot",
            "--ingredient",
            "water",
        ])
        .unwrap();

        let Commands::Create(args) = cli.command else {
            panic!("expected create command");
        };
        let draft: RecipeDraft = args.into();
        assert_eq!(draft.name, "Tea");
        assert_eq!(draft.tags, vec!["drink", "hot"]);
        assert_eq!(draft.ingredients, vec!["water"]);
        assert!(draft.instructions.is_empty());
    }

    #[test]
    fn test_show_takes_id() {
        let cli = Cli::try_parse_from(["recipebook-cli", "show", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { id } if id == "abc"));
    }
}
