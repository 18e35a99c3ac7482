pub mod config;
pub mod error;
pub mod model;
pub mod providers;
pub mod server;
pub mod structurer;

use log::debug;

use crate::error::RecipeError;
use crate::model::{DietType, ParsedRecipe};
use crate::providers::{build_recipe_prompt, LlmProvider};

/// Ask the provider for a recipe matching the dietary preference,
/// returning the raw completion text.
pub async fn generate_recipe_text(
    diet: DietType,
    provider: &dyn LlmProvider,
) -> Result<String, RecipeError> {
    let prompt = build_recipe_prompt(diet);
    debug!("prompt for {diet}: {prompt}");

    provider.generate(&prompt).await
}

/// Split free-text recipe content into ingredient and instruction lists.
pub fn structure_recipe(raw_text: &str) -> ParsedRecipe {
    structurer::parse(raw_text)
}

/// Generate a recipe and structure its text in one step.
pub async fn generate_recipe(
    diet: DietType,
    provider: &dyn LlmProvider,
) -> Result<ParsedRecipe, RecipeError> {
    let raw_text = generate_recipe_text(diet, provider).await?;

    Ok(structurer::parse(&raw_text))
}
