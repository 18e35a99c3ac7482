mod anthropic;
mod factory;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_recipe_prompt, dietary_instructions, CHEF_SYSTEM_PROMPT};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::RecipeError;

/// Unified trait for all LLM completion providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Generate free-text recipe content for the given user prompt
    async fn generate(&self, prompt: &str) -> Result<String, RecipeError>;
}

/// HTTP client with the configured request timeout applied.
fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
