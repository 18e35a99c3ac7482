use crate::config::{AppConfig, ProviderConfig};
use crate::error::RecipeError;
use crate::providers::{AnthropicProvider, LlmProvider, OpenAIProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, RecipeError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(RecipeError::ProviderError(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config)?)),
            _ => Err(RecipeError::ProviderError(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Get the default provider from configuration
    ///
    /// A provider with no `[providers.<name>]` section falls back to the
    /// default settings, so the server runs with nothing but an API key in
    /// the environment.
    pub fn get_default_provider(config: &AppConfig) -> Result<Box<dyn LlmProvider>, RecipeError> {
        let provider_name = &config.default_provider;
        let provider_config = config
            .providers
            .get(provider_name)
            .cloned()
            .unwrap_or_default();

        Self::create(provider_name, &provider_config)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic"]
    }
}
