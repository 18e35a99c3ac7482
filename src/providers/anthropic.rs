use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::RecipeError;
use crate::providers::{build_client, LlmProvider, CHEF_SYSTEM_PROMPT};

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, RecipeError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| {
                RecipeError::ProviderError(
                    "ANTHROPIC_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.anthropic.com".to_string());

        Ok(AnthropicProvider {
            client: build_client(config.timeout),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        AnthropicProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "system": CHEF_SYSTEM_PROMPT,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let recipe_text = response_body["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                RecipeError::GenerationError(
                    "Failed to extract content from Anthropic response".to_string(),
                )
            })?
            .to_string();

        Ok(recipe_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "content": [{
                        "text": "Ingredients:\n- Lentils\nInstructions:\n1. Simmer the lentils"
                    }]
                }"#,
            )
            .create();

        let provider = AnthropicProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "claude-sonnet-4-5".to_string(),
        );

        let result = provider.generate("Generate a simple dinner recipe.").await.unwrap();
        assert!(result.contains("Lentils"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_provider_name() {
        let config = ProviderConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };

        let provider = AnthropicProvider::new(&config).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }
}
