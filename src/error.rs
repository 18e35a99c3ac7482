use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to reach the completion API
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The completion API returned an unusable reply
    #[error("Recipe generation failed: {0}")]
    GenerationError(String),

    /// Provider selection or construction failed
    #[error("Provider error: {0}")]
    ProviderError(String),
}
