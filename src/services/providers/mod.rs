/// Generative-model client abstraction
///
/// The resolver talks to the model only through [`ModelClient`], so the
/// Gemini HTTP client can be swapped for a test double. Failures come back
/// as a typed [`ModelError`] instead of a panic or a generic error, which
/// lets the caller decide to fall back.
use std::time::Duration;

pub mod gemini;

pub use gemini::GeminiClient;

/// Why a model call produced no usable text
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("No Gemini API key configured")]
    MissingApiKey,

    #[error("Model request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Model API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Model call timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

/// Trait for text-generation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends `prompt` and returns the model's raw text answer
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
