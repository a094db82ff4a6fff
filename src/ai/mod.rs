pub mod http;
pub mod openai;

pub use openai::OpenAiClient;

use thiserror::Error;

/// Reasoning-effort sent to models that take one instead of a temperature.
pub const REASONING_EFFORT: &str = "low";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("API error (status {code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("Failed to parse response: {message}")]
    JsonError { message: String },

    #[error("The response contained no message content")]
    EmptyCompletion,
}
