//! Text generation provider abstraction.
//!
//! The relay talks to its upstream through the `TextProvider` trait so tests
//! can swap in mock or fault-injecting implementations.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Upstream returned no text candidates")]
    EmptyResponse,
}

/// Result of a successful generation call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text from the first candidate.
    pub text: String,
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a full (non-streamed) text response for the prompt.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
