//! Mock provider implementations for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Mock text provider that echoes the prompt back.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(ProviderResponse {
            text: format!("Mock response for: {}", prompt),
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}

/// Provider that fails every generation call. Used to exercise the
/// error path without a network collaborator.
pub struct FailingTextProvider;

#[async_trait]
impl TextProvider for FailingTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<ProviderResponse, ProviderError> {
        Err(ProviderError::ApiError(
            "Injected provider failure".to_string(),
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
