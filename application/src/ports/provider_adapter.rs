//! Provider adapter port
//!
//! One uniform request/response contract for every text-generation backend,
//! whatever its transport or authentication shape.

use async_trait::async_trait;
use boardroom_domain::{ProviderId, ProviderSpec};
use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

/// Cause of a failed provider call
///
/// Messages describe the failure only. Implementations must never put the
/// credential into them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderFailure {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// A provider call failed; recorded as an error answer, never fatal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{provider}: {cause}")]
pub struct ProviderError {
    pub provider: ProviderId,
    #[source]
    pub cause: ProviderFailure,
}

impl ProviderError {
    pub fn new(provider: ProviderId, cause: ProviderFailure) -> Self {
        Self { provider, cause }
    }
}

/// Adapter for one external generation service
///
/// Implementations live in the infrastructure layer, one per transport.
/// Each `invoke` performs exactly one outbound call and must not retain the
/// credential after returning.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The spec this adapter was built from
    fn spec(&self) -> &ProviderSpec;

    /// Send a single-turn prompt and return the completion text
    async fn invoke(&self, credential: &SecretString, prompt: &str)
    -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::new(
            ProviderId::from("groq"),
            ProviderFailure::RateLimited("HTTP 429".to_string()),
        );
        assert_eq!(err.to_string(), "groq: Rate limited: HTTP 429");
    }

    #[test]
    fn test_timeout_display() {
        let failure = ProviderFailure::Timeout(Duration::from_millis(1500));
        assert_eq!(failure.to_string(), "Timeout after 1.5s");
    }
}
