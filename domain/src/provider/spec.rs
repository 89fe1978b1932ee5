//! Provider specification (Value Object)

use super::id::ProviderId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a provider is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// In-process SDK client (OpenAI client library)
    NativeClient,
    /// Bare HTTP POST to an OpenAI-compatible chat-completion endpoint
    HttpEndpoint,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::NativeClient => "native_client",
            Transport::HttpEndpoint => "http_endpoint",
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of one provider, fixed at configuration time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpec {
    pub id: ProviderId,
    /// Provider-specific model identifier sent with every request
    #[serde(rename = "model")]
    pub model_name: String,
    pub transport: Transport,
    /// Chat-completion URL for `HttpEndpoint`; optional API base for `NativeClient`
    #[serde(rename = "endpoint", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Environment variable the caller may read the credential from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl ProviderSpec {
    pub fn native(id: impl Into<ProviderId>, model_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model_name: model_name.into(),
            transport: Transport::NativeClient,
            endpoint_url: None,
            api_key_env: None,
        }
    }

    pub fn http(
        id: impl Into<ProviderId>,
        model_name: impl Into<String>,
        endpoint_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            model_name: model_name.into(),
            transport: Transport::HttpEndpoint,
            endpoint_url: Some(endpoint_url.into()),
            api_key_env: None,
        }
    }

    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = Some(var.into());
        self
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Check the spec is usable for its transport
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::InvalidProviderSpec(
                "provider id cannot be empty".to_string(),
            ));
        }
        if self.model_name.trim().is_empty() {
            return Err(DomainError::InvalidProviderSpec(format!(
                "{}: model cannot be empty",
                self.id
            )));
        }
        let endpoint_missing = self
            .endpoint_url
            .as_deref()
            .is_none_or(|u| u.trim().is_empty());
        if self.transport == Transport::HttpEndpoint && endpoint_missing {
            return Err(DomainError::InvalidProviderSpec(format!(
                "{}: http_endpoint transport requires an endpoint",
                self.id
            )));
        }
        Ok(())
    }
}

/// The built-in provider table, in canonical order
///
/// Order matters: it fixes vote-prompt numbering and tie-breaks.
pub fn default_specs() -> Vec<ProviderSpec> {
    vec![
        ProviderSpec::native("openai", "gpt-4o-mini").with_api_key_env("OPENAI_API_KEY"),
        ProviderSpec::http(
            "gemini",
            "gemini-2.5-flash",
            "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
        )
        .with_api_key_env("GEMINI_API_KEY"),
        ProviderSpec::http(
            "anthropic",
            "claude-3-5-haiku-latest",
            "https://api.anthropic.com/v1/chat/completions",
        )
        .with_api_key_env("ANTHROPIC_API_KEY"),
        ProviderSpec::http(
            "mistral",
            "mistral-small-latest",
            "https://api.mistral.ai/v1/chat/completions",
        )
        .with_api_key_env("MISTRAL_API_KEY"),
        ProviderSpec::http(
            "groq",
            "llama-3.3-70b-versatile",
            "https://api.groq.com/openai/v1/chat/completions",
        )
        .with_api_key_env("GROQ_API_KEY"),
        ProviderSpec::http(
            "deepseek",
            "deepseek-chat",
            "https://api.deepseek.com/chat/completions",
        )
        .with_api_key_env("DEEPSEEK_API_KEY"),
        ProviderSpec::http("xai", "grok-3-mini", "https://api.x.ai/v1/chat/completions")
            .with_api_key_env("XAI_API_KEY"),
    ]
}
