//! NativeClient transport: chat completions through `async-openai`

use super::{HttpTransport, scrub};
use async_openai::{
    Client,
    config::OpenAIConfig,
    error::{ApiError, OpenAIError},
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    },
};
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use boardroom_application::{ProviderAdapter, ProviderError, ProviderFailure};
use boardroom_domain::ProviderSpec;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;

/// Adapter for providers reached through the OpenAI client library
///
/// A client is built per call from the supplied credential and dropped when
/// the call returns. The library's own retry loop is switched off so each
/// invocation is a single outbound request.
pub struct NativeClientAdapter {
    spec: ProviderSpec,
    transport: HttpTransport,
}

impl NativeClientAdapter {
    pub fn new(spec: ProviderSpec, transport: HttpTransport) -> Self {
        Self { spec, transport }
    }

    fn client(&self, credential: &SecretString) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_key(credential.expose_secret());
        if let Some(base) = self.spec.endpoint_url.as_deref() {
            config = config.with_api_base(base);
        }

        let no_retry = ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        Client::with_config(config)
            .with_http_client(self.transport.client().clone())
            .with_backoff(no_retry)
    }

    fn request(&self, prompt: &str) -> CreateChatCompletionRequest {
        CreateChatCompletionRequest {
            model: self.spec.model_name.clone(),
            messages: vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                    name: None,
                },
            )],
            ..Default::default()
        }
    }

    fn classify(&self, error: OpenAIError, credential: &str) -> ProviderFailure {
        match error {
            OpenAIError::ApiError(api) => Self::classify_api(&api, credential),
            OpenAIError::Reqwest(e) => self.transport.failure(&e, credential),
            OpenAIError::JSONDeserialize(e) => ProviderFailure::MalformedResponse(e.to_string()),
            other => ProviderFailure::RequestFailed(scrub(&other.to_string(), credential)),
        }
    }

    fn classify_api(api: &ApiError, credential: &str) -> ProviderFailure {
        let code = api.code.as_ref().map(|c| c.to_string()).unwrap_or_default();
        let kind = api.r#type.clone().unwrap_or_default();
        let message = api.message.to_lowercase();

        let auth = code.contains("invalid_api_key")
            || kind.contains("authentication")
            || message.contains("api key");
        if auth {
            return ProviderFailure::Authentication("API key rejected".to_string());
        }

        let limited = code.contains("rate_limit")
            || kind.contains("insufficient_quota")
            || kind.contains("rate_limit")
            || message.contains("rate limit");
        if limited {
            return ProviderFailure::RateLimited(scrub(&api.message, credential));
        }

        ProviderFailure::RequestFailed(scrub(&api.message, credential))
    }
}

#[async_trait]
impl ProviderAdapter for NativeClientAdapter {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    async fn invoke(
        &self,
        credential: &SecretString,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        debug!(
            provider = %self.spec.id,
            model = %self.spec.model_name,
            "Sending chat completion"
        );

        let response = self
            .client(credential)
            .chat()
            .create(self.request(prompt))
            .await
            .map_err(|e| {
                ProviderError::new(
                    self.spec.id.clone(),
                    self.classify(e, credential.expose_secret()),
                )
            })?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::new(
                    self.spec.id.clone(),
                    ProviderFailure::MalformedResponse("no response content".to_string()),
                )
            })
    }
}
