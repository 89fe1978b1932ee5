//! HttpEndpoint transport: OpenAI-compatible chat completions over `reqwest`

use super::{HttpTransport, scrub};
use async_trait::async_trait;
use boardroom_application::{ProviderAdapter, ProviderError, ProviderFailure};
use boardroom_domain::ProviderSpec;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Adapter for providers reached by a bare HTTP POST
///
/// Sends `{model, messages: [{role: "user", content}]}` with a Bearer token
/// and reads the text at `choices[0].message.content`.
pub struct HttpEndpointAdapter {
    spec: ProviderSpec,
    endpoint: String,
    transport: HttpTransport,
}

impl HttpEndpointAdapter {
    /// `None` when the spec has no endpoint URL
    pub fn new(spec: ProviderSpec, transport: HttpTransport) -> Option<Self> {
        let endpoint = spec.endpoint_url.clone().filter(|u| !u.trim().is_empty())?;
        Some(Self {
            spec,
            endpoint,
            transport,
        })
    }

    fn fail(&self, cause: ProviderFailure) -> ProviderError {
        ProviderError::new(self.spec.id.clone(), cause)
    }

    fn status_failure(status: StatusCode, body: &str) -> ProviderFailure {
        let detail = if body.is_empty() {
            format!("HTTP {}", status.as_u16())
        } else {
            format!("HTTP {}: {}", status.as_u16(), body)
        };
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderFailure::Authentication(format!("HTTP {}", status.as_u16()))
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderFailure::RateLimited(detail),
            _ => ProviderFailure::RequestFailed(detail),
        }
    }

    fn extract_text(body: &str) -> Result<String, ProviderFailure> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| ProviderFailure::MalformedResponse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ProviderFailure::MalformedResponse(
                    "no text at choices[0].message.content".to_string(),
                )
            })
    }
}

#[async_trait]
impl ProviderAdapter for HttpEndpointAdapter {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    async fn invoke(
        &self,
        credential: &SecretString,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.spec.model_name,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            provider = %self.spec.id,
            model = %self.spec.model_name,
            "POST chat completion"
        );

        let response = self
            .transport
            .client()
            .post(&self.endpoint)
            .bearer_auth(credential.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.fail(self.transport.failure(&e, credential.expose_secret())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.fail(self.transport.failure(&e, credential.expose_secret())))?;

        if !status.is_success() {
            let excerpt = scrub(&body, credential.expose_secret());
            return Err(self.fail(Self::status_failure(status, &excerpt)));
        }

        Self::extract_text(&body).map_err(|cause| self.fail(cause))
    }
}
