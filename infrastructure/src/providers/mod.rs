//! Provider adapters
//!
//! One [`ProviderAdapter`] implementation per transport:
//!
//! - [`NativeClientAdapter`]: the OpenAI client library (`async-openai`)
//! - [`HttpEndpointAdapter`]: bare `reqwest` POST to an OpenAI-compatible
//!   chat-completion endpoint
//!
//! [`DefaultAdapterFactory`] picks the variant from the spec's transport when
//! the registry is built. Both variants share one [`HttpTransport`].

pub mod http_endpoint;
pub mod native_client;

pub use http_endpoint::HttpEndpointAdapter;
pub use native_client::NativeClientAdapter;

use boardroom_application::{AdapterFactory, ProviderAdapter, ProviderFailure, RegistryError};
use boardroom_domain::{ProviderSpec, Transport, truncate};
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("boardroom/", env!("CARGO_PKG_VERSION"));

/// Longest provider error body kept in a failure message
pub(crate) const MAX_ERROR_EXCERPT: usize = 200;

/// Shared HTTP client plus the request timeout it was built with
///
/// `request_timeout` is a transport-level backstop; the round executor
/// applies its own per-provider timeout on top. Adapters report a client
/// timeout as [`ProviderFailure::Timeout`] with this duration.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    request_timeout: Duration,
}

impl HttpTransport {
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            client,
            request_timeout,
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Classify a send/read error, scrubbing the credential from its text
    pub(crate) fn failure(&self, error: &reqwest::Error, credential: &str) -> ProviderFailure {
        if error.is_timeout() {
            ProviderFailure::Timeout(self.request_timeout)
        } else {
            ProviderFailure::Connection(scrub(&error.to_string(), credential))
        }
    }
}

/// Selects the adapter variant for each spec
pub struct DefaultAdapterFactory {
    transport: HttpTransport,
}

impl DefaultAdapterFactory {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }
}

impl AdapterFactory for DefaultAdapterFactory {
    fn create(&self, spec: &ProviderSpec) -> Result<Arc<dyn ProviderAdapter>, RegistryError> {
        let adapter: Arc<dyn ProviderAdapter> = match spec.transport {
            Transport::NativeClient => {
                Arc::new(NativeClientAdapter::new(spec.clone(), self.transport.clone()))
            }
            Transport::HttpEndpoint => {
                let adapter = HttpEndpointAdapter::new(spec.clone(), self.transport.clone())
                    .ok_or_else(|| RegistryError::AdapterInit {
                        provider: spec.id.clone(),
                        message: "http_endpoint transport requires an endpoint".to_string(),
                    })?;
                Arc::new(adapter)
            }
        };
        Ok(adapter)
    }
}

/// Remove the credential from provider-supplied text and shorten it
pub(crate) fn scrub(message: &str, credential: &str) -> String {
    let cleaned = if credential.is_empty() {
        message.to_string()
    } else {
        message.replace(credential, "[REDACTED]")
    };
    truncate(cleaned.trim(), MAX_ERROR_EXCERPT)
}
