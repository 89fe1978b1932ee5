//! Provider identifier value object

use serde::{Deserialize, Serialize};

/// Identifier of a provider (e.g. `"openai"`, `"gemini"`)
///
/// Stored as given. [`display_name`](Self::display_name) is the upper-cased
/// form used in prompts and result banners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased name, e.g. `OPENAI`
    pub fn display_name(&self) -> String {
        self.0.to_uppercase()
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
