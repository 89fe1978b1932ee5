//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod ensemble;
mod output;

pub use ensemble::FileEnsembleConfig;
pub use output::FileOutputConfig;

use boardroom_application::EnsembleConfig;
use boardroom_domain::{ProviderId, ProviderSpec, default_specs};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A problem found in a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("ensemble.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("providers: list cannot be empty")]
    NoProviders,

    #[error("providers: duplicate id '{0}'")]
    DuplicateProvider(ProviderId),

    #[error("providers: {0}")]
    InvalidProvider(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round execution settings
    pub ensemble: FileEnsembleConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Provider table; an explicit list replaces the built-in one
    pub providers: Vec<ProviderSpec>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            ensemble: FileEnsembleConfig::default(),
            output: FileOutputConfig::default(),
            providers: default_specs(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.ensemble.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if self.providers.is_empty() {
            issues.push(ConfigValidationError::NoProviders);
        }

        let mut seen = HashSet::new();
        for spec in &self.providers {
            if let Err(e) = spec.validate() {
                issues.push(ConfigValidationError::InvalidProvider(e.to_string()));
            }
            if !seen.insert(spec.id.clone()) {
                issues.push(ConfigValidationError::DuplicateProvider(spec.id.clone()));
            }
        }

        issues
    }

    /// Application-level settings derived from this file
    pub fn to_ensemble_config(&self) -> EnsembleConfig {
        EnsembleConfig::default().with_provider_timeout(self.ensemble.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_domain::{OutputFormat, Transport};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ensemble]
timeout_seconds = 30

[output]
format = "winner"
color = false

[[providers]]
id = "openai"
model = "gpt-4o"
transport = "native_client"
api_key_env = "OPENAI_API_KEY"

[[providers]]
id = "local"
model = "llama3"
transport = "http_endpoint"
endpoint = "http://localhost:11434/v1/chat/completions"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ensemble.timeout_seconds, 30);
        assert_eq!(config.output.format, Some(OutputFormat::Winner));
        assert!(!config.output.color);
        assert_eq!(config.providers.len(), 2);
        assert_eq!(config.providers[1].transport, Transport::HttpEndpoint);
        assert_eq!(
            config.providers[1].endpoint_url.as_deref(),
            Some("http://localhost:11434/v1/chat/completions")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config_keeps_default_providers() {
        let toml_str = r#"
[output]
format = "json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers, default_specs());
        assert_eq!(config.ensemble.timeout_seconds, 120);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.ensemble.timeout_seconds = 0;
        config.providers = vec![
            ProviderSpec::native("openai", "gpt-4o-mini"),
            ProviderSpec::native("openai", "gpt-4o"),
            ProviderSpec::native("groq", "llama").with_endpoint(""),
        ];
        config.providers[2].transport = Transport::HttpEndpoint;

        let issues = config.validate();

        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::DuplicateProvider(
            ProviderId::from("openai")
        )));
        assert!(
            issues
                .iter()
                .any(|i| matches!(i, ConfigValidationError::InvalidProvider(m) if m.contains("groq")))
        );
    }

    #[test]
    fn test_validate_empty_providers() {
        let config = FileConfig {
            providers: Vec::new(),
            ..FileConfig::default()
        };
        assert_eq!(config.validate(), vec![ConfigValidationError::NoProviders]);
    }

    #[test]
    fn test_to_ensemble_config() {
        let mut config = FileConfig::default();
        config.ensemble.timeout_seconds = 45;
        assert_eq!(
            config.to_ensemble_config().provider_timeout,
            Duration::from_secs(45)
        );
    }
}
