//! Credential resolution from the environment and `--key` arguments
//!
//! Values are read once per invocation and handed to the use case inside a
//! [`CredentialSet`]. Nothing here caches or logs them.

use boardroom_domain::{CredentialSet, ProviderId, ProviderSpec};
use thiserror::Error;
use tracing::debug;

/// A malformed `PROVIDER=KEY` argument
///
/// The message never repeats the argument, since it may hold a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("--key argument #{0} must have the form PROVIDER=KEY")]
    MissingSeparator(usize),

    #[error("--key argument #{0} has an empty provider id")]
    EmptyProvider(usize),
}

/// Builds a [`CredentialSet`] for the configured providers
pub struct CredentialResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    lookup: F,
}

impl CredentialResolver<fn(&str) -> Option<String>> {
    /// Read `api_key_env` variables from the process environment
    pub fn from_env() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok()
        }
        Self { lookup: var }
    }
}

impl<F> CredentialResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Read `api_key_env` variables through a custom lookup
    pub fn from_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    /// Resolve credentials for `specs`
    ///
    /// Explicit `PROVIDER=KEY` pairs win over environment values. Pairs
    /// naming providers outside `specs` are kept so the use case can reject
    /// them as unknown.
    pub fn resolve(
        &self,
        specs: &[ProviderSpec],
        explicit: &[String],
    ) -> Result<CredentialSet, CredentialError> {
        let mut credentials = CredentialSet::new();

        for spec in specs {
            let Some(var) = spec.api_key_env.as_deref() else {
                continue;
            };
            if let Some(value) = (self.lookup)(var) {
                debug!(provider = %spec.id, env = var, "Credential found in environment");
                credentials.insert(spec.id.clone(), value);
            }
        }

        for (index, arg) in explicit.iter().enumerate() {
            let (provider, key) = parse_key_arg(arg, index + 1)?;
            debug!(provider = %provider, "Credential supplied on command line");
            credentials.insert(provider, key);
        }

        Ok(credentials)
    }
}

/// Split a `PROVIDER=KEY` argument; `position` is 1-based for messages
pub fn parse_key_arg(arg: &str, position: usize) -> Result<(ProviderId, String), CredentialError> {
    let (provider, key) = arg
        .split_once('=')
        .ok_or(CredentialError::MissingSeparator(position))?;
    let provider = provider.trim();
    if provider.is_empty() {
        return Err(CredentialError::EmptyProvider(position));
    }
    Ok((ProviderId::from(provider.to_lowercase()), key.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_domain::default_specs;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_resolve_from_environment() {
        let resolver = CredentialResolver::from_lookup(env(&[
            ("OPENAI_API_KEY", "sk-openai"),
            ("GROQ_API_KEY", "gsk-groq"),
        ]));

        let creds = resolver.resolve(&default_specs(), &[]).unwrap();

        assert!(creds.is_active(&ProviderId::from("openai")));
        assert!(creds.is_active(&ProviderId::from("groq")));
        assert!(!creds.is_active(&ProviderId::from("gemini")));
    }

    #[test]
    fn test_explicit_key_overrides_environment() {
        let resolver = CredentialResolver::from_lookup(env(&[("OPENAI_API_KEY", "sk-env")]));

        let creds = resolver
            .resolve(&default_specs(), &["openai=sk-flag".to_string()])
            .unwrap();

        let key = creds.get(&ProviderId::from("openai")).unwrap();
        assert_eq!(key.expose_secret(), "sk-flag");
    }

    #[test]
    fn test_empty_environment_value_is_inactive() {
        let resolver = CredentialResolver::from_lookup(env(&[("MISTRAL_API_KEY", "  ")]));
        let creds = resolver.resolve(&default_specs(), &[]).unwrap();
        assert!(!creds.is_active(&ProviderId::from("mistral")));
    }

    #[test]
    fn test_unknown_provider_is_kept_for_rejection() {
        let resolver = CredentialResolver::from_lookup(env(&[]));
        let creds = resolver
            .resolve(&default_specs(), &["acme=xyz".to_string()])
            .unwrap();
        assert!(creds.provider_ids().any(|id| id.as_str() == "acme"));
    }

    #[test]
    fn test_parse_key_arg() {
        let (id, key) = parse_key_arg("Anthropic=sk-ant=with=equals", 1).unwrap();
        assert_eq!(id.as_str(), "anthropic");
        assert_eq!(key, "sk-ant=with=equals");
    }

    #[test]
    fn test_parse_key_arg_errors_do_not_echo_value() {
        let err = parse_key_arg("sk-secret-value", 2).unwrap_err();
        assert_eq!(err, CredentialError::MissingSeparator(2));
        assert!(!err.to_string().contains("sk-secret-value"));

        let err = parse_key_arg("=sk-secret-value", 1).unwrap_err();
        assert_eq!(err, CredentialError::EmptyProvider(1));
    }
}
