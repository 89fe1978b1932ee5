//! Per-invocation credential set

use super::id::ProviderId;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

/// Mapping from provider to API credential, supplied per call
///
/// A provider with no entry, or an empty/whitespace entry, is inactive for
/// that call. Values are held as [`SecretString`] so `Debug` output is
/// redacted and memory is zeroized on drop.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    entries: HashMap<ProviderId, SecretString>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the credential for a provider
    pub fn insert(&mut self, provider: impl Into<ProviderId>, credential: impl Into<String>) {
        self.entries
            .insert(provider.into(), SecretString::from(credential.into()));
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, provider: impl Into<ProviderId>, credential: impl Into<String>) -> Self {
        self.insert(provider, credential);
        self
    }

    /// The credential for a provider, if present and non-empty
    pub fn get(&self, provider: &ProviderId) -> Option<&SecretString> {
        self.entries
            .get(provider)
            .filter(|secret| !secret.expose_secret().trim().is_empty())
    }

    pub fn is_active(&self, provider: &ProviderId) -> bool {
        self.get(provider).is_some()
    }

    /// Every provider id that has an entry, empty or not
    pub fn provider_ids(&self) -> impl Iterator<Item = &ProviderId> {
        self.entries.keys()
    }

    /// Drop every entry whose provider is not in `keep`
    pub fn retain_providers(&mut self, keep: &[ProviderId]) {
        self.entries.retain(|id, _| keep.contains(id));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
