//! Provider registry
//!
//! Immutable table of providers built once at start-up. Its order is the
//! canonical order everywhere numbering matters: dispatch order, vote-prompt
//! numbering and tie-breaks.

use crate::ports::provider_adapter::ProviderAdapter;
use boardroom_domain::{CredentialSet, DomainError, ProviderId, ProviderSpec};
use secrecy::SecretString;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building or querying the registry
///
/// All of these are configuration errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(ProviderId),

    #[error("Duplicate provider: {0}")]
    DuplicateProvider(ProviderId),

    #[error("Provider registry is empty")]
    Empty,

    #[error(transparent)]
    InvalidSpec(#[from] DomainError),

    #[error("Failed to initialize adapter for {provider}: {message}")]
    AdapterInit { provider: ProviderId, message: String },
}

/// Builds the adapter variant matching a spec's transport
///
/// Called once per spec while the registry is built, so nothing downstream
/// ever branches on transport.
pub trait AdapterFactory {
    fn create(&self, spec: &ProviderSpec) -> Result<Arc<dyn ProviderAdapter>, RegistryError>;
}

/// A registry entry: spec plus the adapter bound to it
#[derive(Clone)]
pub struct RegisteredProvider {
    spec: ProviderSpec,
    adapter: Arc<dyn ProviderAdapter>,
}

impl RegisteredProvider {
    pub fn id(&self) -> &ProviderId {
        &self.spec.id
    }

    pub fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    pub fn adapter(&self) -> &Arc<dyn ProviderAdapter> {
        &self.adapter
    }
}

impl std::fmt::Debug for RegisteredProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredProvider")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// A registered provider paired with this call's credential
#[derive(Clone)]
pub struct ActiveProvider {
    pub provider: RegisteredProvider,
    pub credential: SecretString,
}

impl ActiveProvider {
    pub fn id(&self) -> &ProviderId {
        self.provider.id()
    }

    pub fn adapter(&self) -> &Arc<dyn ProviderAdapter> {
        self.provider.adapter()
    }
}

impl std::fmt::Debug for ActiveProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SecretString's Debug is already redacted
        f.debug_struct("ActiveProvider")
            .field("id", self.id())
            .field("credential", &self.credential)
            .finish()
    }
}

/// Static mapping from provider id to spec and adapter
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<RegisteredProvider>,
}

impl ProviderRegistry {
    /// Build from specs in canonical order, creating one adapter per spec
    pub fn build(
        specs: Vec<ProviderSpec>,
        factory: &dyn AdapterFactory,
    ) -> Result<Self, RegistryError> {
        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            spec.validate()?;
            let adapter = factory.create(&spec)?;
            entries.push((spec, adapter));
        }
        Self::from_entries(entries)
    }

    /// Build from already-constructed adapters
    pub fn from_entries(
        entries: Vec<(ProviderSpec, Arc<dyn ProviderAdapter>)>,
    ) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut providers: Vec<RegisteredProvider> = Vec::with_capacity(entries.len());
        for (spec, adapter) in entries {
            spec.validate()?;
            if providers.iter().any(|p| p.id() == &spec.id) {
                return Err(RegistryError::DuplicateProvider(spec.id));
            }
            providers.push(RegisteredProvider { spec, adapter });
        }

        Ok(Self { providers })
    }

    /// Every provider, in canonical order
    pub fn list(&self) -> &[RegisteredProvider] {
        &self.providers
    }

    pub fn get(&self, id: &ProviderId) -> Result<&RegisteredProvider, RegistryError> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| RegistryError::UnknownProvider(id.clone()))
    }

    pub fn contains(&self, id: &ProviderId) -> bool {
        self.providers.iter().any(|p| p.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProviderId> {
        self.providers.iter().map(RegisteredProvider::id)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Fail on the first credential keyed by an unregistered provider
    pub fn validate_credentials(&self, credentials: &CredentialSet) -> Result<(), RegistryError> {
        let mut unknown: Vec<&ProviderId> = credentials
            .provider_ids()
            .filter(|id| !self.contains(id))
            .collect();
        // deterministic report regardless of map order
        unknown.sort();
        match unknown.first() {
            Some(id) => Err(RegistryError::UnknownProvider((*id).clone())),
            None => Ok(()),
        }
    }

    /// Providers with a non-empty credential, in canonical order
    pub fn activate(&self, credentials: &CredentialSet) -> Vec<ActiveProvider> {
        self.providers
            .iter()
            .filter_map(|p| {
                credentials.get(p.id()).map(|credential| ActiveProvider {
                    provider: p.clone(),
                    credential: credential.clone(),
                })
            })
            .collect()
    }
}
