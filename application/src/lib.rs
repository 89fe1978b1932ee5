//! Application layer for boardroom
//!
//! This crate contains use cases, port definitions, the provider registry
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod registry;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::EnsembleConfig;
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    provider_adapter::{ProviderAdapter, ProviderError, ProviderFailure},
};
pub use registry::{
    ActiveProvider, AdapterFactory, ProviderRegistry, RegisteredProvider, RegistryError,
};
pub use use_cases::run_ensemble::{
    MIN_ACTIVE_PROVIDERS, RunEnsembleError, RunEnsembleInput, RunEnsembleUseCase,
};
pub use use_cases::run_round::RoundExecutor;
pub use use_cases::tally_votes::{VoteOutcome, VoteTallier};
