//! Infrastructure layer for boardroom
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEnsembleConfig, FileOutputConfig,
};
pub use credentials::{CredentialError, CredentialResolver, parse_key_arg};
pub use providers::{
    DefaultAdapterFactory, HttpEndpointAdapter, HttpTransport, NativeClientAdapter,
};
