//! Application-level configuration.
//!
//! - [`EnsembleConfig`]: how rounds are executed (per-provider timeout)

pub mod ensemble_config;

pub use ensemble_config::EnsembleConfig;
