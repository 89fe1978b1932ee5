//! Ensemble execution parameters
//!
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for running answer and vote rounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Upper bound on a single provider call; a hung provider becomes an
    /// error answer instead of stalling the round.
    pub provider_timeout: Duration,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(120),
        }
    }
}

impl EnsembleConfig {
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = EnsembleConfig::default();
        assert_eq!(config.provider_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_builder() {
        let config = EnsembleConfig::default().with_provider_timeout(Duration::from_secs(5));
        assert_eq!(config.provider_timeout, Duration::from_secs(5));
    }
}
