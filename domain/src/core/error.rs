//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid provider spec: {0}")]
    InvalidProviderSpec(String),

    #[error("No answers to vote on")]
    NoCandidates,
}
