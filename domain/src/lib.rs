//! Domain layer for boardroom
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Boardroom
//!
//! Several independent providers answer the same query, then vote on which
//! answer is best. The most-voted answer wins; ties go to the earliest
//! provider in registry order.
//!
//! ## Rounds
//!
//! - **Answer round**: every active provider answers the query
//! - **Vote round**: every active provider replies with the number of the
//!   best answer, its own included

pub mod config;
pub mod core;
pub mod ensemble;
pub mod orchestration;
pub mod prompt;
pub mod provider;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question, string::truncate};
pub use ensemble::{
    Answer, AnswerOutcome, Ballot, ErrorDetail, ResultBundle, RoundResult, VoteParseFailure,
    VoteTally, parse_vote,
};
pub use orchestration::Phase;
pub use prompt::PromptTemplate;
pub use provider::{CredentialSet, ProviderId, ProviderSpec, Transport, default_specs};
