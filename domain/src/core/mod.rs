//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated query to pose to the boardroom
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
