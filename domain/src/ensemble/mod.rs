//! Ensemble domain
//!
//! The data produced by one boardroom run:
//!
//! ```text
//! Answer round ──▶ RoundResult ──▶ vote prompt ──▶ Vote round
//!                                                    │
//!                       ResultBundle ◀── VoteTally ◀─┘ (Ballots)
//! ```
//!
//! Everything here is pure: no I/O, no async. Numbering is 1-based and
//! follows dispatch order, which is registry order.

pub mod answer;
pub mod bundle;
pub mod tally;
pub mod vote;

pub use answer::{Answer, AnswerOutcome, ErrorDetail, RoundResult};
pub use bundle::ResultBundle;
pub use tally::VoteTally;
pub use vote::{Ballot, VoteParseFailure, parse_vote};
