//! Vote parsing and ballots

use crate::core::string::truncate;
use crate::provider::ProviderId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a vote was not counted. Never surfaced as an error to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoteParseFailure {
    #[error("not a number: {raw:?}")]
    NotANumber { raw: String },

    #[error("{value} is outside 1..={candidates}")]
    OutOfRange { value: i64, candidates: usize },

    #[error("no vote: {message}")]
    NoVote { message: String },
}

/// Parse a reply into a 1-based candidate index in `1..=candidates`
///
/// Surrounding whitespace is ignored; anything else that is not a bare
/// integer fails.
pub fn parse_vote(raw: &str, candidates: usize) -> Result<usize, VoteParseFailure> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| VoteParseFailure::NotANumber {
        raw: truncate(trimmed, 40),
    })?;

    if value >= 1 && (value as u64) <= candidates as u64 {
        Ok(value as usize)
    } else {
        Err(VoteParseFailure::OutOfRange { value, candidates })
    }
}

/// One voter's outcome in the vote round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Ballot {
    Counted { voter: ProviderId, choice: usize },
    Dropped { voter: ProviderId, reason: VoteParseFailure },
}

impl Ballot {
    /// Parse a vote reply into a ballot
    pub fn from_reply(voter: ProviderId, raw: &str, candidates: usize) -> Self {
        match parse_vote(raw, candidates) {
            Ok(choice) => Ballot::Counted { voter, choice },
            Err(reason) => Ballot::Dropped { voter, reason },
        }
    }

    /// Ballot for a voter whose provider failed during the vote round
    pub fn abstained(voter: ProviderId, message: impl Into<String>) -> Self {
        Ballot::Dropped {
            voter,
            reason: VoteParseFailure::NoVote {
                message: message.into(),
            },
        }
    }

    pub fn voter(&self) -> &ProviderId {
        match self {
            Ballot::Counted { voter, .. } | Ballot::Dropped { voter, .. } => voter,
        }
    }

    pub fn choice(&self) -> Option<usize> {
        match self {
            Ballot::Counted { choice, .. } => Some(*choice),
            Ballot::Dropped { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_padded() {
        assert_eq!(parse_vote("2", 3), Ok(2));
        assert_eq!(parse_vote("  1\n", 3), Ok(1));
        assert_eq!(parse_vote("+3", 3), Ok(3));
    }

    #[test]
    fn test_parse_rejects_words() {
        assert!(matches!(
            parse_vote("banana", 2),
            Err(VoteParseFailure::NotANumber { .. })
        ));
        assert!(matches!(
            parse_vote("I vote for 2", 2),
            Err(VoteParseFailure::NotANumber { .. })
        ));
        assert!(parse_vote("", 2).is_err());
    }

    #[test]
    fn test_parse_range_bounds() {
        assert_eq!(
            parse_vote("7", 2),
            Err(VoteParseFailure::OutOfRange {
                value: 7,
                candidates: 2
            })
        );
        assert!(parse_vote("0", 2).is_err());
        assert!(parse_vote("-1", 2).is_err());
        assert_eq!(parse_vote("2", 2), Ok(2));
    }

    #[test]
    fn test_ballot_from_reply() {
        let voter = ProviderId::from("openai");
        let counted = Ballot::from_reply(voter.clone(), "1", 2);
        assert_eq!(counted.choice(), Some(1));

        let dropped = Ballot::from_reply(voter.clone(), "banana", 2);
        assert_eq!(dropped.choice(), None);
        assert_eq!(dropped.voter(), &voter);
    }

    #[test]
    fn test_long_garbage_is_truncated() {
        let raw = "x".repeat(500);
        match parse_vote(&raw, 2) {
            Err(VoteParseFailure::NotANumber { raw }) => assert!(raw.len() <= 40),
            other => panic!("unexpected {:?}", other),
        }
    }
}
