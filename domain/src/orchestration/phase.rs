//! Phases of a boardroom run

use serde::{Deserialize, Serialize};

/// Phase of a boardroom run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Answer round - every active provider answers the query
    Answer,
    /// Vote round - every active provider picks the best numbered answer
    Vote,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Answer => "answer",
            Phase::Vote => "vote",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Answer => "Answer Round",
            Phase::Vote => "Vote Round",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
