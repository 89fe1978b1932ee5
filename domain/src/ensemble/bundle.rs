//! Result bundle assembled at the end of a boardroom run

use super::answer::{Answer, RoundResult};
use super::tally::VoteTally;
use super::vote::Ballot;
use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// Winner plus every raw answer, immutable once built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBundle {
    pub query: String,
    /// 1-based index into `all_answers`
    pub winner_index: usize,
    pub winner_provider: ProviderId,
    pub winner_text: String,
    pub winning_votes: usize,
    pub tally: VoteTally,
    pub ballots: Vec<Ballot>,
    pub all_answers: RoundResult,
}

impl ResultBundle {
    /// Pick the winner and build the bundle
    ///
    /// The winner is the most-voted answer that carries text (lowest index
    /// on ties). Votes for error answers still count in the tally. Only when
    /// no answer has text does the plain argmax decide.
    pub fn assemble(
        query: &Question,
        all_answers: RoundResult,
        tally: VoteTally,
        ballots: Vec<Ballot>,
    ) -> Result<Self, DomainError> {
        let winner_index = tally
            .winner_among(|i| all_answers.candidate(i).is_some_and(Answer::is_text))
            .or_else(|| tally.winner())
            .ok_or(DomainError::NoCandidates)?;

        let winner = all_answers
            .candidate(winner_index)
            .ok_or(DomainError::NoCandidates)?;

        Ok(Self {
            query: query.content().to_string(),
            winner_index,
            winner_provider: winner.provider.clone(),
            winner_text: winner.content().to_string(),
            winning_votes: tally.count(winner_index),
            tally,
            ballots,
            all_answers,
        })
    }

    pub fn winner(&self) -> Option<&Answer> {
        self.all_answers.candidate(self.winner_index)
    }

    /// False only when every provider failed in the answer round
    pub fn has_text_winner(&self) -> bool {
        self.winner().is_some_and(Answer::is_text)
    }

    pub fn counted_votes(&self) -> usize {
        self.tally.total()
    }

    pub fn dropped_votes(&self) -> usize {
        self.ballots.iter().filter(|b| b.choice().is_none()).count()
    }
}
