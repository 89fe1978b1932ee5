//! Vote tallier
//!
//! Second round of a boardroom run: every active provider sees the numbered
//! answers and replies with the number of the best one.

use super::run_round::RoundExecutor;
use crate::ports::progress::ProgressNotifier;
use crate::registry::ActiveProvider;
use boardroom_domain::{
    AnswerOutcome, Ballot, Phase, PromptTemplate, Question, RoundResult, VoteTally,
};
use tracing::{debug, info};

/// Ballots and tally of one vote round
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub tally: VoteTally,
    pub ballots: Vec<Ballot>,
}

/// Runs the vote round and tallies it
#[derive(Debug, Clone)]
pub struct VoteTallier {
    executor: RoundExecutor,
}

impl VoteTallier {
    pub fn new(executor: RoundExecutor) -> Self {
        Self { executor }
    }

    /// Ask the same active providers to vote on `answers`
    ///
    /// Error answers are listed and votable. A provider may vote for its own
    /// answer. Unparsable or out-of-range votes, and voters that fail, are
    /// dropped without error and without retry.
    pub async fn run(
        &self,
        question: &Question,
        answers: &RoundResult,
        active: &[ActiveProvider],
        progress: &dyn ProgressNotifier,
    ) -> VoteOutcome {
        let candidates = answers.len();
        let prompt = PromptTemplate::vote_prompt(question, answers);

        let votes = self
            .executor
            .run(active, &prompt, Phase::Vote, progress)
            .await;

        let ballots = Self::ballots(&votes, candidates);
        let tally = VoteTally::from_ballots(candidates, &ballots);

        info!(
            "Vote round: {} counted, {} dropped",
            tally.total(),
            ballots.len() - tally.total()
        );

        VoteOutcome { tally, ballots }
    }

    /// Turn raw vote replies into ballots, one per voter in round order
    pub fn ballots(votes: &RoundResult, candidates: usize) -> Vec<Ballot> {
        votes
            .answers()
            .iter()
            .map(|vote| {
                let ballot = match &vote.outcome {
                    AnswerOutcome::Text(raw) => {
                        Ballot::from_reply(vote.provider.clone(), raw, candidates)
                    }
                    AnswerOutcome::Error(detail) => {
                        Ballot::abstained(vote.provider.clone(), detail.message.clone())
                    }
                };
                if let Ballot::Dropped { voter, reason } = &ballot {
                    debug!("Dropped vote from {}: {}", voter, reason);
                }
                ballot
            })
            .collect()
    }
}
