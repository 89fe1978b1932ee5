//! Prompt templates for the boardroom flow

use crate::core::question::Question;
use crate::ensemble::RoundResult;

/// Templates for generating prompts at each round
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the answer round: the query, verbatim
    pub fn answer_prompt(question: &Question) -> String {
        question.content().to_string()
    }

    /// Prompt for the vote round
    ///
    /// Every answer is listed, error answers included, numbered from 1 in
    /// round order. The reply must be a bare integer in `1..=N`.
    pub fn vote_prompt(question: &Question, round: &RoundResult) -> String {
        let proposals = round
            .numbered()
            .map(|(i, answer)| {
                format!(
                    "{}. {}: {}",
                    i,
                    answer.provider.display_name(),
                    answer.content()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Boardroom vote for best answer to: '{}'\nProposals:\n{}\n\
             Vote for the most accurate, clear, relevant answer. Reply ONLY with the number (1-{}).",
            question.content(),
            proposals,
            round.len()
        )
    }
}
