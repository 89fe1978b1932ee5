//! Run Ensemble use case
//!
//! Orchestrates the full boardroom flow: answer round, vote round, result
//! assembly.

use super::run_round::RoundExecutor;
use super::tally_votes::VoteTallier;
use crate::config::EnsembleConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::registry::{ProviderRegistry, RegistryError};
use boardroom_domain::{
    CredentialSet, DomainError, Phase, PromptTemplate, ProviderId, Question, ResultBundle,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Voting needs at least two independent opinions
pub const MIN_ACTIVE_PROVIDERS: usize = 2;

/// Errors that halt a boardroom run
///
/// Provider failures and unusable votes are not here: they are recorded in
/// the result bundle as error answers and dropped ballots.
#[derive(Error, Debug)]
pub enum RunEnsembleError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(ProviderId),

    #[error("Need {required}+ API keys for boardroom voting.")]
    InsufficientProviders { active: usize, required: usize },

    #[error("Result assembly failed: {0}")]
    Assembly(#[from] DomainError),

    #[error(transparent)]
    Registry(RegistryError),
}

impl RunEnsembleError {
    /// Whether the caller can retry after supplying more credentials
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RunEnsembleError::InsufficientProviders { .. })
    }
}

impl From<RegistryError> for RunEnsembleError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::UnknownProvider(id) => RunEnsembleError::UnknownProvider(id),
            other => RunEnsembleError::Registry(other),
        }
    }
}

/// Input for the RunEnsemble use case
#[derive(Debug, Clone)]
pub struct RunEnsembleInput {
    pub question: Question,
    pub credentials: CredentialSet,
}

impl RunEnsembleInput {
    pub fn new(question: Question, credentials: CredentialSet) -> Self {
        Self {
            question,
            credentials,
        }
    }
}

/// Use case for running a boardroom vote
pub struct RunEnsembleUseCase {
    registry: Arc<ProviderRegistry>,
    executor: RoundExecutor,
}

impl RunEnsembleUseCase {
    pub fn new(registry: Arc<ProviderRegistry>, config: EnsembleConfig) -> Self {
        Self {
            registry,
            executor: RoundExecutor::new(config.provider_timeout),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunEnsembleInput) -> Result<ResultBundle, RunEnsembleError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunEnsembleInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResultBundle, RunEnsembleError> {
        self.registry.validate_credentials(&input.credentials)?;

        let active = self.registry.activate(&input.credentials);
        if active.len() < MIN_ACTIVE_PROVIDERS {
            return Err(RunEnsembleError::InsufficientProviders {
                active: active.len(),
                required: MIN_ACTIVE_PROVIDERS,
            });
        }

        info!(
            "Starting boardroom with {} providers: {}",
            active.len(),
            active
                .iter()
                .map(|a| a.id().as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        // Round 1: Answers
        let prompt = PromptTemplate::answer_prompt(&input.question);
        let answers = self
            .executor
            .run(&active, &prompt, Phase::Answer, progress)
            .await;

        // Round 2: Votes
        let tallier = VoteTallier::new(self.executor.clone());
        let outcome = tallier
            .run(&input.question, &answers, &active, progress)
            .await;

        let bundle =
            ResultBundle::assemble(&input.question, answers, outcome.tally, outcome.ballots)?;

        info!(
            "Boardroom decision: {} wins with {} votes",
            bundle.winner_provider, bundle.winning_votes
        );

        Ok(bundle)
    }
}
