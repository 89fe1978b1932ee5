//! Answer and round result value objects

use crate::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// Why a provider produced no text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub provider: ProviderId,
    /// Caller-facing text naming the provider and the cause
    pub message: String,
}

impl ErrorDetail {
    /// Build the detail from a failure cause, e.g. `Error from GEMINI: Timeout after 30s`
    pub fn new(provider: ProviderId, cause: impl std::fmt::Display) -> Self {
        let message = format!("Error from {}: {}", provider.display_name(), cause);
        Self { provider, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Text(String),
    Error(ErrorDetail),
}

/// One provider's output for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub provider: ProviderId,
    #[serde(flatten)]
    pub outcome: AnswerOutcome,
}

impl Answer {
    pub fn text(provider: ProviderId, text: impl Into<String>) -> Self {
        Self {
            provider,
            outcome: AnswerOutcome::Text(text.into()),
        }
    }

    pub fn error(provider: ProviderId, cause: impl std::fmt::Display) -> Self {
        let detail = ErrorDetail::new(provider.clone(), cause);
        Self {
            provider,
            outcome: AnswerOutcome::Error(detail),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.outcome, AnswerOutcome::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.outcome {
            AnswerOutcome::Text(text) => Some(text),
            AnswerOutcome::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorDetail> {
        match &self.outcome {
            AnswerOutcome::Text(_) => None,
            AnswerOutcome::Error(detail) => Some(detail),
        }
    }

    /// The text, or the error message for a failed answer
    pub fn content(&self) -> &str {
        match &self.outcome {
            AnswerOutcome::Text(text) => text,
            AnswerOutcome::Error(detail) => &detail.message,
        }
    }
}

/// Answers of one round, in dispatch order (never arrival order)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundResult {
    answers: Vec<Answer>,
}

impl RoundResult {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answer at a 1-based candidate index
    pub fn candidate(&self, index: usize) -> Option<&Answer> {
        index.checked_sub(1).and_then(|i| self.answers.get(i))
    }

    /// `(index, answer)` pairs with 1-based indices
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Answer)> {
        self.answers.iter().enumerate().map(|(i, a)| (i + 1, a))
    }

    pub fn successful(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_text())
    }

    pub fn failed(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| !a.is_text())
    }

    pub fn into_answers(self) -> Vec<Answer> {
        self.answers
    }
}

impl FromIterator<Answer> for RoundResult {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
