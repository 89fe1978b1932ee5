//! Round executor
//!
//! Runs one concurrent round: the same prompt goes to every active provider
//! at once, and every provider yields exactly one [`Answer`].

use crate::ports::progress::ProgressNotifier;
use crate::ports::provider_adapter::{ProviderError, ProviderFailure};
use crate::registry::ActiveProvider;
use boardroom_domain::{Answer, Phase, RoundResult};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fans a prompt out to the active providers and gathers their answers
///
/// One tokio task per provider, each bounded by `provider_timeout`. A
/// failure, timeout or panic in one task becomes an error answer and never
/// cancels or delays its siblings. Answers come back in the order of
/// `active`, whatever order the providers finish in.
#[derive(Debug, Clone)]
pub struct RoundExecutor {
    provider_timeout: Duration,
}

impl RoundExecutor {
    pub fn new(provider_timeout: Duration) -> Self {
        Self { provider_timeout }
    }

    pub fn provider_timeout(&self) -> Duration {
        self.provider_timeout
    }

    /// Run one round and wait for every provider to finish
    pub async fn run(
        &self,
        active: &[ActiveProvider],
        prompt: &str,
        phase: Phase,
        progress: &dyn ProgressNotifier,
    ) -> RoundResult {
        info!("{}: dispatching to {} providers", phase, active.len());
        progress.on_phase_start(&phase, active.len());

        let prompt: Arc<str> = Arc::from(prompt);

        // Each handle is a slot reserved at dispatch time
        let handles: Vec<_> = active
            .iter()
            .map(|provider| {
                let adapter = Arc::clone(provider.adapter());
                let credential = provider.credential.clone();
                let id = provider.id().clone();
                let prompt = Arc::clone(&prompt);
                let timeout = self.provider_timeout;

                tokio::spawn(async move {
                    match tokio::time::timeout(timeout, adapter.invoke(&credential, &prompt)).await
                    {
                        Ok(result) => result,
                        Err(_) => Err(ProviderError::new(id, ProviderFailure::Timeout(timeout))),
                    }
                })
            })
            .collect();

        let answers = join_all(handles.into_iter().zip(active).map(
            |(handle, provider)| async move {
                let id = provider.id().clone();
                let answer = match handle.await {
                    Ok(Ok(text)) => {
                        debug!("{} answered ({} chars)", id, text.len());
                        Answer::text(id, text)
                    }
                    Ok(Err(e)) => {
                        warn!("{} failed: {}", id, e.cause);
                        Answer::error(id, e.cause)
                    }
                    Err(e) => {
                        warn!("{} task aborted: {}", id, e);
                        let cause = if e.is_panic() {
                            "provider task panicked"
                        } else {
                            "provider task cancelled"
                        };
                        Answer::error(id, cause)
                    }
                };
                progress.on_task_complete(&phase, provider.id(), answer.is_text());
                answer
            },
        ))
        .await;

        progress.on_phase_complete(&phase);

        let round = RoundResult::new(answers);
        info!(
            "{}: {} answered, {} failed",
            phase,
            round.successful().count(),
            round.failed().count()
        );
        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::testing::{Reply, ScriptedAdapter, credentials_for, registry_of};
    use boardroom_domain::ProviderId;
    use std::sync::Mutex;

    fn executor() -> RoundExecutor {
        RoundExecutor::new(Duration::from_secs(5))
    }

    fn texts(round: &RoundResult) -> Vec<String> {
        round
            .answers()
            .iter()
            .map(|a| a.content().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_results_follow_dispatch_order_not_arrival() {
        // first provider is slowest, last is fastest
        let slow_first = vec![
            ScriptedAdapter::new("openai")
                .with_answer("A")
                .with_delay(Duration::from_millis(120))
                .shared(),
            ScriptedAdapter::new("gemini")
                .with_answer("B")
                .with_delay(Duration::from_millis(60))
                .shared(),
            ScriptedAdapter::new("mistral").with_answer("C").shared(),
        ];
        // same inputs, reversed latencies
        let fast_first = vec![
            ScriptedAdapter::new("openai").with_answer("A").shared(),
            ScriptedAdapter::new("gemini")
                .with_answer("B")
                .with_delay(Duration::from_millis(60))
                .shared(),
            ScriptedAdapter::new("mistral")
                .with_answer("C")
                .with_delay(Duration::from_millis(120))
                .shared(),
        ];

        let creds = credentials_for(&["openai", "gemini", "mistral"]);
        let mut rounds = Vec::new();
        for adapters in [slow_first, fast_first] {
            let registry = registry_of(&adapters);
            let active = registry.activate(&creds);
            rounds.push(executor().run(&active, "q", Phase::Answer, &NoProgress).await);
        }

        assert_eq!(rounds[0], rounds[1]);
        assert_eq!(texts(&rounds[0]), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_failure_does_not_block_others() {
        let adapters = vec![
            ScriptedAdapter::answering("openai", "A"),
            ScriptedAdapter::new("gemini")
                .failing(ProviderFailure::Authentication("HTTP 401".to_string()))
                .shared(),
            ScriptedAdapter::answering("mistral", "C"),
        ];
        let registry = registry_of(&adapters);
        let active = registry.activate(&credentials_for(&["openai", "gemini", "mistral"]));

        let round = executor().run(&active, "q", Phase::Answer, &NoProgress).await;

        assert_eq!(round.len(), 3);
        assert_eq!(round.successful().count(), 2);
        let failed = round.candidate(2).unwrap();
        assert_eq!(failed.provider, ProviderId::from("gemini"));
        assert_eq!(
            failed.content(),
            "Error from GEMINI: Authentication failed: HTTP 401"
        );
    }

    #[tokio::test]
    async fn test_hung_provider_times_out() {
        let adapters = vec![
            ScriptedAdapter::answering("openai", "A"),
            ScriptedAdapter::new("gemini")
                .with_answer_reply(Reply::Hang)
                .shared(),
        ];
        let registry = registry_of(&adapters);
        let active = registry.activate(&credentials_for(&["openai", "gemini"]));

        let round = RoundExecutor::new(Duration::from_millis(50))
            .run(&active, "q", Phase::Answer, &NoProgress)
            .await;

        assert_eq!(round.candidate(1).unwrap().as_text(), Some("A"));
        let timed_out = round.candidate(2).unwrap();
        assert!(timed_out.content().contains("Timeout"));
    }

    #[tokio::test]
    async fn test_panicking_provider_becomes_error_answer() {
        let adapters = vec![
            ScriptedAdapter::new("openai")
                .with_answer_reply(Reply::Panic)
                .shared(),
            ScriptedAdapter::answering("gemini", "B"),
        ];
        let registry = registry_of(&adapters);
        let active = registry.activate(&credentials_for(&["openai", "gemini"]));

        let round = executor().run(&active, "q", Phase::Answer, &NoProgress).await;

        assert_eq!(
            round.candidate(1).unwrap().content(),
            "Error from OPENAI: provider task panicked"
        );
        assert_eq!(round.candidate(2).unwrap().as_text(), Some("B"));
    }

    #[tokio::test]
    async fn test_error_message_never_contains_credential() {
        let adapters = vec![
            ScriptedAdapter::new("openai")
                .failing(ProviderFailure::RequestFailed("HTTP 500".to_string()))
                .shared(),
            ScriptedAdapter::answering("gemini", "B"),
        ];
        let registry = registry_of(&adapters);
        let active = registry.activate(&credentials_for(&["openai", "gemini"]));

        let round = executor().run(&active, "q", Phase::Answer, &NoProgress).await;

        assert_eq!(adapters[0].credentials_seen(), vec!["key-openai"]);
        for answer in round.answers() {
            assert!(!answer.content().contains("key-openai"));
        }
    }

    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {} {}", phase.as_str(), total_tasks));
        }

        fn on_task_complete(&self, _phase: &Phase, provider: &ProviderId, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {} {}", provider, success));
        }

        fn on_phase_complete(&self, phase: &Phase) {
            self.events
                .lock()
                .unwrap()
                .push(format!("end {}", phase.as_str()));
        }
    }

    #[tokio::test]
    async fn test_progress_events() {
        let adapters = vec![
            ScriptedAdapter::answering("openai", "A"),
            ScriptedAdapter::new("gemini")
                .failing(ProviderFailure::Connection("refused".to_string()))
                .shared(),
        ];
        let registry = registry_of(&adapters);
        let active = registry.activate(&credentials_for(&["openai", "gemini"]));
        let progress = RecordingProgress {
            events: Mutex::new(Vec::new()),
        };

        executor().run(&active, "q", Phase::Vote, &progress).await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events.first().unwrap(), "start vote 2");
        assert_eq!(events.last().unwrap(), "end vote");
        assert!(events.contains(&"done openai true".to_string()));
        assert!(events.contains(&"done gemini false".to_string()));
    }
}
