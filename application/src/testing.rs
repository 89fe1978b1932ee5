//! Scripted provider adapters shared by the use case tests

use crate::ports::provider_adapter::{ProviderAdapter, ProviderError, ProviderFailure};
use crate::registry::ProviderRegistry;
use async_trait::async_trait;
use boardroom_domain::{CredentialSet, ProviderSpec};
use secrecy::{ExposeSecret, SecretString};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub(crate) enum Reply {
    Text(String),
    Fail(ProviderFailure),
    Hang,
    Panic,
}

/// Adapter replying from a script: one reply for the answer round and one
/// for the vote round (recognised by the vote prompt prefix)
pub(crate) struct ScriptedAdapter {
    spec: ProviderSpec,
    answer: Reply,
    vote: Reply,
    delay: Duration,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    credentials_seen: Mutex<Vec<String>>,
}

impl ScriptedAdapter {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            spec: ProviderSpec::native(id, format!("{}-model", id)),
            answer: Reply::Text(format!("answer from {}", id)),
            vote: Reply::Text("1".to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            credentials_seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn answering(id: &str, text: &str) -> Arc<Self> {
        Self::new(id).with_answer(text).shared()
    }

    pub(crate) fn with_answer(mut self, text: &str) -> Self {
        self.answer = Reply::Text(text.to_string());
        self
    }

    pub(crate) fn with_vote(mut self, raw: &str) -> Self {
        self.vote = Reply::Text(raw.to_string());
        self
    }

    pub(crate) fn with_answer_reply(mut self, reply: Reply) -> Self {
        self.answer = reply;
        self
    }

    /// Fail every call, in both rounds
    pub(crate) fn failing(mut self, failure: ProviderFailure) -> Self {
        self.answer = Reply::Fail(failure.clone());
        self.vote = Reply::Fail(failure);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn credentials_seen(&self) -> Vec<String> {
        self.credentials_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedAdapter {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    async fn invoke(
        &self,
        credential: &SecretString,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.credentials_seen
            .lock()
            .unwrap()
            .push(credential.expose_secret().to_string());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reply = if prompt.starts_with("Boardroom vote") {
            &self.vote
        } else {
            &self.answer
        };

        match reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(failure) => Err(ProviderError::new(self.spec.id.clone(), failure.clone())),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok("too late".to_string())
            }
            Reply::Panic => panic!("scripted adapter panic"),
        }
    }
}

/// Registry over the given adapters, in the given order
pub(crate) fn registry_of(adapters: &[Arc<ScriptedAdapter>]) -> Arc<ProviderRegistry> {
    let entries = adapters
        .iter()
        .map(|a| (a.spec().clone(), Arc::clone(a) as Arc<dyn ProviderAdapter>))
        .collect();
    Arc::new(ProviderRegistry::from_entries(entries).unwrap())
}

/// A credential `key-<id>` for every listed provider
pub(crate) fn credentials_for(ids: &[&str]) -> CredentialSet {
    ids.iter().fold(CredentialSet::new(), |creds, id| {
        creds.with(*id, format!("key-{}", id))
    })
}
