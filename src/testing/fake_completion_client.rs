use std::sync::{Arc, Mutex};

use crate::domain::{Artifact, CompletionError};
use crate::ports::CompletionClient;

/// Completion client that returns each prompt unchanged and records it.
#[derive(Clone, Default)]
pub struct EchoCompletionClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub artifacts: Arc<Mutex<Vec<Artifact>>>,
}

impl EchoCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn received_artifacts(&self) -> Vec<Artifact> {
        self.artifacts.lock().unwrap().clone()
    }
}

impl CompletionClient for EchoCompletionClient {
    fn complete(&self, artifact: Artifact, prompt: &str) -> Result<String, CompletionError> {
        self.artifacts.lock().unwrap().push(artifact);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(prompt.to_string())
    }
}

/// Completion client that succeeds for the first `succeed_calls` requests, then fails.
#[derive(Clone)]
pub struct FailingCompletionClient {
    pub succeed_calls: usize,
    pub calls: Arc<Mutex<usize>>,
}

impl FailingCompletionClient {
    pub fn after(succeed_calls: usize) -> Self {
        Self { succeed_calls, calls: Arc::new(Mutex::new(0)) }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CompletionClient for FailingCompletionClient {
    fn complete(&self, _artifact: Artifact, prompt: &str) -> Result<String, CompletionError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls > self.succeed_calls {
            return Err(CompletionError::Api { status: 503, body: "service unavailable".into() });
        }
        Ok(format!("completion for: {}", prompt))
    }
}
