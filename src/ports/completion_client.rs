//! Completion service port definition.

use crate::domain::{Artifact, CompletionError};

/// Port for text-completion operations.
pub trait CompletionClient {
    /// Send a single user prompt for `artifact` and return the generated text.
    fn complete(&self, artifact: Artifact, prompt: &str) -> Result<String, CompletionError>;
}

/// Offline client that drafts a placeholder document around the prompt.
///
/// Used by `--mock` runs, which need no credential and make no network calls.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, artifact: Artifact, prompt: &str) -> Result<String, CompletionError> {
        tracing::info!(%artifact, prompt_chars = prompt.len(), "mock completion");
        Ok(format!(
            "# {}\n\n[LLM will generate the {} here based on the prompt below]\n\n---\n**Prompt for LLM:**\n```\n{}\n```\n",
            artifact.title(),
            artifact.title().to_lowercase(),
            prompt
        ))
    }
}
