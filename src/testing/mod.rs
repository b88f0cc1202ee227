mod fake_completion_client;
mod memory_artifact_store;

pub use fake_completion_client::{EchoCompletionClient, FailingCompletionClient};
pub use memory_artifact_store::MemoryArtifactStore;
