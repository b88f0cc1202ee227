mod artifact_store;
mod completion_client;

pub use artifact_store::ArtifactStore;
pub use completion_client::{CompletionClient, MockCompletionClient};
