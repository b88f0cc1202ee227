use crate::ports::{ArtifactStore, CompletionClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient, S: ArtifactStore> {
    client: C,
    store: S,
}

impl<C: CompletionClient, S: ArtifactStore> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(client: C, store: S) -> Self {
        Self { client, store }
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
