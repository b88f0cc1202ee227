use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};
use crate::ports::ArtifactStore;

/// In-memory artifact store recording writes in order.
pub struct MemoryArtifactStore {
    root: PathBuf,
    pub writes: RefCell<Vec<(Artifact, String)>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("out"), writes: RefCell::new(Vec::new()) }
    }

    pub fn written(&self) -> Vec<Artifact> {
        self.writes.borrow().iter().map(|(artifact, _)| *artifact).collect()
    }

    pub fn content(&self, artifact: Artifact) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(written, _)| *written == artifact)
            .map(|(_, content)| content.clone())
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn output_dir(&self) -> &Path {
        &self.root
    }

    fn write_artifact(&self, artifact: Artifact, content: &str) -> Result<PathBuf, AppError> {
        self.writes.borrow_mut().push((artifact, content.to_string()));
        Ok(self.root.join(artifact.file_name()))
    }
}
