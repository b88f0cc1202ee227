use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store rooted at the output directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store for the given output directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn output_dir(&self) -> &Path {
        &self.root
    }

    fn write_artifact(&self, artifact: Artifact, content: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(artifact.file_name());
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "artifact written");
        Ok(path)
    }
}
