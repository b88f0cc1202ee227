use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};

/// Port for persisting run artifacts.
pub trait ArtifactStore {
    /// Directory the artifacts are written into.
    fn output_dir(&self) -> &Path;

    /// Write `content` as `artifact`, replacing any existing file.
    ///
    /// Returns the path that was written.
    fn write_artifact(&self, artifact: Artifact, content: &str) -> Result<PathBuf, AppError>;
}
