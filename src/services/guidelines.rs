//! Agent guidelines template loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, GuidelinesPolicy};
use crate::services::embedded_assets;

const TEMPLATE_FILE: &str = "agents.md";

/// Where the guidelines text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidelinesSource {
    /// Read from a template file on disk.
    Template(PathBuf),
    /// Embedded default used because the template was missing.
    Fallback,
}

/// Guidelines text ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidelines {
    pub content: String,
    pub source: GuidelinesSource,
}

/// Default template location: `agents.md` next to the running executable.
pub fn default_template_path() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        AppError::config_error(format!("Executable has no parent directory: {}", exe.display()))
    })?;
    Ok(dir.join(TEMPLATE_FILE))
}

/// Read the guidelines template, failing with a not-found error when absent.
pub fn load_guidelines(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(AppError::GuidelinesNotFound(path.to_path_buf()))
        }
        Err(source) => Err(AppError::GuidelinesUnreadable { path: path.to_path_buf(), source }),
    }
}

/// Load the template and apply the missing-template policy.
///
/// Only a missing file triggers the fallback; other read failures propagate.
pub fn resolve_guidelines(path: &Path, policy: GuidelinesPolicy) -> Result<Guidelines, AppError> {
    match load_guidelines(path) {
        Ok(content) => {
            Ok(Guidelines { content, source: GuidelinesSource::Template(path.to_path_buf()) })
        }
        Err(AppError::GuidelinesNotFound(_)) if policy == GuidelinesPolicy::Fallback => {
            tracing::info!(path = %path.display(), "guidelines template missing, using embedded default");
            Ok(Guidelines {
                content: embedded_assets::default_guidelines()?.to_string(),
                source: GuidelinesSource::Fallback,
            })
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn template_file_is_copied_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("agents.md");
        fs::write(&path, "# Team rules\n\n- run tests\n").unwrap();

        let guidelines = resolve_guidelines(&path, GuidelinesPolicy::Require).unwrap();

        assert_eq!(guidelines.content, "# Team rules\n\n- run tests\n");
        assert_eq!(guidelines.source, GuidelinesSource::Template(path));
    }

    #[test]
    fn missing_template_falls_back_to_embedded_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("agents.md");

        let guidelines = resolve_guidelines(&path, GuidelinesPolicy::Fallback).unwrap();

        assert_eq!(guidelines.source, GuidelinesSource::Fallback);
        assert_eq!(guidelines.content, embedded_assets::default_guidelines().unwrap());
    }

    #[test]
    fn missing_template_fails_when_required() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("agents.md");

        let err = resolve_guidelines(&path, GuidelinesPolicy::Require).unwrap_err();

        assert!(matches!(&err, AppError::GuidelinesNotFound(p) if p == &path));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn unreadable_template_is_not_masked_by_fallback() {
        let dir = TempDir::new().unwrap();

        let err = resolve_guidelines(dir.path(), GuidelinesPolicy::Fallback).unwrap_err();

        assert!(matches!(&err, AppError::GuidelinesUnreadable { path, .. } if path == dir.path()));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn default_template_path_sits_next_to_executable() {
        let path = default_template_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "agents.md");
    }
}
