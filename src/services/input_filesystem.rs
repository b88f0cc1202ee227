use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;

/// Read a user-supplied input file and return its trimmed text.
pub fn load_input(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.trim().to_string()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(AppError::InputNotFound(path.to_path_buf()))
        }
        Err(source) => Err(AppError::InputUnreadable { path: path.to_path_buf(), source }),
    }
}
