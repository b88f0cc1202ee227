//! Run configuration loading from an optional TOML file.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, VibeConfig};

/// Load the run configuration.
///
/// Without a path the built-in defaults are used. An explicit path that does
/// not exist is a configuration error.
pub fn load_config(path: Option<&Path>) -> Result<VibeConfig, AppError> {
    let Some(path) = path else {
        return Ok(VibeConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::config_error(format!("Config file not found: {}", path.display()))
        } else {
            AppError::Io(err)
        }
    })?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<VibeConfig, AppError> {
    let config: VibeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
