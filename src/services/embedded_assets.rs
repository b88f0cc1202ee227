use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const DEFAULT_GUIDELINES: &str = "agents.md";
const INITIAL_PROMPT: &str = "initial_prompt.md";

/// Guidelines written when no template file is available.
pub fn default_guidelines() -> Result<&'static str, AppError> {
    asset_content(DEFAULT_GUIDELINES)
}

/// Fixed instruction for the first coding-agent session.
pub fn initial_prompt() -> Result<&'static str, AppError> {
    asset_content(INITIAL_PROMPT)
}

fn asset_content(path: &str) -> Result<&'static str, AppError> {
    ASSETS_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Configuration(format!("Missing embedded asset: {}", path)))
}
