//! vibe: scaffold architecture, task, and agent guideline documents for a project
//! by sending its description to an LLM completion API.

pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use app::{
    AppContext,
    commands::generate::{self as generate_command, GenerateSettings, ProjectInputs},
    config::load_config,
};
use ports::{CompletionClient, MockCompletionClient};
use services::{FilesystemArtifactStore, HttpCompletionClient, default_template_path};

pub use app::commands::generate::GenerateOutcome;
pub use domain::{
    AppError, Artifact, CompletionConfig, CompletionError, Credential, GuidelinesPolicy,
    VibeConfig, architecture_prompt, tasks_prompt,
};
pub use services::GuidelinesSource;

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory the artifacts are written into. Created if missing.
    pub output_dir: PathBuf,
    /// File containing the product description.
    pub product_file: PathBuf,
    /// File containing the tools list.
    pub tools_file: PathBuf,
    /// Optional TOML configuration file.
    pub config_path: Option<PathBuf>,
    /// Draft documents offline instead of calling the completion service.
    pub mock: bool,
    /// Fail instead of falling back when the guidelines template is missing.
    pub require_guidelines: bool,
}

/// Generate the planning documents.
///
/// The credential is resolved before any input file is read, so a missing
/// key aborts the run without touching the filesystem.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let config = load_config(options.config_path.as_deref())?;

    if options.mock {
        return generate_with(MockCompletionClient, options, &config);
    }

    let client = HttpCompletionClient::from_env(&config.completion)?;
    generate_with(client, options, &config)
}

/// Generate the planning documents with a caller-supplied completion client.
pub fn generate_with<C: CompletionClient>(
    client: C,
    options: &GenerateOptions,
    config: &VibeConfig,
) -> Result<GenerateOutcome, AppError> {
    let settings = resolve_settings(options, config)?;
    let inputs = ProjectInputs::load(&options.product_file, &options.tools_file)?;

    tracing::info!(
        output_dir = %options.output_dir.display(),
        product_chars = inputs.product_description.len(),
        tools_chars = inputs.tools_list.len(),
        "starting generation run"
    );
    let ctx = AppContext::new(client, FilesystemArtifactStore::new(&options.output_dir));
    generate_command::execute(&ctx, &inputs, &settings)
}

fn resolve_settings(
    options: &GenerateOptions,
    config: &VibeConfig,
) -> Result<GenerateSettings, AppError> {
    let guidelines_path = match &config.guidelines.path {
        Some(path) => path.clone(),
        None => default_template_path()?,
    };
    let guidelines_policy = if options.require_guidelines {
        GuidelinesPolicy::Require
    } else {
        config.guidelines.policy
    };

    Ok(GenerateSettings {
        guidelines_path,
        guidelines_policy,
        initial_prompt: config.output.initial_prompt,
    })
}
