//! The generation run: architecture, tasks, guidelines, initial prompt.
//!
//! Steps run strictly in order and the first failure aborts the run.
//! Artifacts written before a failure stay on disk.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, Artifact, GuidelinesPolicy, architecture_prompt, tasks_prompt};
use crate::ports::{ArtifactStore, CompletionClient};
use crate::services::{GuidelinesSource, embedded_assets, load_input, resolve_guidelines};

/// User-supplied project description, loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInputs {
    pub product_description: String,
    pub tools_list: String,
}

impl ProjectInputs {
    /// Load both input files. Either one missing fails the run.
    pub fn load(product_file: &Path, tools_file: &Path) -> Result<Self, AppError> {
        let product_description = load_input(product_file)?;
        let tools_list = load_input(tools_file)?;
        Ok(Self { product_description, tools_list })
    }
}

/// Per-run settings resolved from configuration and CLI flags.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub guidelines_path: PathBuf,
    pub guidelines_policy: GuidelinesPolicy,
    pub initial_prompt: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output_dir: PathBuf,
    /// Paths written, in write order.
    pub written: Vec<PathBuf>,
    pub guidelines_source: GuidelinesSource,
}

/// Request the architecture document for the project.
pub fn generate_architecture(
    client: &impl CompletionClient,
    inputs: &ProjectInputs,
) -> Result<String, AppError> {
    let prompt = architecture_prompt(&inputs.product_description, &inputs.tools_list)?;
    Ok(client.complete(Artifact::Architecture, &prompt)?)
}

/// Request the task plan for an architecture document.
pub fn generate_tasks(client: &impl CompletionClient, architecture: &str) -> Result<String, AppError> {
    let prompt = tasks_prompt(architecture)?;
    Ok(client.complete(Artifact::Tasks, &prompt)?)
}

pub fn execute<C: CompletionClient, S: ArtifactStore>(
    ctx: &AppContext<C, S>,
    inputs: &ProjectInputs,
    settings: &GenerateSettings,
) -> Result<GenerateOutcome, AppError> {
    let mut written = Vec::new();

    println!("Product: {}", preview(&inputs.product_description));
    println!("Tools: {}", preview(&inputs.tools_list));
    println!("Output directory: {}\n", ctx.store().output_dir().display());

    println!("Step 1: Generating {}...", Artifact::Architecture);
    let architecture = generate_architecture(ctx.client(), inputs)?;
    written.push(save(ctx.store(), Artifact::Architecture, &architecture)?);

    println!("Step 2: Generating {}...", Artifact::Tasks);
    let tasks = generate_tasks(ctx.client(), &architecture)?;
    written.push(save(ctx.store(), Artifact::Tasks, &tasks)?);

    println!("Step 3: Creating {}...", Artifact::Agents);
    let guidelines = resolve_guidelines(&settings.guidelines_path, settings.guidelines_policy)?;
    written.push(save(ctx.store(), Artifact::Agents, &guidelines.content)?);

    if settings.initial_prompt {
        println!("Step 4: Creating {}...", Artifact::InitialPrompt);
        written.push(save(ctx.store(), Artifact::InitialPrompt, embedded_assets::initial_prompt()?)?);
    }

    Ok(GenerateOutcome {
        output_dir: ctx.store().output_dir().to_path_buf(),
        written,
        guidelines_source: guidelines.source,
    })
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 50;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn save(store: &impl ArtifactStore, artifact: Artifact, content: &str) -> Result<PathBuf, AppError> {
    let path = store.write_artifact(artifact, content)?;
    println!("Created: {}", path.display());
    Ok(path)
}
