pub mod artifact;
pub mod configuration;
pub mod error;
pub mod prompt;

pub use artifact::Artifact;
pub use configuration::{
    CompletionConfig, Credential, GuidelinesConfig, GuidelinesPolicy, OutputConfig, VibeConfig,
};
pub use error::{AppError, CompletionError};
pub use prompt::{PromptError, architecture_prompt, tasks_prompt};
