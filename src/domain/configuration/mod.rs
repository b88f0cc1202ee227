pub mod credential;
pub mod vibe_config;

pub use credential::Credential;
pub use vibe_config::{
    CompletionConfig, GuidelinesConfig, GuidelinesPolicy, OutputConfig, VibeConfig,
};
