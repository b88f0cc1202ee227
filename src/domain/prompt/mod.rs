pub mod builder;
pub mod error;

pub use builder::{architecture_prompt, tasks_prompt};
pub use error::PromptError;
