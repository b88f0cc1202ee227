use thiserror::Error;

/// Errors raised while rendering a prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// Failed to render a template with the provided context.
    #[error("Failed to render prompt template '{template}': {reason}")]
    TemplateRenderError { template: String, reason: String },
}
