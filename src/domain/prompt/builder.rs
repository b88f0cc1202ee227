//! Prompt construction for the architecture and tasks requests.
//!
//! Templates are embedded at compile time and rendered with minijinja.
//! Inputs are inserted verbatim: no escaping, no validation, empty strings allowed.

use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};

use super::error::PromptError;

const ARCHITECTURE_TEMPLATE: &str = include_str!("../../assets/prompts/architecture.md");
const TASKS_TEMPLATE: &str = include_str!("../../assets/prompts/tasks.md");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Build the prompt requesting the project architecture document.
pub fn architecture_prompt(
    product_description: &str,
    tools_list: &str,
) -> Result<String, PromptError> {
    render(
        "architecture.md",
        ARCHITECTURE_TEMPLATE,
        context! { product_description => product_description, tools_list => tools_list },
    )
}

/// Build the prompt requesting the ordered task list for an architecture.
pub fn tasks_prompt(architecture: &str) -> Result<String, PromptError> {
    render("tasks.md", TASKS_TEMPLATE, context! { architecture => architecture })
}

fn render(
    template_name: &str,
    template: &str,
    ctx: minijinja::Value,
) -> Result<String, PromptError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    });

    env.render_named_str(template_name, template, ctx).map_err(|err| {
        PromptError::TemplateRenderError {
            template: template_name.to_string(),
            reason: err.to_string(),
        }
    })
}
