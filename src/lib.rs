pub use crate::ai::{AiError, OpenAiClient};
pub use crate::config::cli::Args;
pub use crate::config::defaults::example_config;
pub use crate::config::{Config, ConfigError};
pub use crate::git::{Git, GitError, RepoSnapshot};
pub use crate::templates::{load as load_template, load_from as load_template_from, TemplateError};

mod ai;
mod config;
mod git;
mod prompts;
mod templates;

/// Compose the prompt for one run from the template and the captured
/// repository snapshot.
pub fn compose_prompt(
    config: &Config,
    template: &str,
    snapshot: &RepoSnapshot,
    base_branch: &str,
) -> String {
    prompts::compose(
        template,
        snapshot,
        base_branch,
        &config.tracker_base_url,
        config.hint.as_deref(),
    )
}

/// Send the composed prompt to the model and return the trimmed description.
pub fn generate_description(
    config: &Config,
    client: &OpenAiClient,
    prompt: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    client.complete(&config.model, config.temperature, config.max_tokens, prompt)
}
