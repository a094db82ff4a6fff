use clap::Parser;

/// A CLI tool that generates pull request descriptions using AI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template file name, resolved relative to the prgen install directory
    #[arg(required_unless_present = "init_config")]
    pub template: Option<String>,

    /// Base branch to log and diff against
    #[arg(required_unless_present = "init_config")]
    pub base_branch: Option<String>,

    /// Use a specific AI model (defaults to gpt-4o)
    #[arg(long)]
    pub model: Option<String>,

    /// Adjust the creativity of the generated description (0.0 to 2.0)
    #[arg(short, long)]
    pub temperature: Option<f32>,

    /// Maximum number of tokens in the completion
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Number of context lines to show in the git diff
    #[arg(long)]
    pub context_lines: Option<u32>,

    /// Do not include `git status` output in the prompt
    #[arg(long, default_value_t = false)]
    pub no_status: bool,

    /// Print the composed prompt to stderr before calling the model
    #[arg(long, default_value_t = false)]
    pub show_prompt: bool,

    /// Add a hint to guide the AI in generating the description
    #[arg(long)]
    pub hint: Option<String>,

    /// Create a new configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Path to save the configuration file (defaults to .prgen.toml in current directory)
    #[arg(long)]
    pub config_path: Option<String>,
}

impl Args {
    pub fn new_from(args: impl Iterator<Item = String>) -> Self {
        Self::parse_from(args)
    }
}
