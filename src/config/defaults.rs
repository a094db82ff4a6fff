/// Default values for configuration
pub mod defaults {
    // Git defaults
    pub const CONTEXT_LINES: u32 = 10;
    pub const INCLUDE_STATUS: bool = true;

    // AI defaults
    pub const DEFAULT_MODEL: &str = "gpt-4o";
    pub const TEMPERATURE: f32 = 0.5;
    pub const MAX_TOKENS: u32 = 1024;

    // Ticket-link defaults
    pub const TRACKER_BASE_URL: &str = "https://montaapp.atlassian.net/browse/";

    // File paths
    pub const DEFAULT_CONFIG_FILENAME: &str = ".prgen.toml";
    pub const GLOBAL_CONFIG_DIRNAME: &str = ".config/prgen";
    pub const GLOBAL_CONFIG_FILENAME: &str = "config.toml";
}

/// Example configuration for initialization
pub fn example_config() -> String {
    format!(
        r#"# prgen configuration file

# Git options
context_lines = {}
include_status = {}

# AI options
# model = "{}"  # Uncomment to set a specific model
# temperature = {}  # Uncomment to set a specific temperature
# max_tokens = {}

# Ticket options
tracker_base_url = "{}"

# You can add a default hint that will be used for every description
# hint = "Mention the deployment steps"
"#,
        defaults::CONTEXT_LINES,
        defaults::INCLUDE_STATUS,
        defaults::DEFAULT_MODEL,
        defaults::TEMPERATURE,
        defaults::MAX_TOKENS,
        defaults::TRACKER_BASE_URL,
    )
}
