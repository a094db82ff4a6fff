use colored::*;
use dotenv::dotenv;
use prgen::{Args, Config, Git, OpenAiClient};
use std::{env, fs, process};

fn main() {
    dotenv().ok(); // Load .env file if it exists
    let args = Args::new_from(env::args());

    if args.init_config {
        let path = args
            .config_path
            .clone()
            .unwrap_or_else(|| ".prgen.toml".to_string());
        if let Err(e) = fs::write(&path, prgen::example_config()) {
            eprintln!("{}", "Error writing configuration file:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
        println!("{} {}", "Created configuration file:".green().bold(), path);
        return;
    }

    // clap enforces these unless --init-config was given
    let (template_name, base_branch) = match (&args.template, &args.base_branch) {
        (Some(template), Some(base_branch)) => (template.clone(), base_branch.clone()),
        _ => {
            eprintln!(
                "{}",
                "A template file and a base branch are required".red().bold()
            );
            process::exit(1);
        }
    };

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", "Error loading configuration:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Credential check comes first, before any git subprocess or network call
    let client = match OpenAiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", "Error:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let template = match prgen::load_template(&template_name) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("{}", "Error loading template:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let repo = Git::new(".");
    let snapshot = match repo.snapshot(&base_branch, config.context_lines, config.include_status) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{}", "Error capturing repository state:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let prompt = prgen::compose_prompt(&config, &template, &snapshot, &base_branch);
    if config.show_prompt {
        eprintln!("{}", "Composed prompt:".blue().bold());
        eprintln!("{}", prompt);
    }

    match prgen::generate_description(&config, &client, &prompt) {
        Ok(description) => println!("{}", description),
        Err(e) => {
            eprintln!("{}", "Error generating description:".red().bold());
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
