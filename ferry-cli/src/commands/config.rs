//! Config command - print the effective configuration

use ferry_core::{Config, Secrets};

pub fn show_config(config: &Config) {
    println!("Ferry Configuration");
    println!("===================");
    println!();
    println!("GitHub Settings:");
    println!("  api_url: {}", config.github.api_url);
    println!("  user_agent: {}", config.github.user_agent);
    println!("  page_size: {}", config.github.page_size);
    match config.github.page_limit() {
        Some(limit) => println!("  max_pages: {}", limit),
        None => println!("  max_pages: (unbounded)"),
    }
    match config.github.request_timeout {
        Some(timeout) => println!("  request_timeout: {:?}", timeout),
        None => println!("  request_timeout: (client default)"),
    }
    println!();

    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }

    if let Some(path) = Secrets::default_secrets_path() {
        println!("Secrets file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - token must come from --token or GITHUB_TOKEN)");
        }
    }
}
