use ai_cost_advisor::{
    config::{self, Config},
    logging::mask_secret,
};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen Address: {}:{}", cfg.server.host, cfg.server.port);
    println!(
        "  Advisor: {}",
        if cfg.advisor.enabled { "enabled" } else { "disabled" }
    );
    println!("  Seeded Profiles: {}", cfg.profiles.len());

    info!("Configuration validation successful");
    Ok(())
}

/// Mask the advisor API key and profile emails for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();

    if !sanitized.advisor.api_key.is_empty() {
        sanitized.advisor.api_key = mask_secret(&sanitized.advisor.api_key);
    }
    for profile in &mut sanitized.profiles {
        profile.email = mask_email(&profile.email);
    }

    sanitized
}

/// "jordan@example.com" -> "j***@example.com"
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
