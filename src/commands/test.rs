use ai_cost_advisor::config;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

fn enabled_label(enabled: bool) -> colored::ColoredString {
    if enabled {
        "enabled".green()
    } else {
        "disabled".red()
    }
}

/// Execute the test command
///
/// This validates the configuration file without starting the server
pub fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Testing configuration...".yellow());
    info!("Loading and validating configuration");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration test successful".green());
    println!();

    println!("{}", "Configuration Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Level".cyan(), cfg.server.log_level);
    println!("  {}: {}", "Log Format".cyan(), cfg.server.log_format);
    println!();

    println!("  {}: {}", "Advisor".cyan(), enabled_label(cfg.advisor.enabled));
    if cfg.advisor.enabled {
        println!("    Endpoint: {}", cfg.advisor.endpoint);
        println!("    Agent: {}", cfg.advisor.agent_id);
        println!("    Timeout: {}s", cfg.advisor.timeout_seconds);
    }
    println!();

    println!("  {}: {}", "Metrics".cyan(), enabled_label(cfg.metrics.enabled));
    if cfg.metrics.enabled {
        println!("    Endpoint: {}", cfg.metrics.endpoint);
    }
    println!();

    println!("  {}: {}", "Seeded Profiles".cyan(), cfg.profiles.len());
    for (idx, profile) in cfg.profiles.iter().enumerate() {
        println!("    {}. {} ({})", idx + 1, profile.id, profile.greeting_name());
    }

    info!("Configuration validation completed successfully");
    Ok(())
}
