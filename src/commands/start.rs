use anyhow::Result;
use ai_cost_advisor::{config, server};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration and serves until SIGTERM/SIGINT.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting AI Cost Advisor in foreground mode...".green());

    let cfg = config::load_config(config_path)?;
    info!(config = %config_path.display(), "Starting AI Cost Advisor");

    server::start_server(cfg, config_path.to_path_buf()).await?;

    Ok(())
}
