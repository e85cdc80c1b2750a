use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use ai_cost_advisor::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logging settings come from the config file when it loads; a broken
    // file is reported by the command itself.
    let (log_level, log_format) = match config::load_config(&args.config) {
        Ok(cfg) => (cfg.server.log_level, cfg.server.log_format),
        Err(_) => ("info".to_string(), "text".to_string()),
    };
    init_tracing(&log_level, &log_format);

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Estimate {
            monthly_spend,
            service,
            calls,
            tokens,
            json,
        } => {
            commands::estimate::variable(monthly_spend, service, calls, tokens, json)?;
        }
        cli::Commands::Fixed {
            daily_cost,
            model,
            json,
        } => {
            commands::estimate::fixed(daily_cost, model, json)?;
        }
        cli::Commands::Catalog => commands::catalog::execute(),
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("AI Cost Advisor v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
