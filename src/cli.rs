use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "advisor", version, about = "AI Cost Advisor")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true, env = "COST_ADVISOR_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the API server (default)
    Start,

    /// Estimate monthly savings with the variable-factor calculator
    Estimate {
        /// Monthly AI spend in dollars
        #[arg(short, long)]
        monthly_spend: Option<String>,

        /// Primary AI service (openai-gpt4, openai-gpt3, anthropic-claude, google-gemini, other)
        #[arg(short, long)]
        service: Option<String>,

        /// API calls per month
        #[arg(long)]
        calls: Option<String>,

        /// Average tokens per call
        #[arg(long)]
        tokens: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Project savings with the fixed 40% reduction calculator
    Fixed {
        /// Current daily AI cost in dollars
        #[arg(short, long)]
        daily_cost: Option<String>,

        /// Model identifier (gpt-4, gpt-3.5, claude-3, gemini)
        #[arg(short, long)]
        model: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List supported services and demo model prices
    Catalog,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with secrets masked)
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
