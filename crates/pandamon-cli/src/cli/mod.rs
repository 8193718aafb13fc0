//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use pandamon_core::config;
use pandamon_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "pandamon")]
#[command(version)]
#[command(about = "Terminal monitor for the Panda Express discount status signal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the status endpoint URL
    #[arg(long, value_name = "URL", global = true)]
    endpoint: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve the status once and print it (non-interactive)
    Check {
        /// Print the resolved state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // File logging is opt-in via PANDAMON_LOG; the guard must outlive dispatch.
    let _log_guard = logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;

    if let Some(endpoint) = cli.endpoint.as_deref() {
        let trimmed = endpoint.trim();
        if !trimmed.is_empty() {
            config.endpoint = trimmed.to_string();
        }
    }

    // default to the interactive monitor
    let Some(command) = cli.command else {
        return pandamon_tui::run_status_monitor(&config).await;
    };

    match command {
        Commands::Check { json } => commands::check::run(&config, json).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
