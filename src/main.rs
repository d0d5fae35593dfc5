//! Video Replication MCP entry point.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use video_replication_mcp::cli::{commands, Cli, Commands};
use video_replication_mcp::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let settings = Settings::load_from(config_path.as_deref())?;

    // Initialize logging. stdout carries JSON-RPC, so logs go to stderr.
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            format!("video_replication_mcp={}", log_level)
        })))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match cli.command.unwrap_or(Commands::Mcp) {
        Commands::Mcp => {
            if let Err(e) = commands::run_mcp(settings).await {
                tracing::error!(error = %e, "MCP server failed");
                return Err(e);
            }
        }

        Commands::Tools => {
            commands::run_tools()?;
        }

        Commands::Call { name, args } => {
            commands::run_call(&name, args.as_deref(), settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, config_path.as_deref())?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, &settings)?;
        }
    }

    Ok(())
}
