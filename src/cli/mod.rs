//! CLI module.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Video Replication MCP server
///
/// Exposes the video replication API (replicate_video, get_generation_status,
/// get_credits_balance) to AI assistants over MCP stdio.
#[derive(Parser, Debug)]
#[command(name = "video-replication-mcp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Command to run (defaults to `mcp`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the MCP server on stdio (default)
    Mcp,

    /// Print the tool catalog as JSON
    Tools,

    /// Invoke a single tool and print its result
    Call {
        /// Tool name (replicate_video, get_generation_status, get_credits_balance)
        name: String,

        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
    },

    /// Check configuration and API reachability prerequisites
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration (API key masked)
    Show,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["video-replication-mcp"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_call() {
        let cli = Cli::parse_from([
            "video-replication-mcp",
            "-vv",
            "call",
            "get_generation_status",
            "--args",
            r#"{"generationId":"gen_1"}"#,
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Call { name, args }) => {
                assert_eq!(name, "get_generation_status");
                assert_eq!(args.as_deref(), Some(r#"{"generationId":"gen_1"}"#));
            }
            _ => panic!("Expected Call command"),
        }
    }
}
