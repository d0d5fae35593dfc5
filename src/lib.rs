//! Video Replication MCP server
//!
//! Exposes a remote video-generation API to AI assistants over the Model
//! Context Protocol.
//!
//! # Overview
//!
//! Three tools are offered:
//! - `replicate_video` - submit a replication job from a product image and a reference video
//! - `get_generation_status` - poll a job
//! - `get_credits_balance` - check the account balance
//!
//! # Architecture
//!
//! - `tools` - operation descriptors and argument validation
//! - `api` - authenticated HTTP client for the upstream service
//! - `mcp` - JSON-RPC protocol, tool dispatcher and stdio server
//! - `config` - settings file and environment overrides
//! - `cli` - command-line entry points
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use video_replication_mcp::api::ApiClient;
//! use video_replication_mcp::config::Settings;
//! use video_replication_mcp::mcp::Dispatcher;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let dispatcher = Dispatcher::new(Arc::new(ApiClient::new(&settings.api)?));
//!
//!     let result = dispatcher.dispatch("get_credits_balance", None).await;
//!     println!("{}", result.first_text().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;

pub use error::{Result, VideoMcpError};
