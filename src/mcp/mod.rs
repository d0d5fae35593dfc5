//! MCP (Model Context Protocol) server.
//!
//! Lets AI assistants call the video replication API as tools.
//! Implements JSON-RPC 2.0 over stdio.

mod dispatch;
pub mod protocol;
mod server;
mod tools;

pub use dispatch::Dispatcher;
pub use protocol::{Tool, ToolCallResult, ToolContent};
pub use server::McpServer;
pub use tools::get_tools;
