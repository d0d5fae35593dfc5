//! CLI command implementations.

mod call;
mod config;
mod doctor;
mod mcp;
mod tools;

pub use call::run_call;
pub use config::run_config;
pub use doctor::run_doctor;
pub use mcp::run_mcp;
pub use tools::run_tools;
