//! Tools command - print the tool catalog.

use crate::mcp::get_tools;
use anyhow::Result;

/// Print the tool catalog exactly as `tools/list` returns it.
pub fn run_tools() -> Result<()> {
    let catalog = serde_json::json!({ "tools": get_tools() });
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
