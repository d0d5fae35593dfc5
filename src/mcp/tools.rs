//! MCP tool catalog.

use super::protocol::Tool;
use crate::tools::Operation;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    Operation::ALL.iter().map(tool_for).collect()
}

fn tool_for(op: &Operation) -> Tool {
    Tool {
        name: op.name().to_string(),
        description: op.description().to_string(),
        input_schema: op.input_schema(),
    }
}
