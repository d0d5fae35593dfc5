//! Call command - run one tool outside of an MCP session.

use crate::api::ApiClient;
use crate::config::Settings;
use crate::mcp::Dispatcher;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::sync::Arc;

/// Dispatch a single tool call and print the envelope text.
///
/// Exits with an error when the call produces a failure envelope.
pub async fn run_call(name: &str, args: Option<&str>, settings: Settings) -> Result<()> {
    let arguments = parse_args(args)?;

    let client = ApiClient::new(&settings.api)?;
    let dispatcher = Dispatcher::new(Arc::new(client));
    let result = dispatcher.dispatch(name, arguments).await;

    let text = result.first_text().unwrap_or_default();
    if result.is_error() {
        bail!("{}", text);
    }

    println!("{}", text);
    Ok(())
}

fn parse_args(args: Option<&str>) -> Result<Option<Value>> {
    args.map(|raw| serde_json::from_str(raw).context("--args must be valid JSON"))
        .transpose()
}
