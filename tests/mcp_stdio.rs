//! End-to-end MCP session over an in-memory stdio pair.

mod common;

use common::MockUpstream;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use video_replication_mcp::mcp::McpServer;

fn line(message: Value) -> String {
    format!("{}\n", message)
}

#[tokio::test]
async fn test_session_lists_and_calls_tools() {
    let upstream = MockUpstream::start(200, r#"{"balance":900}"#).await;
    let server = McpServer::with_dispatcher(upstream.dispatcher(Some("session-key")));

    let (client, server_io) = tokio::io::duplex(64 * 1024);
    let (server_read, server_write) = tokio::io::split(server_io);
    let handle = tokio::spawn(async move {
        server
            .serve(BufReader::new(server_read), server_write)
            .await
    });

    let (client_read, mut client_write) = tokio::io::split(client);
    let mut responses = BufReader::new(client_read).lines();

    client_write
        .write_all(
            line(json!({
                "jsonrpc": "2.0", "id": 1, "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "1.0"}
                }
            }))
            .as_bytes(),
        )
        .await
        .unwrap();
    let init: Value = serde_json::from_str(&responses.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(init["id"], 1);
    assert_eq!(init["result"]["capabilities"]["tools"]["listChanged"], false);

    // Notification: no response expected, the next line answers tools/list.
    client_write
        .write_all(line(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})).as_bytes())
        .await
        .unwrap();
    client_write
        .write_all(line(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).as_bytes())
        .await
        .unwrap();
    let list: Value = serde_json::from_str(&responses.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(list["id"], 2);
    let names: Vec<&str> = list["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["replicate_video", "get_generation_status", "get_credits_balance"]
    );

    client_write
        .write_all(
            line(json!({
                "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                "params": {"name": "get_credits_balance", "arguments": {}}
            }))
            .as_bytes(),
        )
        .await
        .unwrap();
    let call: Value = serde_json::from_str(&responses.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(call["id"], 3);
    assert!(call["result"].get("isError").is_none());
    let text = call["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(serde_json::from_str::<Value>(text).unwrap(), json!({"balance": 900}));

    client_write
        .write_all(
            line(json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": {"name": "get_generation_status", "arguments": {}}
            }))
            .as_bytes(),
        )
        .await
        .unwrap();
    let invalid: Value =
        serde_json::from_str(&responses.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(invalid["result"]["isError"], true);

    client_write.shutdown().await.unwrap();
    handle.await.unwrap().unwrap();

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer session-key"));
}
