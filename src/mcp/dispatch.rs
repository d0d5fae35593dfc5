//! Tool dispatcher: name lookup, validation, API call, envelope.

use super::protocol::ToolCallResult;
use crate::api::VideoApi;
use crate::error::{Result, VideoMcpError};
use crate::tools::{parse_tool_call, ToolCall};
use futures::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Routes tool calls to the upstream API.
///
/// Stateless apart from the shared client, so one dispatcher can serve
/// concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn VideoApi>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn VideoApi>) -> Self {
        Self { api }
    }

    /// Handle one tool call.
    ///
    /// Never fails: unknown names, invalid arguments, missing configuration,
    /// upstream errors and handler panics all come back as failure envelopes.
    #[instrument(skip(self, args))]
    pub async fn dispatch(&self, name: &str, args: Option<Value>) -> ToolCallResult {
        let outcome = AssertUnwindSafe(self.try_dispatch(name, args))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(VideoMcpError::Internal(panic_message(&*panic))));

        let rendered = outcome.and_then(|value| Ok(serde_json::to_string_pretty(&value)?));

        match rendered {
            Ok(text) => {
                info!("Tool call succeeded");
                ToolCallResult::text(text)
            }
            Err(e) => {
                warn!(error = %e, "Tool call failed");
                ToolCallResult::error(e.to_string())
            }
        }
    }

    async fn try_dispatch(&self, name: &str, args: Option<Value>) -> Result<Value> {
        let call = parse_tool_call(name, args)?;
        self.invoke(&call).await
    }

    /// Issue the upstream request for an already validated call.
    pub async fn invoke(&self, call: &ToolCall) -> Result<Value> {
        match call {
            ToolCall::ReplicateVideo(params) => self.api.replicate_video(params).await,
            ToolCall::GetGenerationStatus(params) => self.api.get_generation_status(params).await,
            ToolCall::GetCreditsBalance => self.api.get_credits_balance().await,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("tool handler panicked: {}", detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{GenerationStatusParams, ReplicateVideoParams};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records which upstream operations were requested.
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VideoApi for RecordingApi {
        async fn replicate_video(&self, params: &ReplicateVideoParams) -> Result<Value> {
            self.calls.lock().unwrap().push("replicate_video".to_string());
            Ok(json!({"id": "gen_1", "echo": params}))
        }

        async fn get_generation_status(&self, params: &GenerationStatusParams) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("status:{}", params.generation_id()));
            Err(VideoMcpError::Api {
                status: 404,
                message: "not found".to_string(),
            })
        }

        async fn get_credits_balance(&self) -> Result<Value> {
            self.calls.lock().unwrap().push("balance".to_string());
            Ok(json!({"balance": 1200}))
        }
    }

    struct PanickingApi;

    #[async_trait]
    impl VideoApi for PanickingApi {
        async fn replicate_video(&self, _: &ReplicateVideoParams) -> Result<Value> {
            panic!("boom")
        }

        async fn get_generation_status(&self, _: &GenerationStatusParams) -> Result<Value> {
            panic!("boom")
        }

        async fn get_credits_balance(&self) -> Result<Value> {
            panic!("balance exploded")
        }
    }

    fn dispatcher() -> (Dispatcher, Arc<RecordingApi>) {
        let api = Arc::new(RecordingApi::default());
        (Dispatcher::new(api.clone()), api)
    }

    #[tokio::test]
    async fn test_success_is_pretty_json() {
        let (dispatcher, api) = dispatcher();
        let result = dispatcher.dispatch("get_credits_balance", None).await;

        assert!(!result.is_error());
        let text = result.first_text().unwrap();
        assert_eq!(text, "{\n  \"balance\": 1200\n}");
        assert_eq!(api.calls(), vec!["balance"]);
    }

    #[tokio::test]
    async fn test_unknown_operation_makes_no_call() {
        let (dispatcher, api) = dispatcher();
        let result = dispatcher.dispatch("render_video", Some(json!({}))).await;

        assert!(result.is_error());
        assert_eq!(result.first_text(), Some("unknown operation: render_video"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_call() {
        let (dispatcher, api) = dispatcher();
        let result = dispatcher
            .dispatch(
                "replicate_video",
                Some(json!({"videoUrl": "https://cdn.example.com/v.mp4"})),
            )
            .await;

        assert!(result.is_error());
        assert!(result.first_text().unwrap().contains("imageUrl"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_api_error_message_passes_through() {
        let (dispatcher, api) = dispatcher();
        let result = dispatcher
            .dispatch("get_generation_status", Some(json!({"generationId": "gen_9"})))
            .await;

        assert!(result.is_error());
        assert_eq!(result.first_text(), Some("not found"));
        assert_eq!(api.calls(), vec!["status:gen_9"]);
    }

    #[tokio::test]
    async fn test_replicate_video_forwards_validated_params() {
        let (dispatcher, api) = dispatcher();
        let result = dispatcher
            .dispatch(
                "replicate_video",
                Some(json!({
                    "imageUrl": "https://cdn.example.com/a.png",
                    "videoUrl": "https://cdn.example.com/b.mp4"
                })),
            )
            .await;

        assert!(!result.is_error());
        let body: Value = serde_json::from_str(result.first_text().unwrap()).unwrap();
        assert_eq!(body["echo"]["language"], "中文");
        assert_eq!(api.calls(), vec!["replicate_video"]);
    }

    #[tokio::test]
    async fn test_panic_becomes_failure_envelope() {
        let dispatcher = Dispatcher::new(Arc::new(PanickingApi));
        let result = dispatcher.dispatch("get_credits_balance", None).await;

        assert!(result.is_error());
        assert!(result.first_text().unwrap().contains("balance exploded"));
    }
}
