//! Validated tool parameters.
//!
//! Each type here can only be obtained through its `from_arguments`
//! constructor, so holding one means the arguments passed validation.

use crate::error::{Result, VideoMcpError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Script language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "中文";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Parameters for `replicate_video`. Serializes to the upstream request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicateVideoParams {
    image_url: String,
    video_url: String,
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReplicateVideo {
    image_url: String,
    video_url: String,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    webhook_url: Option<String>,
}

impl ReplicateVideoParams {
    /// Validate raw tool arguments.
    pub fn from_arguments(args: Option<Value>) -> Result<Self> {
        let raw: RawReplicateVideo = deserialize_arguments(args)?;

        check_url("imageUrl", &raw.image_url)?;
        check_url("videoUrl", &raw.video_url)?;
        if let Some(webhook_url) = &raw.webhook_url {
            check_url("webhookUrl", webhook_url)?;
        }

        Ok(Self {
            image_url: raw.image_url,
            video_url: raw.video_url,
            language: raw.language,
            webhook_url: raw.webhook_url,
        })
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }
}

/// Parameters for `get_generation_status`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStatusParams {
    generation_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGenerationStatus {
    generation_id: String,
}

impl GenerationStatusParams {
    /// Validate raw tool arguments.
    pub fn from_arguments(args: Option<Value>) -> Result<Self> {
        let raw: RawGenerationStatus = deserialize_arguments(args)?;
        let generation_id = raw.generation_id;

        if generation_id.trim().is_empty() {
            return Err(VideoMcpError::Validation(
                "generationId cannot be empty".to_string(),
            ));
        }
        // Sent as exactly one path segment. URL parsing treats `\` as `/` and
        // folds dot segments (including `%2e`), so none of these may appear.
        if matches!(generation_id.as_str(), "." | "..")
            || generation_id.contains(['/', '\\', '?', '#', '%'])
            || generation_id.chars().any(|c| c.is_control() || c.is_whitespace())
        {
            return Err(VideoMcpError::Validation(format!(
                "generationId contains characters not allowed in an ID: {:?}",
                generation_id
            )));
        }

        Ok(Self { generation_id })
    }

    pub fn generation_id(&self) -> &str {
        &self.generation_id
    }
}

/// Treat absent or null arguments as an empty object, reject other non-objects.
fn deserialize_arguments<T: DeserializeOwned>(args: Option<Value>) -> Result<T> {
    let args = match args {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(obj @ Value::Object(_)) => obj,
        Some(other) => {
            return Err(VideoMcpError::Validation(format!(
                "arguments must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    serde_json::from_value(args).map_err(|e| VideoMcpError::Validation(e.to_string()))
}

fn check_url(field: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| VideoMcpError::Validation(format!("'{}' is not a valid URL: {}", field, e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
