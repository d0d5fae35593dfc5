//! Operation descriptors and argument validation.
//!
//! Every callable operation is listed in [`Operation`]. [`parse_tool_call`]
//! turns an operation name plus raw JSON arguments into a [`ToolCall`]
//! carrying validated parameters, before anything touches the network.

mod params;

pub use params::{GenerationStatusParams, ReplicateVideoParams, DEFAULT_LANGUAGE};

use crate::error::{Result, VideoMcpError};
use serde_json::{json, Value};
use std::str::FromStr;

/// The fixed set of operations exposed to the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ReplicateVideo,
    GetGenerationStatus,
    GetCreditsBalance,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 3] = [
        Operation::ReplicateVideo,
        Operation::GetGenerationStatus,
        Operation::GetCreditsBalance,
    ];

    /// Tool name as seen by the caller.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ReplicateVideo => "replicate_video",
            Operation::GetGenerationStatus => "get_generation_status",
            Operation::GetCreditsBalance => "get_credits_balance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::ReplicateVideo => {
                "Create a video replication job. Given a product image and a reference video, \
                 the service analyzes both and generates a new marketing video. \
                 Costs 150 credits and usually takes 2-5 minutes."
            }
            Operation::GetGenerationStatus => {
                "Get the status of a video generation job. Returns progress, status \
                 and the result URL once the job has completed."
            }
            Operation::GetCreditsBalance => "Get the credit balance of the current account.",
        }
    }

    /// JSON schema of the accepted arguments.
    pub fn input_schema(&self) -> Value {
        match self {
            Operation::ReplicateVideo => json!({
                "type": "object",
                "properties": {
                    "imageUrl": {
                        "type": "string",
                        "format": "uri",
                        "description": "Product image URL (jpg/png/webp)"
                    },
                    "videoUrl": {
                        "type": "string",
                        "format": "uri",
                        "description": "Reference video URL (mp4)"
                    },
                    "language": {
                        "type": "string",
                        "description": "Language of the generated script, e.g. 中文, English",
                        "default": DEFAULT_LANGUAGE
                    },
                    "webhookUrl": {
                        "type": "string",
                        "format": "uri",
                        "description": "Optional callback URL notified when the job finishes"
                    }
                },
                "required": ["imageUrl", "videoUrl"]
            }),
            Operation::GetGenerationStatus => json!({
                "type": "object",
                "properties": {
                    "generationId": {
                        "type": "string",
                        "description": "Job ID returned by replicate_video"
                    }
                },
                "required": ["generationId"]
            }),
            Operation::GetCreditsBalance => json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }
}

impl FromStr for Operation {
    type Err = VideoMcpError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| VideoMcpError::UnknownOperation(s.to_string()))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated invocation of one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    ReplicateVideo(ReplicateVideoParams),
    GetGenerationStatus(GenerationStatusParams),
    GetCreditsBalance,
}

impl ToolCall {
    pub fn operation(&self) -> Operation {
        match self {
            ToolCall::ReplicateVideo(_) => Operation::ReplicateVideo,
            ToolCall::GetGenerationStatus(_) => Operation::GetGenerationStatus,
            ToolCall::GetCreditsBalance => Operation::GetCreditsBalance,
        }
    }
}

/// Resolve an operation name and validate its arguments.
pub fn parse_tool_call(name: &str, args: Option<Value>) -> Result<ToolCall> {
    match name.parse::<Operation>()? {
        Operation::ReplicateVideo => Ok(ToolCall::ReplicateVideo(
            ReplicateVideoParams::from_arguments(args)?,
        )),
        Operation::GetGenerationStatus => Ok(ToolCall::GetGenerationStatus(
            GenerationStatusParams::from_arguments(args)?,
        )),
        // Takes no parameters; whatever was passed is ignored.
        Operation::GetCreditsBalance => Ok(ToolCall::GetCreditsBalance),
    }
}
