//! Upstream video API abstraction.
//!
//! [`VideoApi`] is the seam between the tool dispatcher and the network.
//! [`ApiClient`] is the HTTP implementation.

mod client;

pub use client::ApiClient;

use crate::error::Result;
use crate::tools::{GenerationStatusParams, ReplicateVideoParams};
use async_trait::async_trait;
use serde_json::Value;

pub const REPLICATE_VIDEO_PATH: &str = "/api/v1/replicate-video";
/// Job IDs are appended as one encoded segment, see [`ApiClient::generation_url`].
pub const GENERATIONS_PATH: &str = "/api/v1/generations";
pub const CREDITS_BALANCE_PATH: &str = "/api/v1/credits/balance";

/// HTTP methods used by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Operations offered by the upstream video service.
///
/// Results are returned as raw JSON; no schema is enforced on them.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Submit a replication job.
    async fn replicate_video(&self, params: &ReplicateVideoParams) -> Result<Value>;

    /// Fetch the status of a previously submitted job.
    async fn get_generation_status(&self, params: &GenerationStatusParams) -> Result<Value>;

    /// Fetch the account credit balance.
    async fn get_credits_balance(&self) -> Result<Value>;
}
