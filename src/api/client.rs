//! HTTP client for the upstream video API.

use super::{Method, VideoApi, CREDITS_BALANCE_PATH, GENERATIONS_PATH, REPLICATE_VIDEO_PATH};
use crate::config::ApiSettings;
use crate::error::{Result, VideoMcpError};
use crate::tools::{GenerationStatusParams, ReplicateVideoParams};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

/// Authenticated client for the video API.
///
/// Holds read-only configuration only; cloning shares the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key_set", &self.api_key.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client from settings using the transport's default timeouts.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(settings, http))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(settings: &ApiSettings, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: settings.base_url().to_string(),
            api_key: settings.api_key().map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one authenticated request and decode the JSON response.
    ///
    /// Fails with a configuration error before any I/O when no API key is set.
    /// Non-2xx responses become [`VideoMcpError::Api`], using `error.message`
    /// from the body when the upstream provides one.
    pub async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let api_key = self.require_api_key()?;
        let url = self.endpoint(path)?;
        self.send(method, url, api_key, body).await
    }

    /// Status URL for one job, with the ID percent-encoded as a single path segment.
    pub fn generation_url(&self, generation_id: &str) -> Result<Url> {
        let mut url = self.endpoint(GENERATIONS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| {
                VideoMcpError::Config(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .push(generation_id);
        Ok(url)
    }

    fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(VideoMcpError::missing_api_key)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            VideoMcpError::Config(format!("invalid base URL '{}': {}", self.base_url, e))
        })
    }

    #[instrument(skip(self, method, url, api_key, body), fields(%method, path = url.path()))]
    async fn send(
        &self,
        method: Method,
        url: Url,
        api_key: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let mut request = self.http.request(method.into(), url).bearer_auth(api_key);
        if let Some(body) = body {
            // Also sets `Content-Type: application/json`.
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "API response received");

        let parsed = serde_json::from_slice::<Value>(&bytes);

        if !status.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| format!("API error: HTTP {}", status.as_u16()));
            warn!(status = status.as_u16(), %message, "API request failed");
            return Err(VideoMcpError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parsed.map_err(|e| VideoMcpError::InvalidResponse {
            status: status.as_u16(),
            reason: e.to_string(),
        })
    }
}

/// Extract `error.message` from an upstream error body.
fn error_message(body: &Value) -> Option<String> {
    body.get("error")?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl VideoApi for ApiClient {
    async fn replicate_video(&self, params: &ReplicateVideoParams) -> Result<Value> {
        let body = serde_json::to_value(params)?;
        self.call(Method::Post, REPLICATE_VIDEO_PATH, Some(&body)).await
    }

    async fn get_generation_status(&self, params: &GenerationStatusParams) -> Result<Value> {
        let api_key = self.require_api_key()?;
        let url = self.generation_url(params.generation_id())?;
        self.send(Method::Get, url, api_key, None).await
    }

    async fn get_credits_balance(&self) -> Result<Value> {
        self.call(Method::Get, CREDITS_BALANCE_PATH, None).await
    }
}
