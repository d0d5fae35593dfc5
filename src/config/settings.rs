//! Configuration settings for the video replication MCP server.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "VIDEO_API_BASE_URL";
/// Environment variable holding the API credential.
pub const ENV_API_KEY: &str = "VIDEO_API_KEY";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Upstream video API settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL the API paths are appended to.
    pub base_url: String,
    /// Bearer credential. Usually supplied through `VIDEO_API_KEY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiSettings {
    /// The configured credential, if present and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Credential masked for display, keeping only the last four characters.
    pub fn masked_api_key(&self) -> String {
        match self.api_key() {
            Some(key) if key.chars().count() > 8 => {
                let tail: String = key.chars().skip(key.chars().count() - 4).collect();
                format!("****{}", tail)
            }
            Some(_) => "****".to_string(),
            None => "(not set)".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default file, then apply environment overrides.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path (or the default location if None),
    /// then apply environment overrides.
    pub fn load_from(path: Option<&Path>) -> crate::error::Result<Self> {
        let mut settings = Self::read_file(path)?;
        settings.apply_env(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Read the TOML file only. A missing file yields defaults.
    pub fn read_file(path: Option<&Path>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => Self::expand_path(&p.to_string_lossy()),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Override file values with environment variables. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = non_empty(ENV_BASE_URL) {
            self.api.base_url = base_url;
        }
        if let Some(api_key) = non_empty(ENV_API_KEY) {
            self.api.api_key = Some(api_key);
        }
    }

    /// Render the settings as TOML with the credential masked.
    pub fn to_display_toml(&self) -> crate::error::Result<String> {
        let mut shown = self.clone();
        shown.api.api_key = Some(self.api.masked_api_key());
        toml::to_string_pretty(&shown)
            .map_err(|e| crate::error::VideoMcpError::Config(e.to_string()))
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("video-replication-mcp")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}
