//! Configuration module.
//!
//! Settings come from an optional TOML file and are overridden by
//! `VIDEO_API_BASE_URL` / `VIDEO_API_KEY` from the environment.

mod settings;

pub use settings::{ApiSettings, GeneralSettings, Settings, ENV_API_KEY, ENV_BASE_URL};
