//! Doctor command - verify configuration.

use crate::cli::Output;
use crate::config::{Settings, ENV_API_KEY, ENV_BASE_URL};
use console::style;
use std::path::Path;
use url::Url;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        eprintln!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            eprintln!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings, config_path: Option<&Path>) -> anyhow::Result<()> {
    Output::header("Video Replication MCP Doctor");

    let path = config_path
        .map(|p| Settings::expand_path(&p.to_string_lossy()))
        .unwrap_or_else(Settings::default_config_path);

    let checks = vec![
        check_config_file(&path),
        check_api_key(settings),
        check_base_url(settings),
    ];

    for check in &checks {
        check.print();
    }
    eprintln!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        anyhow::bail!("{} error(s) found. Fix them before starting the server.", errors);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed.");
    }

    Ok(())
}

fn check_config_file(path: &Path) -> CheckResult {
    if path.exists() {
        CheckResult::ok("Config file", &path.display().to_string())
    } else {
        CheckResult::warning(
            "Config file",
            "not found, using defaults and environment",
            &format!("Optional. Create {} to persist settings.", path.display()),
        )
    }
}

fn check_api_key(settings: &Settings) -> CheckResult {
    match settings.api.api_key() {
        Some(_) => CheckResult::ok("API key", &settings.api.masked_api_key()),
        None => CheckResult::error(
            "API key",
            "not configured",
            &format!("Set it with: export {}='...'", ENV_API_KEY),
        ),
    }
}

fn check_base_url(settings: &Settings) -> CheckResult {
    let base_url = settings.api.base_url();
    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            CheckResult::ok("Base URL", base_url)
        }
        Ok(url) => CheckResult::error(
            "Base URL",
            &format!("unsupported scheme '{}'", url.scheme()),
            "Use an http:// or https:// URL.",
        ),
        Err(e) => CheckResult::error(
            "Base URL",
            &format!("invalid URL '{}': {}", base_url, e),
            &format!("Set it with: export {}='https://...'", ENV_BASE_URL),
        ),
    }
}
