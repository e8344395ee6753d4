use std::fs;

use anyhow::Context;
use serde::Deserialize;

use rbg_core::CheckPolicy;
use rbg_observe::{LoggerConfig, LoggerFormat, LoggerLevel};
use rbg_remote::RemoteConfig;

/// Path of an optional JSON settings file.
pub const ENV_CONFIG: &str = "RBG_CONFIG";
/// Log filter directive override.
pub const ENV_LOG: &str = "RBG_LOG";
/// Log format override (`text` | `json`).
pub const ENV_LOG_FORMAT: &str = "RBG_LOG_FORMAT";
/// Token for the source hosting API.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Everything the binary can be configured with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logger: LoggerConfig,
    pub remote: RemoteConfig,
    pub policy: CheckPolicy,
}

impl Settings {
    /// Loads settings from the file named by `RBG_CONFIG` (if any), then applies
    /// environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match env(ENV_CONFIG).filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("reading settings file {path}"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing settings file {path}"))?
            }
            None => Self::default(),
        };

        if let Some(level) = env(ENV_LOG) {
            settings.logger.level = level
                .parse::<LoggerLevel>()
                .with_context(|| format!("invalid {ENV_LOG}"))?;
        }
        if let Some(format) = env(ENV_LOG_FORMAT) {
            settings.logger.format = format
                .parse::<LoggerFormat>()
                .with_context(|| format!("invalid {ENV_LOG_FORMAT}"))?;
        }
        if let Some(token) = env(ENV_GITHUB_TOKEN).filter(|t| !t.trim().is_empty()) {
            settings.remote.github_token = Some(token.trim().to_string());
        }

        Ok(settings)
    }
}
