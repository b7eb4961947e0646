use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Current config version. Bump this when changing the shape of the file.
pub const CURRENT_VERSION: u32 = 1;

pub const ENV_PRESET: &str = "FIELDFORCE_PRESET";
pub const ENV_REPLY_DELAY_MS: &str = "FIELDFORCE_REPLY_DELAY_MS";
pub const ENV_EXPORT_PREFIX: &str = "FIELDFORCE_EXPORT_PREFIX";
pub const ENV_LOG_FORMAT: &str = "FIELDFORCE_LOG_FORMAT";

/// Runtime settings shared by the assistant and dashboard crates.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldforceConfig {
    pub config_version: u32,
    /// Rule preset used by the floating assistant, e.g. `"waive"`.
    pub assistant_preset: String,
    /// Artificial latency before an assistant reply is appended.
    pub reply_delay_ms: u64,
    /// Product slug placed at the front of every export file name.
    pub export_prefix: String,
    pub export_delay_ms: u64,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for FieldforceConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            assistant_preset: "waive".to_string(),
            reply_delay_ms: 1000,
            export_prefix: "fieldforce-pro".to_string(),
            export_delay_ms: 1500,
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FieldforceConfig {
    pub fn from_json(contents: &str) -> Result<Self, CoreError> {
        let config: FieldforceConfig = serde_json::from_str(contents)?;
        if config.config_version > CURRENT_VERSION {
            return Err(CoreError::InvalidConfig {
                field: "config_version".to_string(),
                value: format!(
                    "{} is newer than this build supports ({CURRENT_VERSION})",
                    config.config_version
                ),
            });
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Apply `FIELDFORCE_*` overrides. `lookup` is normally
    /// `|key| std::env::var(key).ok()`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(preset) = lookup(ENV_PRESET) {
            self.assistant_preset = preset;
        }
        if let Some(raw) = lookup(ENV_REPLY_DELAY_MS) {
            self.reply_delay_ms = raw.trim().parse().map_err(|_| CoreError::InvalidConfig {
                field: ENV_REPLY_DELAY_MS.to_string(),
                value: raw.clone(),
            })?;
        }
        if let Some(prefix) = lookup(ENV_EXPORT_PREFIX) {
            self.export_prefix = prefix;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            self.log_format = match raw.trim() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(CoreError::InvalidConfig {
                        field: ENV_LOG_FORMAT.to_string(),
                        value: raw.clone(),
                    });
                }
            };
        }
        Ok(self)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn export_delay(&self) -> Duration {
        Duration::from_millis(self.export_delay_ms)
    }
}
