use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend endpoint and transport timeouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub connect_timeout_seconds: u64,
    /// Read timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub read_timeout_seconds: u64,
    /// Write timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub write_timeout_seconds: u64,
}

/// Where the session key-value file lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Overrides the platform data directory location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Countdown after an email verification code is sent (default: 60).
    #[serde(default = "default_cooldown")]
    pub email_code_cooldown_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://example.com/api/v1".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_cooldown() -> u32 {
    60
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_timeout(),
            read_timeout_seconds: default_timeout(),
            write_timeout_seconds: default_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            email_code_cooldown_seconds: default_cooldown(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
