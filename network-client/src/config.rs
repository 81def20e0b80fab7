/// Configuration management for network-client
///
/// Loads configuration from environment variables (and `.env` if present).
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::context::Viewer;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    pub api: ApiConfig,
    /// Authenticated username, if any
    pub viewer: Option<String>,
    /// Logging settings
    pub log: LogConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the network backend
    pub base_url: String,
    /// Cookie header forwarded with every request
    pub session_cookie: Option<String>,
    /// CSRF token sent on write requests
    pub csrf_token: Option<String>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown LOG_FORMAT: {}", other),
        }
    }
}

// Default values
fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api = ApiConfig {
            base_url: non_empty_var("NETWORK_BASE_URL").unwrap_or_else(default_base_url),
            session_cookie: non_empty_var("NETWORK_SESSION_COOKIE"),
            csrf_token: non_empty_var("NETWORK_CSRF_TOKEN"),
        };

        let log = LogConfig {
            format: std::env::var("LOG_FORMAT")
                .ok()
                .map(|value| value.parse::<LogFormat>())
                .transpose()
                .context("LOG_FORMAT must be `text` or `json`")?
                .unwrap_or(LogFormat::Text),
        };

        Ok(Config {
            api,
            viewer: non_empty_var("NETWORK_VIEWER"),
            log,
        })
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from_username(self.viewer.clone())
    }
}
