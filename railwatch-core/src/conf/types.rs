use crate::board::{Classifier, SortOrder};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Represents the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RailwatchConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:5555"
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Optional pid file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            pid_file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Status page to poll.
    pub url: String,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Defaults to the poll interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,

    /// IANA zone used for `updated` timestamps.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl SourceConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.unwrap_or(self.interval_secs))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    #[serde(default)]
    pub classifier: Classifier,
    #[serde(default)]
    pub order: SortOrder,
}

fn default_listen() -> String {
    "0.0.0.0:5555".to_string()
}

fn default_interval_secs() -> u64 {
    30
}

fn default_timezone() -> String {
    "Asia/Tokyo".to_string()
}

/// Configuration that passed validation, with its parsed forms.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: RailwatchConfig,
    pub listen: SocketAddr,
    pub timezone: Tz,
}
