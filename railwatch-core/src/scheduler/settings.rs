use crate::conf::ValidatedConfig;
use chrono_tz::Tz;
use std::time::Duration;

/// Longest uninterrupted sleep between shutdown checks.
pub const SHUTDOWN_POLL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    pub url: String,
    pub interval: Duration,
    pub fetch_timeout: Duration,
    pub timezone: Tz,
}

impl SchedulerSettings {
    pub fn from_config(cfg: &ValidatedConfig) -> Self {
        Self {
            url: cfg.config.source.url.clone(),
            interval: cfg.config.source.interval(),
            fetch_timeout: cfg.config.source.fetch_timeout(),
            timezone: cfg.timezone,
        }
    }
}
