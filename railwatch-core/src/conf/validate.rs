use crate::conf::error::ValidationIssue;
use crate::conf::types::RailwatchConfig;
use chrono_tz::Tz;
use std::net::SocketAddr;
use url::Url;

pub const MAX_INTERVAL_SECS: u64 = 3600;

/// Check every field and collect all problems rather than stopping at the first.
pub fn validate(cfg: &RailwatchConfig) -> Result<(SocketAddr, Tz), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    //--------------------------------------------------------------------------
    // Server
    //--------------------------------------------------------------------------
    let listen = match cfg.server.listen.parse::<SocketAddr>() {
        Ok(addr) => Some(addr),
        Err(e) => {
            issue(&mut issues, "server.listen", format!("'{}': {e}", cfg.server.listen));
            None
        }
    };

    if let Some(pid_file) = &cfg.server.pid_file {
        if pid_file.as_os_str().is_empty() {
            issue(&mut issues, "server.pid_file", "path is empty".to_string());
        } else if pid_file.is_dir() {
            issue(
                &mut issues,
                "server.pid_file",
                format!("'{}' is a directory", pid_file.display()),
            );
        }
    }

    //--------------------------------------------------------------------------
    // Source
    //--------------------------------------------------------------------------
    match Url::parse(&cfg.source.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => issue(
            &mut issues,
            "source.url",
            format!("unsupported scheme '{}'", url.scheme()),
        ),
        Err(e) => issue(&mut issues, "source.url", format!("'{}': {e}", cfg.source.url)),
    }

    if !(1..=MAX_INTERVAL_SECS).contains(&cfg.source.interval_secs) {
        issue(
            &mut issues,
            "source.interval_secs",
            format!(
                "{} is outside 1..={MAX_INTERVAL_SECS}",
                cfg.source.interval_secs
            ),
        );
    }

    if cfg.source.fetch_timeout_secs == Some(0) {
        issue(
            &mut issues,
            "source.fetch_timeout_secs",
            "must be at least 1".to_string(),
        );
    }

    let timezone = match cfg.source.timezone.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            issue(
                &mut issues,
                "source.timezone",
                format!("unknown time zone '{}'", cfg.source.timezone),
            );
            None
        }
    };

    match (listen, timezone) {
        (Some(listen), Some(timezone)) if issues.is_empty() => Ok((listen, timezone)),
        _ => Err(issues),
    }
}

fn issue(issues: &mut Vec<ValidationIssue>, field: &'static str, message: String) {
    issues.push(ValidationIssue { field, message });
}
