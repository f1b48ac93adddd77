use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// `TOKIO_CONSOLE` selects the tokio-console layer instead of log output.
pub fn init_logging() {
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
    } else {
        init_normal_logging(default_log_mode());
    }
}

/// Log output with `RUST_LOG` filtering (defaults to "info").
///
/// Raw mode writes one flattened JSON object per event.
pub fn init_normal_logging(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match mode {
        LogMode::Raw => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt().with_env_filter(filter).compact().init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Raw,
    Pretty,
}
