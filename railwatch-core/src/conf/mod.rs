mod error;
mod loader;
mod overrides;
pub mod types;
mod validate;


pub use error::{ConfigError, ValidationIssue};
pub use loader::{load_config, load_config_with, parse_config};
pub use overrides::{BIND_HOST_ENV, EnvOverrides, PORT_ENV};
pub use types::{BoardConfig, RailwatchConfig, ServerConfig, SourceConfig, ValidatedConfig};
pub use validate::{MAX_INTERVAL_SECS, validate};
