use crate::conf::error::ConfigError;
use crate::conf::overrides::EnvOverrides;
use crate::conf::types::{RailwatchConfig, ValidatedConfig};
use crate::conf::validate::validate;
use std::fs;
use std::path::Path;

/// Read, parse, override from the environment, and validate.
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    load_config_with(path, &EnvOverrides::from_env())
}

pub fn load_config_with(
    path: &Path,
    overrides: &EnvOverrides,
) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut config = parse_config(&text).map_err(|e| ConfigError::parse(path, e))?;

    overrides.apply(&mut config);

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    let (listen, timezone) =
        validate(&config).map_err(|issues| ConfigError::Validation { issues })?;

    Ok(ValidatedConfig {
        config,
        listen,
        timezone,
    })
}

pub fn parse_config(text: &str) -> Result<RailwatchConfig, hcl::Error> {
    hcl::from_str(text)
}
