//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::overrides::ConfigOverrides;
use crate::config::schema::PredictorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load the file at `path` (or the built-in defaults), apply `overrides`,
/// then validate the merged result once.
pub fn load_with_overrides(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<PredictorConfig, ConfigError> {
    let content = path
        .map(fs::read_to_string)
        .transpose()
        .map_err(ConfigError::Io)?;
    parse_with_overrides(content.as_deref(), overrides)
}

/// Parse `content` (defaults when `None`), apply `overrides`, then validate.
pub fn parse_with_overrides(
    content: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<PredictorConfig, ConfigError> {
    let mut config: PredictorConfig = match content {
        Some(content) => toml::from_str(content).map_err(ConfigError::Parse)?,
        None => PredictorConfig::default(),
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
