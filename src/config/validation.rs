use crate::config::types::{Config, InputConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates input configuration
fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.urls_file {
        if !path.is_file() {
            return Err(ConfigError::MissingInput(path.clone()));
        }
    }
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output path cannot be empty".to_string(),
            ));
        }

        if path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "output path '{}' is a directory",
                path.display()
            )));
        }
    }
    Ok(())
}
