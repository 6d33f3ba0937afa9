use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Settings path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.settings.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "settings.path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
