use crate::errors::ConfigError;
use crate::types::TaskPruneConfig;

/// Reject configurations that can never produce a working run.
pub fn validate_config(config: &TaskPruneConfig) -> Result<(), ConfigError> {
    if config.aws.cli_path().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "aws.cli_path cannot be empty".to_string(),
        });
    }

    if config.aws.command_timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "aws.command_timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.aws.clusters().iter().any(|c| c.trim().is_empty()) {
        return Err(ConfigError::InvalidConfiguration {
            message: "aws.clusters cannot contain empty names".to_string(),
        });
    }

    Ok(())
}
