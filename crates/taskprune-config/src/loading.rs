//! Hierarchical config loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::ConfigError;
use crate::types::{AwsConfig, PruneConfig, TaskPruneConfig};
use crate::validation::validate_config;

const CONFIG_DIR: &str = ".taskprune";
const CONFIG_FILE: &str = "config.toml";

/// Load defaults, then `~/.taskprune/config.toml`, then `./.taskprune/config.toml`.
///
/// Missing files are skipped. The merged result is validated.
pub fn load_hierarchy() -> Result<TaskPruneConfig, ConfigError> {
    let user = dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE));
    let project = std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(CONFIG_DIR).join(CONFIG_FILE));

    load_layers(&[user, project].into_iter().flatten().collect::<Vec<_>>())
}

fn load_layers(paths: &[PathBuf]) -> Result<TaskPruneConfig, ConfigError> {
    let mut config = TaskPruneConfig::default();

    for path in paths {
        if !path.exists() {
            debug!(event = "config.load_skipped", path = %path.display());
            continue;
        }
        let layer = load_from_path(path)?;
        config = merge_configs(config, layer);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Parse a single config file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<TaskPruneConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: TaskPruneConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(event = "config.load_completed", path = %path.display());
    Ok(config)
}

/// Field-by-field merge: any field set in `override_config` wins.
pub fn merge_configs(base: TaskPruneConfig, override_config: TaskPruneConfig) -> TaskPruneConfig {
    TaskPruneConfig {
        prune: PruneConfig {
            keep_latest_per_family: override_config
                .prune
                .keep_latest_per_family
                .or(base.prune.keep_latest_per_family),
        },
        aws: AwsConfig {
            cli_path: override_config.aws.cli_path.or(base.aws.cli_path),
            region: override_config.aws.region.or(base.aws.region),
            profile: override_config.aws.profile.or(base.aws.profile),
            clusters: override_config.aws.clusters.or(base.aws.clusters),
            command_timeout_secs: override_config
                .aws
                .command_timeout_secs
                .or(base.aws.command_timeout_secs),
        },
    }
}
