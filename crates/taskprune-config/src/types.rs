//! Configuration types.
//!
//! Every field is optional so that a layer only overrides what it sets.
//! Accessors resolve unset fields to their defaults.

use serde::{Deserialize, Serialize};

/// Newest revisions per family that are never deregistered.
pub const DEFAULT_KEEP_LATEST_PER_FAMILY: usize = 5;

/// Default program used to talk to ECS.
pub const DEFAULT_AWS_CLI: &str = "aws";

/// Upper bound on a single `aws` invocation.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPruneConfig {
    pub prune: PruneConfig,
    pub aws: AwsConfig,
}

/// Live runs are only ever enabled by the `--mark-inactive` flag, never by
/// a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    pub keep_latest_per_family: Option<usize>,
}

impl PruneConfig {
    pub fn keep_latest_per_family(&self) -> usize {
        self.keep_latest_per_family
            .unwrap_or(DEFAULT_KEEP_LATEST_PER_FAMILY)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub cli_path: Option<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Clusters to scan. Unset or empty means every cluster in the account.
    pub clusters: Option<Vec<String>>,
    pub command_timeout_secs: Option<u64>,
}

impl AwsConfig {
    pub fn cli_path(&self) -> &str {
        self.cli_path.as_deref().unwrap_or(DEFAULT_AWS_CLI)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn clusters(&self) -> &[String] {
        self.clusters.as_deref().unwrap_or(&[])
    }

    pub fn command_timeout_secs(&self) -> u64 {
        self.command_timeout_secs
            .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_through_accessors() {
        let config = TaskPruneConfig::default();
        assert_eq!(config.prune.keep_latest_per_family(), 5);
        assert_eq!(config.aws.cli_path(), "aws");
        assert_eq!(config.aws.region(), None);
        assert!(config.aws.clusters().is_empty());
        assert_eq!(config.aws.command_timeout_secs(), 60);
    }

    #[test]
    fn test_partial_toml_leaves_other_fields_unset() {
        let config: TaskPruneConfig = toml::from_str(
            r#"
            [aws]
            region = "eu-west-1"
            clusters = ["prod"]
            "#,
        )
        .unwrap();
        assert_eq!(config.aws.region(), Some("eu-west-1"));
        assert_eq!(config.aws.clusters(), ["prod".to_string()]);
        assert_eq!(config.prune, PruneConfig::default());
    }

    #[test]
    fn test_full_toml_round_trips_values() {
        let config: TaskPruneConfig = toml::from_str(
            r#"
            [prune]
            keep_latest_per_family = 10

            [aws]
            cli_path = "/opt/aws/bin/aws"
            profile = "ops"
            command_timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.prune.keep_latest_per_family(), 10);
        assert_eq!(config.aws.cli_path(), "/opt/aws/bin/aws");
        assert_eq!(config.aws.profile(), Some("ops"));
        assert_eq!(config.aws.command_timeout_secs(), 15);
    }
}
