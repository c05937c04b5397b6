use std::path::PathBuf;

use clap::ArgMatches;
use taskprune_config::{
    ConfigError, TaskPruneConfig, load_from_path, load_hierarchy, validate_config,
};
use taskprune_core::PruneOptions;

/// Config files, then CLI flags on top.
pub(crate) fn resolve_config(matches: &ArgMatches) -> Result<TaskPruneConfig, ConfigError> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_from_path(path)?,
        None => load_hierarchy()?,
    };

    if let Some(keep) = matches.get_one::<usize>("keep") {
        config.prune.keep_latest_per_family = Some(*keep);
    }
    if let Some(clusters) = matches.get_many::<String>("cluster") {
        config.aws.clusters = Some(clusters.cloned().collect());
    }
    if let Some(region) = matches.get_one::<String>("region") {
        config.aws.region = Some(region.clone());
    }
    if let Some(profile) = matches.get_one::<String>("profile") {
        config.aws.profile = Some(profile.clone());
    }
    if let Some(cli_path) = matches.get_one::<String>("aws-cli") {
        config.aws.cli_path = Some(cli_path.clone());
    }

    validate_config(&config)?;
    Ok(config)
}

/// Deregistration happens only when `--mark-inactive` is on the command line.
pub(crate) fn prune_options(matches: &ArgMatches, config: &TaskPruneConfig) -> PruneOptions {
    PruneOptions {
        mark_inactive: matches.get_flag("mark-inactive"),
        verbose: matches.get_count("verbose"),
        keep_latest_per_family: config.prune.keep_latest_per_family(),
        ..Default::default()
    }
}
