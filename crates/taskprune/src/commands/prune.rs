use clap::ArgMatches;
use tracing::{error, info};

use taskprune_core::errors::TaskPruneError;
use taskprune_core::{AwsCliClient, events, run_prune};

use super::helpers::{prune_options, resolve_config};
use crate::color;
use crate::report::ConsoleReporter;

pub(crate) async fn handle_prune_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches).map_err(|e| report_failure(e, "cli.config_failed"))?;
    let options = prune_options(matches, &config);

    info!(
        event = "cli.prune_started",
        mark_inactive = options.mark_inactive,
        keep = options.keep_latest_per_family,
        clusters = ?config.aws.clusters()
    );

    let client =
        AwsCliClient::from_config(&config.aws).map_err(|e| report_failure(e, "cli.prune_failed"))?;

    let mut reporter = ConsoleReporter::stdout();
    let summary = run_prune(&client, &options, &mut reporter)
        .await
        .map_err(|e| report_failure(e, "cli.prune_failed"))?;

    if summary.dry_run {
        println!(
            "Dry run complete. {} task definitions would be deregistered.",
            color::count(&summary.removal.len().to_string())
        );
    } else {
        println!(
            "{} Deregistered {} task definitions.",
            color::success("Done."),
            color::count(&summary.deregistered.to_string())
        );
    }

    info!(
        event = "cli.prune_completed",
        dry_run = summary.dry_run,
        removal = summary.removal.len(),
        deregistered = summary.deregistered
    );
    Ok(())
}

/// Print the error to stderr and log it, then hand it back for propagation.
fn report_failure<E: TaskPruneError>(e: E, event: &'static str) -> Box<dyn std::error::Error> {
    eprintln!("{} {}", color::failure("Error:"), e);
    error!(event = event, error_code = e.error_code(), error = %e);
    events::log_app_error(&e);
    Box::new(e)
}
