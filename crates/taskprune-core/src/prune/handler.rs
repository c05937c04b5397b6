use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::arn::TaskDefinitionArn;
use crate::ecs::EcsApi;
use crate::prune::active::compute_active_set;
use crate::prune::candidates::list_candidates;
use crate::prune::errors::PruneError;
use crate::prune::retention::apply_retention;
use crate::prune::types::{PruneOptions, PruneProgress, PruneReporter, PruneSummary};

/// Run one prune pass against `api`.
///
/// Reads the active set and the candidates concurrently, removes in-use and
/// newest-per-family revisions, then deregisters the rest with at most
/// `options.max_in_flight` calls outstanding. Without `mark_inactive` nothing
/// is deregistered. The first failure aborts the run; deregistrations still
/// in flight at that point are dropped.
pub async fn run_prune<A, R>(
    api: &A,
    options: &PruneOptions,
    reporter: &mut R,
) -> Result<PruneSummary, PruneError>
where
    A: EcsApi,
    R: PruneReporter + ?Sized,
{
    info!(
        event = "core.prune.run_started",
        mark_inactive = options.mark_inactive,
        keep = options.keep_latest_per_family
    );

    let (candidates, active) = tokio::try_join!(list_candidates(api), compute_active_set(api))
        .inspect_err(|e| error!(event = "core.prune.resolve_failed", error = %e))?;

    reporter.report(PruneProgress::Considering {
        candidates: candidates.len(),
    });
    reporter.report(PruneProgress::InUse { active: &active });

    let in_use: HashSet<&TaskDefinitionArn> = active.iter().collect();
    let after_active: Vec<TaskDefinitionArn> = candidates
        .iter()
        .filter(|arn| !in_use.contains(arn))
        .cloned()
        .collect();
    reporter.report(PruneProgress::AfterActiveFilter {
        remaining: after_active.len(),
    });

    reporter.report(PruneProgress::RetentionPolicy {
        keep: options.keep_latest_per_family,
    });
    let removal = apply_retention(&after_active, options.keep_latest_per_family)
        .inspect_err(|e| error!(event = "core.prune.retention_failed", error = %e))?;
    reporter.report(PruneProgress::AfterRetention {
        remaining: removal.len(),
    });

    if options.verbose > 0 {
        reporter.report(PruneProgress::RemovalList { arns: &removal });
    }

    let mut summary = PruneSummary {
        candidates: candidates.len(),
        active: active.len(),
        after_active_filter: after_active.len(),
        removal: Vec::new(),
        deregistered: 0,
        dry_run: !options.mark_inactive,
    };

    if !options.mark_inactive {
        reporter.report(PruneProgress::DryRun {
            count: removal.len(),
        });
        info!(event = "core.prune.dry_run_completed", removal = removal.len());
        summary.removal = removal;
        return Ok(summary);
    }

    reporter.report(PruneProgress::MarkingInactive {
        count: removal.len(),
    });
    summary.deregistered = deregister_all(api, &removal, options.max_in_flight, reporter).await?;
    summary.removal = removal;

    info!(
        event = "core.prune.run_completed",
        deregistered = summary.deregistered
    );
    Ok(summary)
}

async fn deregister_all<A, R>(
    api: &A,
    removal: &[TaskDefinitionArn],
    max_in_flight: usize,
    reporter: &mut R,
) -> Result<usize, PruneError>
where
    A: EcsApi,
    R: PruneReporter + ?Sized,
{
    let mut completions = stream::iter(removal)
        .map(|arn| async move {
            api.deregister_task_definition(arn)
                .await
                .map(|()| arn)
                .map_err(|source| PruneError::Deregistration {
                    arn: arn.clone(),
                    source,
                })
        })
        .buffer_unordered(max_in_flight.max(1));

    let mut deregistered = 0;
    while let Some(result) = completions.next().await {
        let arn = result.inspect_err(|e| {
            error!(event = "core.prune.deregister_failed", error = %e);
        })?;
        deregistered += 1;
        reporter.report(PruneProgress::Deregistered { arn });
    }

    Ok(deregistered)
}
