use tracing::{debug, info};

use crate::arn::TaskDefinitionArn;
use crate::ecs::EcsApi;
use crate::prune::errors::PruneError;

/// Every task definition referenced by at least one service, deduplicated
/// and sorted.
pub async fn compute_active_set<A: EcsApi>(api: &A) -> Result<Vec<TaskDefinitionArn>, PruneError> {
    debug!(event = "core.prune.active_set_started");

    let descriptions = api
        .describe_all_services()
        .await
        .map_err(|source| PruneError::UpstreamQuery {
            query: "service descriptions",
            source,
        })?;

    let mut active: Vec<TaskDefinitionArn> = descriptions
        .iter()
        .flat_map(|description| api.task_definitions_from_service_description(description))
        .collect();
    active.sort();
    active.dedup();

    info!(
        event = "core.prune.active_set_completed",
        services = descriptions.len(),
        active = active.len()
    );
    Ok(active)
}
