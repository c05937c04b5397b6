use tracing::info;

use crate::arn::TaskDefinitionArn;
use crate::ecs::EcsApi;
use crate::prune::errors::PruneError;

/// Task definitions eligible for removal, in the collaborator's order.
///
/// No filtering happens here; the collaborator excludes inactive revisions
/// and orders each family by ascending revision.
pub async fn list_candidates<A: EcsApi>(api: &A) -> Result<Vec<TaskDefinitionArn>, PruneError> {
    let candidates = api
        .candidate_task_definitions()
        .await
        .map_err(|source| PruneError::UpstreamQuery {
            query: "candidate task definitions",
            source,
        })?;

    info!(
        event = "core.prune.candidates_listed",
        count = candidates.len()
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prune::fakes::{FakeEcs, arns};

    #[tokio::test]
    async fn test_returns_collaborator_order_unchanged() {
        let listed = arns(&["s/web:9", "s/api:1", "s/web:10"]);
        let api = FakeEcs::new(vec![], listed.clone());
        assert_eq!(list_candidates(&api).await.unwrap(), listed);
    }

    #[tokio::test]
    async fn test_failure_is_upstream_error() {
        let api = FakeEcs::new(vec![], vec![]).failing_candidates();
        assert!(matches!(
            list_candidates(&api).await,
            Err(PruneError::UpstreamQuery {
                query: "candidate task definitions",
                ..
            })
        ));
    }
}
