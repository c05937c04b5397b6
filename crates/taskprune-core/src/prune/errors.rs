use crate::arn::{ArnError, TaskDefinitionArn};
use crate::ecs::EcsError;
use crate::errors::TaskPruneError;

#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    #[error("Failed to query {query}: {source}")]
    UpstreamQuery {
        query: &'static str,
        #[source]
        source: EcsError,
    },

    #[error(transparent)]
    MalformedIdentifier(#[from] ArnError),

    #[error("Failed to deregister '{arn}': {source}")]
    Deregistration {
        arn: TaskDefinitionArn,
        #[source]
        source: EcsError,
    },
}

impl TaskPruneError for PruneError {
    fn error_code(&self) -> &'static str {
        match self {
            PruneError::UpstreamQuery { .. } => "PRUNE_UPSTREAM_QUERY_FAILED",
            PruneError::MalformedIdentifier(_) => "PRUNE_MALFORMED_IDENTIFIER",
            PruneError::Deregistration { .. } => "PRUNE_DEREGISTRATION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PruneError::UpstreamQuery { source, .. } => source.is_user_error(),
            PruneError::MalformedIdentifier(_) | PruneError::Deregistration { .. } => false,
        }
    }
}
