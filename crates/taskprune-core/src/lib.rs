//! Core library for taskprune.
//!
//! Decides which ECS task definition revisions are safe to deregister and
//! drives the deregistration against an [`ecs::EcsApi`] collaborator.

pub mod arn;
pub mod ecs;
pub mod errors;
pub mod events;
pub mod logging;
pub mod prune;

pub use arn::{ArnError, ParsedArn, TaskDefinitionArn};
pub use ecs::{AwsCliClient, EcsApi, EcsError, ServiceDescription};
pub use errors::{TaskPruneError, TaskPruneResult};
pub use logging::init_logging;
pub use prune::{
    PruneError, PruneOptions, PruneProgress, PruneReporter, PruneSummary, apply_retention,
    compute_active_set, list_candidates, run_prune,
};
