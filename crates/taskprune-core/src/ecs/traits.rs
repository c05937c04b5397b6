//! ECS collaborator trait definition.

use std::future::Future;

use crate::arn::TaskDefinitionArn;
use crate::ecs::errors::EcsError;
use crate::ecs::types::ServiceDescription;

/// The two read queries and one mutation the prune pipeline needs from ECS.
///
/// Implemented by [`crate::ecs::AwsCliClient`] in production and by in-memory
/// fakes in tests.
pub trait EcsApi: Send + Sync {
    /// Describe every service in scope. Read-only.
    fn describe_all_services(
        &self,
    ) -> impl Future<Output = Result<Vec<ServiceDescription>, EcsError>> + Send;

    /// Task definitions referenced by one service description. Pure, no I/O.
    ///
    /// May contain duplicates; callers deduplicate.
    fn task_definitions_from_service_description(
        &self,
        description: &ServiceDescription,
    ) -> Vec<TaskDefinitionArn> {
        description.task_definitions()
    }

    /// Active task definitions, ascending by revision within each family.
    fn candidate_task_definitions(
        &self,
    ) -> impl Future<Output = Result<Vec<TaskDefinitionArn>, EcsError>> + Send;

    /// Mark one task definition revision inactive.
    fn deregister_task_definition(
        &self,
        arn: &TaskDefinitionArn,
    ) -> impl Future<Output = Result<(), EcsError>> + Send;
}
