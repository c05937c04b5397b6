//! Subsets of the ECS API payloads, as emitted by `aws ecs ... --output json`.

use serde::Deserialize;

use crate::arn::TaskDefinitionArn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescription {
    pub service_arn: Option<String>,
    pub service_name: Option<String>,
    pub cluster_arn: Option<String>,
    pub status: Option<String>,
    /// Task definition of the primary deployment.
    pub task_definition: Option<TaskDefinitionArn>,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

impl ServiceDescription {
    /// Primary task definition followed by every deployment's, duplicates kept.
    pub fn task_definitions(&self) -> Vec<TaskDefinitionArn> {
        self.task_definition
            .iter()
            .chain(self.deployments.iter().filter_map(|d| d.task_definition.as_ref()))
            .cloned()
            .collect()
    }

    pub fn display_name(&self) -> &str {
        self.service_name
            .as_deref()
            .or(self.service_arn.as_deref())
            .unwrap_or("<unnamed>")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: Option<String>,
    pub status: Option<String>,
    pub task_definition: Option<TaskDefinitionArn>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListClustersResponse {
    #[serde(default)]
    pub cluster_arns: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListServicesResponse {
    #[serde(default)]
    pub service_arns: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DescribeServicesResponse {
    #[serde(default)]
    pub services: Vec<ServiceDescription>,
    #[serde(default)]
    pub failures: Vec<DescribeFailure>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DescribeFailure {
    pub arn: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListTaskDefinitionsResponse {
    #[serde(default)]
    pub task_definition_arns: Vec<TaskDefinitionArn>,
}
