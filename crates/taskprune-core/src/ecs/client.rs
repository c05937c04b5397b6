//! [`EcsApi`] implementation that shells out to the `aws` CLI.

use std::time::Duration;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use taskprune_config::AwsConfig;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::arn::TaskDefinitionArn;
use crate::ecs::errors::EcsError;
use crate::ecs::traits::EcsApi;
use crate::ecs::types::{
    DescribeFailure, DescribeServicesResponse, ListClustersResponse, ListServicesResponse,
    ListTaskDefinitionsResponse, ServiceDescription,
};

/// `DescribeServices` accepts at most this many services per call.
const DESCRIBE_SERVICES_BATCH: usize = 10;

const MISSING_SERVICE_REASON: &str = "MISSING";

pub struct AwsCliClient {
    program: String,
    region: Option<String>,
    profile: Option<String>,
    clusters: Vec<String>,
    timeout: Duration,
}

impl AwsCliClient {
    /// Build a client from config, failing early if the CLI is not installed.
    pub fn from_config(config: &AwsConfig) -> Result<Self, EcsError> {
        let program = config.cli_path().to_string();
        which::which(&program).map_err(|_| EcsError::CliNotFound {
            program: program.clone(),
        })?;

        Ok(Self {
            program,
            region: config.region().map(str::to_string),
            profile: config.profile().map(str::to_string),
            clusters: config.clusters().to_vec(),
            timeout: Duration::from_secs(config.command_timeout_secs()),
        })
    }

    /// Full argument list for one `aws ecs` subcommand, global flags appended.
    fn command_args(&self, ecs_args: &[&str]) -> Vec<String> {
        let mut args = vec!["ecs".to_string()];
        args.extend(ecs_args.iter().map(|a| a.to_string()));
        args.extend(["--output".to_string(), "json".to_string()]);
        if let Some(region) = &self.region {
            args.extend(["--region".to_string(), region.clone()]);
        }
        if let Some(profile) = &self.profile {
            args.extend(["--profile".to_string(), profile.clone()]);
        }
        args
    }

    async fn run(&self, ecs_args: &[&str]) -> Result<(String, Vec<u8>), EcsError> {
        let args = self.command_args(ecs_args);
        let command = format!("{} {}", self.program, ecs_args.join(" "));

        debug!(event = "core.ecs.command_started", command = %command);

        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.program)
                .args(&args)
                .env("AWS_PAGER", "")
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| EcsError::Timeout {
            command: command.clone(),
            timeout_secs: self.timeout.as_secs(),
        })?
        .map_err(|source| EcsError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "core.ecs.command_failed",
                command = %command,
                status = %output.status,
                stderr = %stderr
            );
            return Err(EcsError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        debug!(event = "core.ecs.command_completed", command = %command);
        Ok((command, output.stdout))
    }

    async fn run_json<T: DeserializeOwned>(&self, ecs_args: &[&str]) -> Result<T, EcsError> {
        let (command, stdout) = self.run(ecs_args).await?;
        parse_response(&command, &stdout)
    }

    async fn cluster_names(&self) -> Result<Vec<String>, EcsError> {
        if !self.clusters.is_empty() {
            return Ok(self.clusters.clone());
        }

        let response: ListClustersResponse = self.run_json(&["list-clusters"]).await?;
        debug!(
            event = "core.ecs.clusters_discovered",
            count = response.cluster_arns.len()
        );
        Ok(response.cluster_arns)
    }

    async fn describe_cluster_services(
        &self,
        cluster: &str,
    ) -> Result<Vec<ServiceDescription>, EcsError> {
        let listed: ListServicesResponse = self
            .run_json(&["list-services", "--cluster", cluster])
            .await?;

        let mut descriptions = Vec::with_capacity(listed.service_arns.len());
        for batch in listed.service_arns.chunks(DESCRIBE_SERVICES_BATCH) {
            let mut args = vec!["describe-services", "--cluster", cluster, "--services"];
            args.extend(batch.iter().map(String::as_str));

            let response: DescribeServicesResponse = self.run_json(&args).await?;
            check_describe_failures(cluster, &response.failures)?;
            for service in &response.services {
                debug!(
                    event = "core.ecs.service_described",
                    cluster = cluster,
                    service = service.display_name(),
                    task_definitions = service.task_definitions().len()
                );
            }
            descriptions.extend(response.services);
        }

        debug!(
            event = "core.ecs.cluster_services_described",
            cluster = cluster,
            count = descriptions.len()
        );
        Ok(descriptions)
    }
}

impl EcsApi for AwsCliClient {
    async fn describe_all_services(&self) -> Result<Vec<ServiceDescription>, EcsError> {
        let clusters = self.cluster_names().await?;
        let per_cluster = try_join_all(
            clusters
                .iter()
                .map(|cluster| self.describe_cluster_services(cluster)),
        )
        .await?;

        Ok(per_cluster.into_iter().flatten().collect())
    }

    async fn candidate_task_definitions(&self) -> Result<Vec<TaskDefinitionArn>, EcsError> {
        let response: ListTaskDefinitionsResponse = self
            .run_json(&["list-task-definitions", "--status", "ACTIVE", "--sort", "ASC"])
            .await?;
        Ok(response.task_definition_arns)
    }

    async fn deregister_task_definition(&self, arn: &TaskDefinitionArn) -> Result<(), EcsError> {
        self.run(&["deregister-task-definition", "--task-definition", arn.as_str()])
            .await?;
        info!(event = "core.ecs.task_definition_deregistered", arn = %arn);
        Ok(())
    }
}

/// Services reported `MISSING` were deleted between listing and describing
/// and hold no task definitions. Any other failure leaves the active set
/// incomplete, so it aborts the query.
fn check_describe_failures(cluster: &str, failures: &[DescribeFailure]) -> Result<(), EcsError> {
    for failure in failures {
        let arn = failure.arn.as_deref().unwrap_or("<unknown>");
        let reason = failure.reason.as_deref().unwrap_or("<none>");

        if reason == MISSING_SERVICE_REASON {
            warn!(
                event = "core.ecs.describe_service_missing",
                cluster = cluster,
                arn = arn
            );
            continue;
        }

        return Err(EcsError::InvalidResponse {
            command: format!("aws ecs describe-services --cluster {}", cluster),
            message: format!("service '{}' could not be described: {}", arn, reason),
        });
    }
    Ok(())
}

fn parse_response<T: DeserializeOwned>(command: &str, stdout: &[u8]) -> Result<T, EcsError> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(EcsError::InvalidResponse {
            command: command.to_string(),
            message: "empty output".to_string(),
        });
    }

    serde_json::from_slice(stdout).map_err(|e| EcsError::InvalidResponse {
        command: command.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(region: Option<&str>, profile: Option<&str>) -> AwsCliClient {
        AwsCliClient {
            program: "aws".to_string(),
            region: region.map(str::to_string),
            profile: profile.map(str::to_string),
            clusters: Vec::new(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_command_args_without_globals() {
        let args = client(None, None).command_args(&["list-clusters"]);
        assert_eq!(args, vec!["ecs", "list-clusters", "--output", "json"]);
    }

    #[test]
    fn test_command_args_with_region_and_profile() {
        let args = client(Some("eu-west-1"), Some("ops"))
            .command_args(&["list-services", "--cluster", "prod"]);
        assert_eq!(
            args,
            vec![
                "ecs",
                "list-services",
                "--cluster",
                "prod",
                "--output",
                "json",
                "--region",
                "eu-west-1",
                "--profile",
                "ops",
            ]
        );
    }

    #[test]
    fn test_parse_response_rejects_empty_output() {
        let result: Result<ListClustersResponse, _> =
            parse_response("aws ecs list-clusters", b" \n");
        assert!(matches!(result, Err(EcsError::InvalidResponse { .. })));
    }

    #[test]
    fn test_parse_response_rejects_invalid_json() {
        let result: Result<ListClustersResponse, _> =
            parse_response("aws ecs list-clusters", b"not json");
        match result {
            Err(EcsError::InvalidResponse { command, .. }) => {
                assert_eq!(command, "aws ecs list-clusters");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_decodes_candidates() {
        let response: ListTaskDefinitionsResponse = parse_response(
            "aws ecs list-task-definitions",
            br#"{"taskDefinitionArns": ["s/web:1"]}"#,
        )
        .unwrap();
        assert_eq!(response.task_definition_arns, vec![TaskDefinitionArn::from("s/web:1")]);
    }

    fn failure(arn: &str, reason: &str) -> DescribeFailure {
        DescribeFailure {
            arn: Some(arn.to_string()),
            reason: Some(reason.to_string()),
        }
    }

    #[test]
    fn test_missing_services_are_skipped() {
        let failures = vec![failure("arn:aws:ecs:eu-west-1:1:service/prod/gone", "MISSING")];
        assert!(check_describe_failures("prod", &failures).is_ok());
        assert!(check_describe_failures("prod", &[]).is_ok());
    }

    #[test]
    fn test_other_describe_failures_abort() {
        let failures = vec![
            failure("arn:aws:ecs:eu-west-1:1:service/prod/gone", "MISSING"),
            failure("arn:aws:ecs:eu-west-1:1:service/prod/web", "AccessDenied"),
        ];
        match check_describe_failures("prod", &failures) {
            Err(EcsError::InvalidResponse { command, message }) => {
                assert_eq!(command, "aws ecs describe-services --cluster prod");
                assert!(message.contains("service/prod/web"));
                assert!(message.contains("AccessDenied"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_describe_failure_without_reason_aborts() {
        let failures = vec![DescribeFailure {
            arn: Some("arn:aws:ecs:eu-west-1:1:service/prod/web".to_string()),
            reason: None,
        }];
        assert!(check_describe_failures("prod", &failures).is_err());
    }

    #[test]
    fn test_from_config_missing_cli() {
        let config = AwsConfig {
            cli_path: Some("/nonexistent/taskprune-test/aws".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            AwsCliClient::from_config(&config),
            Err(EcsError::CliNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_configured_clusters_skip_discovery() {
        let mut client = client(None, None);
        client.program = "/nonexistent/taskprune-test/aws".to_string();
        client.clusters = vec!["prod".to_string()];
        assert_eq!(client.cluster_names().await.unwrap(), vec!["prod".to_string()]);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_reported() {
        let mut client = client(None, None);
        client.program = "/nonexistent/taskprune-test/aws".to_string();
        let err = client.candidate_task_definitions().await.unwrap_err();
        assert!(matches!(err, EcsError::Spawn { .. }));
    }
}
