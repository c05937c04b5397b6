//! In-memory [`EcsApi`] used by the prune tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::arn::TaskDefinitionArn;
use crate::ecs::{EcsApi, EcsError, ServiceDescription};

pub(crate) fn arns(values: &[&str]) -> Vec<TaskDefinitionArn> {
    values.iter().map(|v| TaskDefinitionArn::from(*v)).collect()
}

pub(crate) fn service(name: &str, task_definition: &str) -> ServiceDescription {
    ServiceDescription {
        service_name: Some(name.to_string()),
        task_definition: Some(task_definition.into()),
        ..Default::default()
    }
}

fn network_error(command: &str) -> EcsError {
    EcsError::CommandFailed {
        command: command.to_string(),
        status: "exit status: 255".to_string(),
        stderr: "Could not connect to the endpoint URL".to_string(),
    }
}

#[derive(Default)]
pub(crate) struct FakeEcs {
    services: Vec<ServiceDescription>,
    candidates: Vec<TaskDefinitionArn>,
    fail_services: bool,
    fail_candidates: bool,
    fail_deregister: Option<TaskDefinitionArn>,
    deregister_delay: Duration,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub deregister_calls: AtomicUsize,
    pub deregistered: Mutex<Vec<TaskDefinitionArn>>,
}

impl FakeEcs {
    pub fn new(services: Vec<ServiceDescription>, candidates: Vec<TaskDefinitionArn>) -> Self {
        Self {
            services,
            candidates,
            deregister_delay: Duration::from_millis(2),
            ..Default::default()
        }
    }

    pub fn failing_services(mut self) -> Self {
        self.fail_services = true;
        self
    }

    pub fn failing_candidates(mut self) -> Self {
        self.fail_candidates = true;
        self
    }

    pub fn failing_deregister(mut self, arn: &str) -> Self {
        self.fail_deregister = Some(arn.into());
        self
    }

    pub fn deregistered(&self) -> Vec<TaskDefinitionArn> {
        self.deregistered.lock().unwrap().clone()
    }
}

impl EcsApi for FakeEcs {
    async fn describe_all_services(&self) -> Result<Vec<ServiceDescription>, EcsError> {
        tokio::task::yield_now().await;
        if self.fail_services {
            return Err(network_error("aws ecs describe-services"));
        }
        Ok(self.services.clone())
    }

    async fn candidate_task_definitions(&self) -> Result<Vec<TaskDefinitionArn>, EcsError> {
        tokio::task::yield_now().await;
        if self.fail_candidates {
            return Err(network_error("aws ecs list-task-definitions"));
        }
        Ok(self.candidates.clone())
    }

    async fn deregister_task_definition(&self, arn: &TaskDefinitionArn) -> Result<(), EcsError> {
        self.deregister_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.deregister_delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.fail_deregister.as_ref() == Some(arn) {
            return Err(network_error("aws ecs deregister-task-definition"));
        }
        self.deregistered.lock().unwrap().push(arn.clone());
        Ok(())
    }
}
