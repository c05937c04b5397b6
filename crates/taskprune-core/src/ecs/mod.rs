//! ECS collaborator: the trait the prune pipeline consumes and the
//! `aws` CLI backed implementation.

pub mod client;
pub mod errors;
pub mod traits;
pub mod types;

pub use client::AwsCliClient;
pub use errors::EcsError;
pub use traits::EcsApi;
pub use types::{Deployment, ServiceDescription};
