//! ECS collaborator error types.

use crate::errors::TaskPruneError;

#[derive(Debug, thiserror::Error)]
pub enum EcsError {
    #[error("AWS CLI not found: '{program}' is not on PATH")]
    CliNotFound { program: String },

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("'{command}' did not finish within {timeout_secs}s")]
    Timeout { command: String, timeout_secs: u64 },

    #[error("Unexpected response from '{command}': {message}")]
    InvalidResponse { command: String, message: String },
}

impl TaskPruneError for EcsError {
    fn error_code(&self) -> &'static str {
        match self {
            EcsError::CliNotFound { .. } => "ECS_CLI_NOT_FOUND",
            EcsError::Spawn { .. } => "ECS_SPAWN_FAILED",
            EcsError::CommandFailed { .. } => "ECS_COMMAND_FAILED",
            EcsError::Timeout { .. } => "ECS_TIMEOUT",
            EcsError::InvalidResponse { .. } => "ECS_INVALID_RESPONSE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, EcsError::CliNotFound { .. })
    }
}
