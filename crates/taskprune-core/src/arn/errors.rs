use crate::errors::TaskPruneError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArnError {
    #[error("Malformed task definition identifier '{arn}': expected '<scope>/<family>:<revision>'")]
    Malformed { arn: String },
}

impl TaskPruneError for ArnError {
    fn error_code(&self) -> &'static str {
        match self {
            ArnError::Malformed { .. } => "ARN_MALFORMED",
        }
    }
}
