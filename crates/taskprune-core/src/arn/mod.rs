//! Task definition identifiers.

pub mod errors;
pub mod types;

pub use errors::ArnError;
pub use types::{ParsedArn, TaskDefinitionArn};
