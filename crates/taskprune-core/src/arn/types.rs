use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::ArnError;

/// `<scope>/<family>:<revision>`, where scope is everything before the only `/`.
static ARN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/]+)/([A-Za-z0-9_-]+):([0-9]+)$").expect("ARN pattern is a valid regex")
});

/// Full identifier of one task definition revision, e.g.
/// `arn:aws:ecs:eu-west-1:123456789012:task-definition/web:7`.
///
/// Ordering is plain string ordering. Within a family this only matches
/// revision order while revisions have the same number of digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDefinitionArn(String);

impl TaskDefinitionArn {
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into scope, family and revision. Anything that doesn't match
    /// the expected shape is an error, never a partial match.
    pub fn parse(&self) -> Result<ParsedArn<'_>, ArnError> {
        let malformed = || ArnError::Malformed {
            arn: self.0.clone(),
        };

        let captures = ARN_PATTERN.captures(&self.0).ok_or_else(malformed)?;
        let (Some(scope), Some(family), Some(revision)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(malformed());
        };
        let revision = revision.as_str().parse().map_err(|_| malformed())?;

        Ok(ParsedArn {
            scope: scope.as_str(),
            family: family.as_str(),
            revision,
        })
    }

    pub fn family(&self) -> Result<&str, ArnError> {
        self.parse().map(|parsed| parsed.family)
    }
}

impl fmt::Display for TaskDefinitionArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskDefinitionArn {
    fn from(arn: String) -> Self {
        Self(arn)
    }
}

impl From<&str> for TaskDefinitionArn {
    fn from(arn: &str) -> Self {
        Self(arn.to_string())
    }
}

/// Borrowed view of a parsed [`TaskDefinitionArn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedArn<'a> {
    pub scope: &'a str,
    pub family: &'a str,
    pub revision: u32,
}
