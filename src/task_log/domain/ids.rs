//! Identifier types for the task log domain.

use super::TaskLogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally assigned identifier of a completed task.
///
/// Identifiers are unique per owner only; two owners may both hold a task
/// numbered `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps an externally assigned task number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the logical user owning task rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i64);

impl OwnerId {
    /// Owner used when no identity has been configured.
    pub const DEFAULT: Self = Self(1);

    /// Creates a validated owner identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogDomainError::InvalidOwnerId`] when the value is zero
    /// or negative.
    pub const fn new(value: i64) -> Result<Self, TaskLogDomainError> {
        if value <= 0 {
            return Err(TaskLogDomainError::InvalidOwnerId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
