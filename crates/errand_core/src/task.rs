//! Task domain model
//!
//! Loosely-typed text from the conversational framework is converted into
//! [`TaskContent`] here before it can reach the store.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::id::TaskId;
use crate::identity::UserIdentity;

/// Upper bound on task descriptions, matching the conversational
/// platform's simple-response limit.
pub const MAX_CONTENT_CHARS: usize = 640;

/// Validated task description: trimmed, non-empty, bounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TaskContent(String);

impl TaskContent {
    /// Validate raw text into task content.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let actual = trimmed.chars().count();
        if actual > MAX_CONTENT_CHARS {
            return Err(ValidationError::ContentTooLong {
                max: MAX_CONTENT_CHARS,
                actual,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single persisted task belonging to one user.
///
/// Append-only: `id`, `owner`, and `created_at` are set at creation and
/// never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskRecord {
    pub id: TaskId,
    pub owner: UserIdentity,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
