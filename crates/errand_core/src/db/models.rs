//! Database model wrappers
//!
//! These types mirror the domain types but use RecordId for database
//! operations, keeping the typed ids on the domain side.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use surrealdb::RecordId;
use uuid::Uuid;

use crate::id::{IdError, TaskId};
use crate::identity::UserIdentity;
use crate::task::TaskRecord;

/// Database representation of a task record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbTask {
    pub id: RecordId,
    pub owner: String,
    pub content: String,
    pub created_at: surrealdb::Datetime,
}

pub fn strip_brackets(s: &str) -> &str {
    s.strip_prefix('⟨')
        .and_then(|s| s.strip_suffix('⟩'))
        .unwrap_or(s)
}

impl From<&TaskRecord> for DbTask {
    fn from(task: &TaskRecord) -> Self {
        Self {
            id: RecordId::from(task.id),
            owner: task.owner.as_str().to_string(),
            content: task.content.clone(),
            created_at: task.created_at.into(),
        }
    }
}

impl TryFrom<DbTask> for TaskRecord {
    type Error = IdError;

    fn try_from(db_task: DbTask) -> Result<Self, Self::Error> {
        // Extract the UUID from the record ID's key
        let id = TaskId::from_uuid(Uuid::from_str(strip_brackets(
            &db_task.id.key().to_string(),
        ))?);

        Ok(Self {
            id,
            owner: UserIdentity::from(db_task.owner),
            content: db_task.content,
            created_at: db_task.created_at.into_inner().into(),
        })
    }
}
