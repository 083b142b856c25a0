//! Store operations - direct, simple, no unnecessary abstractions

use surrealdb::{Connection, Surreal};

use crate::db::models::DbTask;
use crate::db::{Result, StoreError, store_error};
use crate::id::{IdType, TaskId, TaskIdType};
use crate::identity::UserIdentity;
use crate::task::{TaskContent, TaskRecord};

pub trait TaskStoreExt<C> {
    /// Append a task to the owner's collection
    fn create_task(
        &self,
        owner: &UserIdentity,
        content: &str,
    ) -> impl Future<Output = Result<TaskRecord>>;

    /// The owner's full collection in creation order
    fn list_tasks(&self, owner: &UserIdentity) -> impl Future<Output = Result<Vec<TaskRecord>>>;
}

impl<T, C> TaskStoreExt<C> for T
where
    T: AsRef<Surreal<C>>,
    C: Connection,
{
    /// Create a new task for an owner.
    ///
    /// Validates the content, assigns a fresh id and timestamp, and
    /// writes a single document. Each call is atomic: either the record
    /// exists afterwards or it does not.
    async fn create_task(&self, owner: &UserIdentity, content: &str) -> Result<TaskRecord> {
        let content = TaskContent::parse(content)?;

        let record = TaskRecord {
            id: TaskId::generate(),
            owner: owner.clone(),
            content: content.into_string(),
            created_at: chrono::Utc::now(),
        };

        let created: Option<DbTask> = self
            .as_ref()
            .create((TaskIdType::PREFIX, record.id.uuid().to_string()))
            .content(DbTask::from(&record))
            .await
            .map_err(store_error)?;

        created
            .map(|db| {
                db.try_into()
                    .map_err(|_| StoreError::Other("Failed to parse task record".into()))
            })
            .ok_or_else(|| StoreError::Other("Failed to create task".into()))?
    }

    /// Get all tasks for an owner, oldest first.
    ///
    /// An owner with no tasks yields an empty vec, not an error.
    async fn list_tasks(&self, owner: &UserIdentity) -> Result<Vec<TaskRecord>> {
        let query = format!(
            "SELECT * FROM {} WHERE owner = $owner ORDER BY created_at ASC",
            TaskIdType::PREFIX
        );

        let db_tasks: Vec<DbTask> = self
            .as_ref()
            .query(&query)
            .bind(("owner", owner.as_str().to_string()))
            .await
            .map_err(store_error)?
            .take(0)
            .map_err(store_error)?;

        // Convert DbTask results back to domain types
        db_tasks
            .into_iter()
            .map(|db| db.try_into())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| StoreError::Other("Failed to parse task records".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::client;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_store_operations() {
        let db = Arc::new(client::create_test_db().await.unwrap());

        let owner = UserIdentity::from("user-ops");

        // Create a task and verify the typed id
        let task = db.create_task(&owner, "water the plants").await.unwrap();
        assert!(task.id.to_string().starts_with("task_"));
        assert_eq!(task.owner, owner);
        assert_eq!(task.content, "water the plants");

        // The collection reflects the write
        let tasks = db.list_tasks(&owner).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, task.id);
        assert_eq!(tasks[0].content, "water the plants");

        // Content is trimmed before persisting
        let task = db.create_task(&owner, "  call the dentist  ").await.unwrap();
        assert_eq!(task.content, "call the dentist");
    }

    #[tokio::test]
    async fn create_task_rejects_blank_content() {
        let db = Arc::new(client::create_test_db().await.unwrap());
        let owner = UserIdentity::from("user-blank");

        let err = db.create_task(&owner, "   ").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidContent(crate::error::ValidationError::EmptyContent)
        ));

        // Nothing was persisted
        let tasks = db.list_tasks(&owner).await.unwrap();
        assert!(tasks.is_empty());
    }
}
