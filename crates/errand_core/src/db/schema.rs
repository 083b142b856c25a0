//! Database schema definitions

use crate::id::{IdType, TaskIdType};

/// SQL schema definitions for the database
pub struct Schema;

impl Schema {
    /// Get all table definitions
    pub fn tables() -> Vec<TableDefinition> {
        vec![Self::system_metadata(), Self::tasks()]
    }

    /// System metadata table
    pub fn system_metadata() -> TableDefinition {
        TableDefinition {
            name: "system_metadata".to_string(),
            schema: r#"
                DEFINE TABLE system_metadata SCHEMAFULL;
                DEFINE FIELD schema_version ON system_metadata TYPE int;
                DEFINE FIELD created_at ON system_metadata TYPE datetime;
                DEFINE FIELD updated_at ON system_metadata TYPE datetime;
            "#
            .to_string(),
            indexes: vec![],
        }
    }

    /// Task documents, one per record, partitioned by owner
    pub fn tasks() -> TableDefinition {
        TableDefinition {
            name: TaskIdType::PREFIX.to_string(),
            schema: format!(
                r#"
                DEFINE TABLE {table} SCHEMAFULL;
                DEFINE FIELD owner ON {table} TYPE string;
                DEFINE FIELD content ON {table} TYPE string;
                DEFINE FIELD created_at ON {table} TYPE datetime;
            "#,
                table = TaskIdType::PREFIX
            ),
            indexes: vec![
                format!(
                    "DEFINE INDEX task_owner ON {} FIELDS owner",
                    TaskIdType::PREFIX
                ),
                format!(
                    "DEFINE INDEX task_owner_created ON {} FIELDS owner, created_at",
                    TaskIdType::PREFIX
                ),
            ],
        }
    }
}

/// Table definition with schema and indexes
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: String,
    pub schema: String,
    pub indexes: Vec<String>,
}
