//! Errand Core - user-scoped task persistence and projection
//!
//! This crate provides the task store backing the Errand fulfillment
//! webhook: typed identifiers, the document-database connection and
//! operations, and the pure projection that turns stored tasks into
//! display-ready items for the conversational UI.

pub mod db;
pub mod error;
pub mod id;
pub mod identity;
pub mod projection;
pub mod task;

pub use db::{DatabaseConfig, StoreError};
pub use error::ValidationError;
pub use id::{Id, IdType, TaskId};
pub use identity::UserIdentity;
pub use projection::{ImageSource, RenderedItem, project};
pub use task::{MAX_CONTENT_CHARS, TaskContent, TaskRecord};
