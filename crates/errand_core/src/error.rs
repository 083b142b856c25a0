use miette::Diagnostic;
use thiserror::Error;

/// Task content validation failures
///
/// Raised at the typed boundary before anything reaches the store, and
/// again by the store itself so raw strings can never be persisted.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task description is empty")]
    #[diagnostic(
        code(errand_core::empty_content),
        help("Provide a non-empty task description")
    )]
    EmptyContent,

    #[error("Task description is too long: {actual} characters (limit {max})")]
    #[diagnostic(
        code(errand_core::content_too_long),
        help("Shorten the task description to fit the display limit")
    )]
    ContentTooLong { max: usize, actual: usize },
}
