use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for the authenticated caller.
///
/// Derived from a verified credential by the identity decoder; immutable
/// for the lifetime of a request and never persisted on its own. Task
/// documents carry it as their partition key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserIdentity {
    fn from(subject: String) -> Self {
        Self(subject)
    }
}

impl From<&str> for UserIdentity {
    fn from(subject: &str) -> Self {
        Self(subject.to_string())
    }
}
