//! Inbound fulfillment event types
//!
//! The narrow subset of the conversational framework's request format
//! this webhook consumes: which handler fired, the captured intent
//! parameters, and session state. Everything else on the wire is passed
//! through untouched by the framework layer and ignored here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An inbound fulfillment event
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FulfillmentRequest {
    pub handler: Handler,
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub session: Session,
}

/// The webhook handler the framework routed this event to
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Handler {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub params: HashMap<String, IntentParam>,
}

/// A captured intent parameter with its raw and resolved values
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IntentParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default)]
    pub resolved: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Session {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

impl FulfillmentRequest {
    /// Resolved string value of an intent parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.intent
            .params
            .get(name)
            .and_then(|param| param.resolved.as_str())
    }

    /// String value of a session parameter
    pub fn session_param(&self, name: &str) -> Option<&str> {
        self.session.params.get(name).and_then(|value| value.as_str())
    }
}
