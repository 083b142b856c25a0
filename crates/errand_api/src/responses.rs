//! Outbound fulfillment response types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use errand_core::projection::RenderedItem;

/// A spoken/displayed text prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Simple {
    pub speech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Ordered list rendering of a task collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<RenderedItem>,
}

/// Browsable collection rendering of a task collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CollectionContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<RenderedItem>,
}

/// Rich content attached to a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    List(ListContent),
    Collection(CollectionContent),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Prompt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_simple: Option<Simple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentBlock>,
}

/// The webhook's reply to a fulfillment event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FulfillmentResponse {
    pub prompt: Prompt,
}

impl FulfillmentResponse {
    /// A response that speaks (and displays) the given message
    pub fn speech(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            prompt: Prompt {
                first_simple: Some(Simple {
                    text: Some(message.clone()),
                    speech: message,
                }),
                content: None,
            },
        }
    }

    /// Attach a list rendering of the given items
    pub fn with_list(mut self, title: impl Into<String>, items: Vec<RenderedItem>) -> Self {
        self.prompt.content = Some(ContentBlock::List(ListContent {
            title: Some(title.into()),
            subtitle: None,
            items,
        }));
        self
    }

    /// Attach a collection rendering of the given items
    pub fn with_collection(mut self, title: impl Into<String>, items: Vec<RenderedItem>) -> Self {
        self.prompt.content = Some(ContentBlock::Collection(CollectionContent {
            title: Some(title.into()),
            items,
        }));
        self
    }
}

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub database_status: ComponentStatus,
}
