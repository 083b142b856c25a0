//! Errand API types and definitions
//!
//! This crate defines the fulfillment request/response types for the
//! Errand webhook, shared between the server and client implementations.

pub mod error;
pub mod events;
pub mod responses;

pub use error::ApiError;
pub use events::{FulfillmentRequest, Handler, Intent, IntentParam, Session};
pub use responses::{
    CollectionContent, ContentBlock, FulfillmentResponse, ListContent, Prompt, Simple,
};

// Re-export the projection types the content blocks embed
pub use errand_core::projection::{ImageSource, RenderedItem};

/// API version constant
pub const API_VERSION: &str = "v1";
