//! MediaX search tools for a host chat runtime.
//!
//! This crate provides a `ToolRegistry` for registering and executing the
//! MediaX search tools. Tools are stateless, single-shot request/response
//! transformations: the host resolves the parameters and credentials, the
//! tool issues one outbound call and returns messages for the chat UI.
//!
//! # Architecture
//!
//! The clients in `mediax-client` do the signing, the HTTP calls and the
//! response normalization; the `Tool` implementations here adapt them to
//! host-dispatched parameter maps and render the results. Credentials are
//! injected by the registry into every execution, so tools never manage
//! credential storage themselves.
//!
//! # Built-in Tools
//!
//! - [`MediaSearch`] - Keyword search over video/image/audio assets, with
//!   JSON, markdown or image-link output.
//! - [`EsSearch`] - Passthrough queries against the Elasticsearch proxy.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use mediax_tools::{default_registry, MediaxCredentials};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut registry = default_registry();
//!     registry.set_credentials(Arc::new(MediaxCredentials::new(
//!         "ak", "sk", "https://mediax.example.com",
//!     )));
//!
//!     let mut params = HashMap::new();
//!     params.insert("keyword".to_string(), Value::String("harbor".to_string()));
//!
//!     let output = registry.execute("media_search", params).await.unwrap();
//!     println!("{} messages", output.messages.len());
//! }
//! ```

mod error;
mod registry;
mod tool;

pub mod format;
pub mod tools;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolMessage, ToolOutput};
pub use tools::{EsSearch, MediaSearch};

// Re-export what hosts need to wire up a registry
pub use async_trait::async_trait;
pub use mediax_client::MediaxCredentials;

/// Create a new registry with both built-in tools registered.
///
/// Note: `media_search` needs credentials for the signed API.
/// Call `registry.set_credentials(credentials)` to enable it.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(MediaSearch::new());
    registry.register(EsSearch::new());

    registry
}
