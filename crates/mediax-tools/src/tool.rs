//! Tool trait definition and types.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mediax_client::MediaxCredentials;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Clone)]
pub struct ToolArgs {
    /// Parameters as key-value pairs, already resolved by the host.
    pub params: HashMap<String, Value>,
    /// Optional credentials for tools that call the signed MediaX API.
    pub credentials: Option<Arc<MediaxCredentials>>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self {
            params,
            credentials: None,
        }
    }

    /// Create tool arguments with credentials for signed API calls.
    pub fn with_credentials(
        params: HashMap<String, Value>,
        credentials: Arc<MediaxCredentials>,
    ) -> Self {
        Self {
            params,
            credentials: Some(credentials),
        }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an optional string parameter.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.params.get(key)?.as_str().map(|s| s.to_string())
    }

    /// Get an optional positive integer parameter.
    pub fn get_u32_opt(&self, key: &str) -> Result<Option<u32>, ToolError> {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => {
                let num = v
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| ToolError::InvalidParameter {
                        name: key.to_string(),
                        reason: "expected a positive integer".to_string(),
                    })?;
                Ok(Some(num))
            }
        }
    }

    /// The injected credentials, or an error when the host supplied none.
    pub fn credentials(&self) -> Result<&Arc<MediaxCredentials>, ToolError> {
        self.credentials.as_ref().ok_or(ToolError::MissingCredentials)
    }
}

/// One message a tool hands back to the host chat UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolMessage {
    /// Plain text for the transcript.
    Text { text: String },
    /// Structured payload for hosts that render JSON.
    Json { value: Value },
    /// Link to an image the host may inline.
    ImageLink {
        url: String,
        mime_type: Option<String>,
    },
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Messages in the order the host should render them.
    pub messages: Vec<ToolMessage>,
}

impl ToolOutput {
    /// A single text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            messages: vec![ToolMessage::Text { text: text.into() }],
        }
    }

    /// A single JSON message.
    pub fn json(value: Value) -> Self {
        Self {
            messages: vec![ToolMessage::Json { value }],
        }
    }

    /// An arbitrary message list.
    pub fn messages(messages: Vec<ToolMessage>) -> Self {
        Self { messages }
    }
}

/// Trait for tools that can be dispatched by the host runtime.
///
/// Tools are stateless, single-shot request/response transformations: they
/// take already-resolved parameters, perform at most one outbound call, and
/// return messages for the host to render.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
