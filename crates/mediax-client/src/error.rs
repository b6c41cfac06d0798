//! Error types for the MediaX clients.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the search and ES proxy clients.
///
/// Transport problems (could not reach the service, body was not JSON) are
/// kept distinct from business failures (the service answered, but with a
/// non-success code) so callers can tell the two apart.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed or the response body could not be decoded.
    #[error("request to search service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success business code.
    #[error("search service returned code {code}: {raw}")]
    Business { code: String, raw: Value },

    /// Success code, but the expected response shape is missing.
    #[error("malformed search response: {0}")]
    Malformed(String),

    /// Caller-supplied query body was not valid JSON.
    #[error("invalid query JSON: {0}")]
    InvalidQuery(#[from] serde_json::Error),
}
