//! Passthrough queries against the data-access Elasticsearch proxy.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::SearchError;
use crate::http::built_in_client;

/// Excluded unless the caller names its own includes; embedding vectors
/// dwarf the rest of a hit.
const DEFAULT_EXCLUDE_FIELD: &str = "imageFeature";

/// Result of one proxied ES query.
#[derive(Debug, Clone, PartialEq)]
pub struct EsSearchOutcome {
    /// Verbatim response from the proxy, not normalized.
    pub datas: Value,
    /// The query that was actually sent, `_source` clause included.
    pub query: Value,
}

/// Client for the data-access Elasticsearch proxy.
///
/// This is pure request shaping plus passthrough: the caller's query body is
/// forwarded after merging a `_source` inclusion/exclusion clause, and the
/// remote JSON comes back untouched.
pub struct EsSearchClient {
    domain: String,
    client: reqwest::Client,
}

impl EsSearchClient {
    /// Create a client on the shared connection pool.
    pub fn new(domain: impl Into<String>) -> Self {
        Self::with_client(domain, built_in_client())
    }

    /// Create a client with a caller-configured `reqwest::Client`.
    pub fn with_client(domain: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            domain: domain.into(),
            client,
        }
    }

    /// Forward a caller-supplied query body, shaping its `_source` clause.
    ///
    /// `source_includes` is a comma-separated field list; when present those
    /// fields extend `_source.includes`, otherwise `imageFeature` is appended
    /// to `_source.excludes`.
    pub async fn query(
        &self,
        index_name: &str,
        query_body: &str,
        source_includes: Option<&str>,
    ) -> Result<EsSearchOutcome, SearchError> {
        let parsed: Map<String, Value> = serde_json::from_str(query_body)?;
        let query = Value::Object(shape_source(parsed, source_includes));

        let url = format!(
            "{}/data_access/elasticsearch/query/{}/_search",
            self.domain, index_name
        );
        debug!(%url, "forwarding ES query");

        let response = self.client.post(&url).json(&query).send().await?;
        let datas: Value = response.json().await?;

        Ok(EsSearchOutcome { datas, query })
    }
}

/// Merge the `_source` clause into the caller's query body.
fn shape_source(
    mut query: Map<String, Value>,
    source_includes: Option<&str>,
) -> Map<String, Value> {
    let mut source = match query.remove("_source") {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    match source_includes.filter(|fields| !fields.is_empty()) {
        Some(fields) => {
            let includes = source
                .entry("includes")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = includes {
                list.extend(fields.split(',').map(|field| Value::String(field.to_string())));
            }
        }
        None => {
            let excludes = source
                .entry("excludes")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = excludes {
                list.push(Value::String(DEFAULT_EXCLUDE_FIELD.to_string()));
            }
        }
    }

    query.insert("_source".to_string(), Value::Object(source));
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_default_excludes_image_feature() {
        let query = as_map(json!({"query": {"match_all": {}}}));
        let shaped = shape_source(query, None);
        assert_eq!(
            shaped.get("_source"),
            Some(&json!({"excludes": ["imageFeature"]}))
        );
        // rest of the body passes through untouched
        assert_eq!(shaped.get("query"), Some(&json!({"match_all": {}})));
    }

    #[test]
    fn test_existing_excludes_are_extended() {
        let query = as_map(json!({"_source": {"excludes": ["thumbnail"]}}));
        let shaped = shape_source(query, None);
        assert_eq!(
            shaped.get("_source"),
            Some(&json!({"excludes": ["thumbnail", "imageFeature"]}))
        );
    }

    #[test]
    fn test_source_includes_creates_includes_list() {
        let query = as_map(json!({"query": {"match_all": {}}}));
        let shaped = shape_source(query, Some("title,url"));
        assert_eq!(
            shaped.get("_source"),
            Some(&json!({"includes": ["title", "url"]}))
        );
    }

    #[test]
    fn test_source_includes_extends_existing_list() {
        let query = as_map(json!({"_source": {"includes": ["mediaId"]}}));
        let shaped = shape_source(query, Some("title,url"));
        assert_eq!(
            shaped.get("_source"),
            Some(&json!({"includes": ["mediaId", "title", "url"]}))
        );
    }

    #[test]
    fn test_empty_includes_falls_back_to_exclude() {
        let query = as_map(json!({}));
        let shaped = shape_source(query, Some(""));
        assert_eq!(
            shaped.get("_source"),
            Some(&json!({"excludes": ["imageFeature"]}))
        );
    }

    #[test]
    fn test_non_object_source_is_replaced() {
        let query = as_map(json!({"_source": false}));
        let shaped = shape_source(query, None);
        assert_eq!(
            shaped.get("_source"),
            Some(&json!({"excludes": ["imageFeature"]}))
        );
    }
}
