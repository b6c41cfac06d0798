//! Elasticsearch proxy search tool.

use async_trait::async_trait;
use mediax_client::EsSearchClient;
use serde_json::json;
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Forwards a caller-supplied Elasticsearch query to the data-access proxy.
///
/// The query body passes through untouched apart from the `_source` clause:
/// `source_includes` fields are merged into `_source.includes`, and without
/// them the heavy `imageFeature` field is excluded.
///
/// # Parameters
///
/// - `domain` (required): Base URL of the data-access service.
/// - `query` (required): Elasticsearch query body as a JSON string.
/// - `index_name` (required): Index to search.
/// - `source_includes` (optional): Comma-separated field list to return.
///
/// # Examples
///
/// ```json
/// {"domain": "https://data.example.com", "index_name": "media", "query": "{\"query\": {\"match_all\": {}}}"}
/// ```
pub struct EsSearch;

impl EsSearch {
    /// Create a new ES search tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for EsSearch {
    fn name(&self) -> &str {
        "es_search"
    }

    fn description(&self) -> &str {
        "Forwards an Elasticsearch query body to the data-access proxy and \
         returns the raw response together with the effective query."
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let domain = args.get_string("domain")?;
        let query = args.get_string("query")?;
        let index_name = args.get_string("index_name")?;
        let source_includes = args.get_string_opt("source_includes");

        debug!(%index_name, "running ES proxy search");

        let client = EsSearchClient::new(domain);
        let outcome = client
            .query(&index_name, &query, source_includes.as_deref())
            .await?;

        Ok(ToolOutput::json(json!({
            "datas": outcome.datas,
            "query": outcome.query,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use serde_json::Value;

    #[tokio::test]
    async fn test_missing_required_parameters() {
        let tool = EsSearch::new();

        let result = tool.execute(ToolArgs::new(HashMap::new())).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }

    #[tokio::test]
    async fn test_invalid_query_json() {
        let tool = EsSearch::new();

        let mut params = HashMap::new();
        params.insert(
            "domain".to_string(),
            Value::String("https://data.example.com".to_string()),
        );
        params.insert("index_name".to_string(), Value::String("media".to_string()));
        params.insert("query".to_string(), Value::String("not json".to_string()));

        let result = tool.execute(ToolArgs::new(params)).await;
        assert!(matches!(
            result,
            Err(ToolError::Search(mediax_client::SearchError::InvalidQuery(_)))
        ));
    }
}
