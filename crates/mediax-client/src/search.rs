//! Keyword search against the MediaX open API.

use serde_json::Value;
use tracing::debug;

use crate::credentials::MediaxCredentials;
use crate::error::SearchError;
use crate::http::built_in_client;
use crate::model::MediaRecord;
use crate::sign::RequestSigner;

/// Success code in the gateway's response envelope.
const SUCCESS_CODE: &str = "00000";

/// Sentinel meaning "no filter" for both `hit_property` and `media_types`.
const FILTER_ALL: &str = "ALL";

/// Media types requested when the caller does not narrow the search.
pub const DEFAULT_MEDIA_TYPES: &str = "video,audio,image";

/// A single keyword search request.
///
/// Paging starts at 1 and defaults to 20 hits per page. `media_types` is a
/// comma-joined set of asset categories; it is forwarded as-is, the gateway
/// rejects values it does not know.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub page_no: u32,
    pub page_size: u32,
    pub hit_property: Option<String>,
    pub media_types: Option<String>,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page_no: 1,
            page_size: 20,
            hit_property: None,
            media_types: None,
        }
    }

    pub fn with_page_no(mut self, page_no: u32) -> Self {
        self.page_no = page_no.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Restrict which matched field category counts as a hit (title, tag,
    /// transcript, ...). `"ALL"` is equivalent to no restriction.
    pub fn with_hit_property(mut self, hit_property: impl Into<String>) -> Self {
        self.hit_property = Some(hit_property.into());
        self
    }

    pub fn with_media_types(mut self, media_types: impl Into<String>) -> Self {
        self.media_types = Some(media_types.into());
        self
    }

    /// Business query parameters, in gateway order.
    ///
    /// `hitPropert` (sic, the gateway's spelling) is omitted for the `ALL`
    /// sentinel; `mediaTypes` falls back to video/audio/image.
    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("keyword".to_string(), self.keyword.clone()),
            ("pageForm".to_string(), self.page_no.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];

        if let Some(hit) = self.hit_property.as_deref() {
            if !hit.is_empty() && hit != FILTER_ALL {
                params.push(("hitPropert".to_string(), hit.to_string()));
            }
        }

        let media_types = match self.media_types.as_deref() {
            None => DEFAULT_MEDIA_TYPES,
            Some(value) if value.is_empty() || value == FILTER_ALL => DEFAULT_MEDIA_TYPES,
            Some(value) => value,
        };
        params.push(("mediaTypes".to_string(), media_types.to_string()));

        params
    }
}

/// Client for the MediaX keyword search endpoint.
///
/// Stateless apart from the held credentials: every call computes a fresh
/// signature and issues one GET.
pub struct MediaSearchClient {
    credentials: MediaxCredentials,
    signer: RequestSigner,
    client: reqwest::Client,
}

impl MediaSearchClient {
    /// Create a client on the shared connection pool.
    pub fn new(credentials: MediaxCredentials) -> Self {
        Self::with_client(credentials, built_in_client())
    }

    /// Create a client with a caller-configured `reqwest::Client`.
    pub fn with_client(credentials: MediaxCredentials, client: reqwest::Client) -> Self {
        let signer = RequestSigner::new(&credentials);
        Self {
            credentials,
            signer,
            client,
        }
    }

    /// Run one keyword search and normalize the response.
    ///
    /// Business failures (non-success `code`) carry the full decoded body;
    /// a success envelope without `data.data` is malformed, not empty.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<MediaRecord>, SearchError> {
        let mut params = query.query_params();
        params.extend(self.signer.sign().query_params());

        let url = format!("{}/openapi/mediax/search/v1", self.credentials.api_domain);
        debug!(%url, keyword = %query.keyword, "searching media assets");

        let response = self.client.get(&url).query(&params).send().await?;
        let body: Value = response.json().await?;

        parse_search_response(body)
    }
}

/// Split the gateway envelope into records or a typed error.
fn parse_search_response(body: Value) -> Result<Vec<MediaRecord>, SearchError> {
    let code = match body.get("code").and_then(Value::as_str) {
        Some(code) => code.to_string(),
        None => {
            return Err(SearchError::Malformed(
                "response has no string `code` field".to_string(),
            ))
        }
    };

    if code != SUCCESS_CODE {
        return Err(SearchError::Business { code, raw: body });
    }

    let records = body
        .get("data")
        .and_then(|data| data.get("data"))
        .cloned()
        .ok_or_else(|| {
            SearchError::Malformed("success response is missing `data.data`".to_string())
        })?;

    serde_json::from_value(records)
        .map_err(|e| SearchError::Malformed(format!("`data.data` is not a media record list: {e}")))
}
