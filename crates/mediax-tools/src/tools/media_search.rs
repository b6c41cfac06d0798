//! Media asset search tool backed by the MediaX open API.

use async_trait::async_trait;
use mediax_client::{MediaSearchClient, SearchQuery};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::format;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Keyword search over the MediaX asset library.
///
/// Requires registry credentials; every call signs its own request.
///
/// # Parameters
///
/// - `keyword` (required): Search phrase.
/// - `hit_propert` (optional): Which matched field category counts as a hit
///   (title, tag, transcript, ...). Absent or `"ALL"` means no restriction.
/// - `media_types` (optional): Comma-joined asset categories. Absent or
///   `"ALL"` falls back to video/audio/image.
/// - `top_n` (optional, default 20): Number of hits to return.
/// - `return_type` (optional): `"json"` for a JSON text blob, `"markdown"`
///   for a markdown document, anything else for image-link messages.
///
/// # Examples
///
/// ```json
/// {"keyword": "harbor"}
/// {"keyword": "harbor", "media_types": "image", "top_n": 5}
/// {"keyword": "harbor", "hit_propert": "title", "return_type": "markdown"}
/// ```
pub struct MediaSearch;

impl MediaSearch {
    /// Create a new media search tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MediaSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MediaSearch {
    fn name(&self) -> &str {
        "media_search"
    }

    fn description(&self) -> &str {
        "Searches the MediaX asset library by keyword and returns matching \
         videos, images and audio as JSON, markdown or image links."
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let keyword = args.get_string("keyword")?;
        let return_type = args.get_string_opt("return_type").unwrap_or_default();
        let credentials = args.credentials()?;

        let mut query = SearchQuery::new(keyword);
        if let Some(hit_property) = args.get_string_opt("hit_propert") {
            query = query.with_hit_property(hit_property);
        }
        if let Some(media_types) = args.get_string_opt("media_types") {
            query = query.with_media_types(media_types);
        }
        if let Some(top_n) = args.get_u32_opt("top_n")? {
            query = query.with_page_size(top_n);
        }

        debug!(keyword = %query.keyword, %return_type, "running media search");

        let client = MediaSearchClient::new(credentials.as_ref().clone());
        let records = client.search(&query).await.map_err(|e| {
            warn!("media search failed: {}", e);
            ToolError::from(e)
        })?;

        debug!("media search returned {} records", records.len());

        Ok(match return_type.as_str() {
            "json" => ToolOutput::text(format::records_to_json(&records).to_string()),
            "markdown" => ToolOutput::text(format::records_to_markdown(&records)),
            _ => ToolOutput::messages(format::image_link_messages(&records)),
        })
    }
}
