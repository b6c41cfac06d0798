//! Rendering of search results for the host chat UI.
//!
//! Pure functions over the record list; which one runs is decided by the
//! `return_type` tool parameter.

use mediax_client::MediaRecord;
use serde_json::{json, Value};

use crate::tool::ToolMessage;

/// Compact JSON projection of the records: id, title and url per hit.
pub fn records_to_json(records: &[MediaRecord]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|record| {
                json!({
                    "mediaId": record.media_id,
                    "title": record.title,
                    "url": record.url,
                })
            })
            .collect(),
    )
}

/// Markdown document: image hits inlined first, then video/audio as a link list.
pub fn records_to_markdown(records: &[MediaRecord]) -> String {
    let mut doc = String::new();

    for record in records.iter().filter(|r| r.media_type == "image") {
        doc.push_str(&format!("![{}]({})\n\n", record.title, record.url));
    }

    for record in records
        .iter()
        .filter(|r| r.media_type == "video" || r.media_type == "audio")
    {
        doc.push_str(&format!("- [{}]({})\n", record.title, record.url));
    }

    doc
}

/// One image-link message per image hit, with a mime type when the record
/// names its format.
pub fn image_link_messages(records: &[MediaRecord]) -> Vec<ToolMessage> {
    records
        .iter()
        .filter(|r| r.media_type == "image")
        .map(|record| ToolMessage::ImageLink {
            url: record.url.clone(),
            mime_type: if record.sub_media_type.is_empty() {
                None
            } else {
                Some(format!("image/{}", record.sub_media_type))
            },
        })
        .collect()
}
