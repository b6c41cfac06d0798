//! Wire types for MediaX search responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One media asset returned by the search endpoint.
///
/// The fields the tools rely on are typed; everything else the service sends
/// is kept verbatim in `extra` rather than stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub media_id: String,
    pub title: String,
    pub url: String,
    /// Asset category: video, image, audio, draft, doc, epaper, file, folder.
    #[serde(default)]
    pub media_type: String,
    /// Concrete format within the category, e.g. "jpg" or "mp4".
    #[serde(default)]
    pub sub_media_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_kept() {
        let record: MediaRecord = serde_json::from_value(json!({
            "mediaId": "m-1",
            "title": "Harbor at dawn",
            "url": "https://cdn.example.com/m-1.jpg",
            "mediaType": "image",
            "subMediaType": "jpg",
            "duration": 0,
            "tags": ["harbor", "dawn"],
        }))
        .unwrap();

        assert_eq!(record.media_id, "m-1");
        assert_eq!(record.extra.get("duration"), Some(&json!(0)));
        assert_eq!(record.extra.get("tags"), Some(&json!(["harbor", "dawn"])));
    }

    #[test]
    fn test_category_fields_default_when_absent() {
        let record: MediaRecord = serde_json::from_value(json!({
            "mediaId": "m-2",
            "title": "Evening news",
            "url": "https://cdn.example.com/m-2.mp4",
        }))
        .unwrap();

        assert_eq!(record.media_type, "");
        assert_eq!(record.sub_media_type, "");
    }
}
