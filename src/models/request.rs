use crate::models::cover::ImageData;
use serde::Serialize;

/// One content segment of a generateContent request: either text or an
/// inline image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineImage,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: &ImageData) -> Self {
        Part::InlineData {
            inline_data: InlineImage {
                mime_type: image.mime_type.clone(),
                data: image.base64.clone(),
            },
        }
    }

    pub fn inline(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineImage {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Part::InlineData { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_part_serialization() {
        let json = serde_json::to_value(Part::text("标题")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "标题"}));
    }

    #[test]
    fn test_inline_part_uses_camel_case() {
        let image = ImageData::new("aGVsbG8=", "image/jpeg");
        let json = serde_json::to_value(Part::image(&image)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "inlineData": {"mimeType": "image/jpeg", "data": "aGVsbG8="}
            })
        );
        assert!(json.get("inline_data").is_none());
    }
}
