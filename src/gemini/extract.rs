use crate::error::{CoverGenError, Result};
use crate::models::{GenerateContentResponse, ImageData};

/// Media type assumed when the response omits one on an inline segment.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Pulls the first inline image out of a generateContent response: first
/// candidate only, first inline segment wins, accompanying text segments are
/// ignored. Shared by the generation and edit flows.
pub fn extract_image(response: &GenerateContentResponse) -> Result<ImageData> {
    let candidate = response
        .candidates
        .first()
        .ok_or(CoverGenError::NoImageFound)?;

    let content = candidate.content.as_ref().ok_or(CoverGenError::NoImageFound)?;

    for part in &content.parts {
        if let Some(blob) = &part.inline_data {
            return Ok(ImageData {
                base64: blob.data.clone(),
                mime_type: blob
                    .mime_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
            });
        }
    }

    Err(CoverGenError::NoImageFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_inline_segment_wins() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "two options"},
                            {"inlineData": {"mimeType": "image/png", "data": "QQ=="}},
                            {"inlineData": {"mimeType": "image/jpeg", "data": "Qg=="}}
                        ]
                    }
                }]
            }"#,
        );

        let image = extract_image(&response).unwrap();
        assert_eq!(image.base64, "QQ==");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_empty_candidates_fails() {
        let response = parse(r#"{"candidates": []}"#);
        assert!(matches!(
            extract_image(&response),
            Err(CoverGenError::NoImageFound)
        ));
    }

    #[test]
    fn test_text_only_response_fails() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "no can do"}]}
                }]
            }"#,
        );
        assert!(matches!(
            extract_image(&response),
            Err(CoverGenError::NoImageFound)
        ));
    }

    #[test]
    fn test_candidate_without_content_fails() {
        let response = parse(r#"{"candidates": [{"finishReason": "IMAGE_SAFETY"}]}"#);
        assert!(matches!(
            extract_image(&response),
            Err(CoverGenError::NoImageFound)
        ));
    }

    #[test]
    fn test_missing_mime_type_defaults_to_png() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"inlineData": {"data": "QQ=="}}]}
                }]
            }"#,
        );

        let image = extract_image(&response).unwrap();
        assert_eq!(image.mime_type, DEFAULT_IMAGE_MIME);
    }

    #[test]
    fn test_only_first_candidate_is_inspected() {
        let response = parse(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "empty-handed"}]}},
                    {"content": {"parts": [{"inlineData": {"data": "QQ=="}}]}}
                ]
            }"#,
        );
        assert!(extract_image(&response).is_err());
    }
}
