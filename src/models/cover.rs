use crate::error::{CoverGenError, Result};
use crate::models::platform::Platform;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Maximum number of style tags a single generation may carry.
pub const MAX_STYLE_TAGS: usize = 5;

/// The fixed style-keyword vocabulary offered to users.
pub const STYLE_TAGS: [&str; 12] = [
    "强冲突",
    "高饱和",
    "极简主义",
    "大字报",
    "清新干货",
    "电影感",
    "搞钱风",
    "赛博朋克",
    "情绪大片",
    "日系胶片",
    "3D立体",
    "手绘插画",
];

/// A base64-encoded image and its media type. The payload is the raw
/// encoding only, never a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub base64: String,
    pub mime_type: String,
}

impl ImageData {
    pub fn new(base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` URL, keeping only the raw
    /// payload. Returns `None` for anything else.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (mime_type, payload) = rest.split_once(";base64,")?;
        if mime_type.is_empty() || payload.is_empty() {
            return None;
        }

        Some(Self {
            base64: payload.to_string(),
            mime_type: mime_type.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.base64)
            .map_err(|e| CoverGenError::SerializationError(e.to_string()))
    }
}

/// Everything the user configured for one cover generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorState {
    pub main_title: String,
    pub sub_title: String,
    pub platform: Platform,
    pub subject_image: Option<ImageData>,
    pub style_image: Option<ImageData>,
    pub custom_prompt: String,
    pub selected_tags: Vec<String>,
}

impl GeneratorState {
    pub fn new(main_title: impl Into<String>, platform: Platform) -> Self {
        Self {
            main_title: main_title.into(),
            sub_title: String::new(),
            platform,
            subject_image: None,
            style_image: None,
            custom_prompt: String::new(),
            selected_tags: Vec::new(),
        }
    }

    pub fn with_sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = sub_title.into();
        self
    }

    pub fn with_subject_image(mut self, image: ImageData) -> Self {
        self.subject_image = Some(image);
        self
    }

    pub fn with_style_image(mut self, image: ImageData) -> Self {
        self.style_image = Some(image);
        self
    }

    pub fn with_custom_prompt(mut self, custom_prompt: impl Into<String>) -> Self {
        self.custom_prompt = custom_prompt.into();
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Pre-flight check before any remote call: the main title must be
    /// present and the tag set within [`MAX_STYLE_TAGS`].
    pub fn validate(&self) -> Result<()> {
        if self.main_title.trim().is_empty() {
            return Err(CoverGenError::ValidationError(
                "main title is required".into(),
            ));
        }

        if self.selected_tags.len() > MAX_STYLE_TAGS {
            return Err(CoverGenError::ValidationError(format!(
                "at most {} style tags are allowed",
                MAX_STYLE_TAGS
            )));
        }

        Ok(())
    }
}

/// The extracted output of a generation or edit call. Held as the current
/// result until replaced by the next call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub image: ImageData,
    pub model: String,
}
