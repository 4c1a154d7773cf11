pub mod extract;
pub mod prompt;

use crate::{
    config::GeminiConfig,
    error::{CoverGenError, Result},
    logger,
    models::{aspect_ratio, ApiErrorEnvelope, GenerateContentResponse, GenerationResult, GeneratorState},
};
use reqwest::Client;
use serde_json::{json, Value};

pub use extract::{extract_image, DEFAULT_IMAGE_MIME};
pub use prompt::{
    build_edit_parts, build_edit_prompt, build_generation_parts, build_generation_prompt,
    EDIT_INPUT_MIME_TYPE,
};

/// Model used for both generation and edit calls.
pub const COVER_MODEL_ID: &str = "gemini-3-pro-image-preview";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Output size requested for generation; higher quality is left to the model.
pub const DEFAULT_IMAGE_SIZE: &str = "1K";

/// Surfaced when a generation failure produced no usable message.
pub const GENERATION_FALLBACK: &str =
    "generation failed, check the credential or network connection";

/// Surfaced when an edit failure produced no usable message.
pub const EDIT_FALLBACK: &str = "edit failed";

/// Client for the Gemini generateContent endpoint. One attempt per call,
/// no retries; failures surface the remote message to the caller.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model_id: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| CoverGenError::ConfigError("Gemini API key is required".into()))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            model_id: config.model_id.unwrap_or_else(|| COVER_MODEL_ID.to_string()),
            base_url: config.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Generates a cover from the full generator state. The platform's
    /// aspect-ratio hint is attached; reference images ride along as inline
    /// segments.
    pub async fn generate_cover(&self, state: &GeneratorState) -> Result<GenerationResult> {
        let body = generation_body(state);

        log::info!("Generating cover with model: {}", self.model_id);
        log::debug!(
            "Aspect ratio hint: {}",
            aspect_ratio(state.platform.id())
        );

        let _timer = logger::timer("generate_cover");
        let response = self.invoke(body, GENERATION_FALLBACK).await?;

        let image = extract::extract_image(&response)?;
        Ok(GenerationResult {
            image,
            model: self.model_id.clone(),
        })
    }

    /// Applies an edit instruction to the current image. No aspect-ratio
    /// hint: output dimensions follow the input image.
    pub async fn edit_cover(
        &self,
        current_image_base64: &str,
        instruction: &str,
    ) -> Result<GenerationResult> {
        let body = edit_body(current_image_base64, instruction);

        log::info!("Editing cover with model: {}", self.model_id);

        let _timer = logger::timer("edit_cover");
        let response = self.invoke(body, EDIT_FALLBACK).await?;

        let image = extract::extract_image(&response)?;
        Ok(GenerationResult {
            image,
            model: self.model_id.clone(),
        })
    }

    async fn invoke(&self, body: Value, fallback: &str) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_id
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CoverGenError::RequestError(surface(e.to_string(), fallback)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body_text)
                .ok()
                .map(|envelope| envelope.error.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| {
                    format!(
                        "HTTP {} {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("")
                    )
                });

            log::error!("Gemini call failed: {}", message);
            return Err(CoverGenError::RequestError(surface(message, fallback)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| CoverGenError::ResponseError(e.to_string()))
    }
}

fn surface(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Request body for a generation call. This is the only place the
/// aspect-ratio hint is attached.
fn generation_body(state: &GeneratorState) -> Value {
    json!({
        "contents": [{ "parts": prompt::build_generation_parts(state) }],
        "generationConfig": {
            "imageConfig": {
                "aspectRatio": aspect_ratio(state.platform.id()),
                "imageSize": DEFAULT_IMAGE_SIZE
            }
        }
    })
}

/// Request body for an edit call. No generation config: the service infers
/// output dimensions from the input image.
fn edit_body(current_image_base64: &str, instruction: &str) -> Value {
    json!({
        "contents": [{ "parts": prompt::build_edit_parts(current_image_base64, instruction) }]
    })
}
