pub mod config;
pub mod credentials;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;

pub use config::{CredentialConfig, GeminiConfig};
pub use credentials::{CredentialStore, CREDENTIAL_PREFIX, INVALID_CREDENTIAL_PROMPT};
pub use error::{is_auth_error, CoverGenError, Result};
pub use gemini::{extract_image, GeminiClient, COVER_MODEL_ID};
pub use models::*;
