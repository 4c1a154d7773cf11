use std::fmt;

#[derive(Debug)]
pub enum CoverGenError {
    ConfigError(String),
    ValidationError(String),
    CredentialError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    NoImageFound,
}

impl fmt::Display for CoverGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverGenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CoverGenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CoverGenError::CredentialError(msg) => write!(f, "Credential error: {}", msg),
            CoverGenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            CoverGenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            CoverGenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CoverGenError::NoImageFound => write!(f, "failed to produce an image, please retry"),
        }
    }
}

impl std::error::Error for CoverGenError {}

pub type Result<T> = std::result::Result<T, CoverGenError>;

/// Pattern match for credential failures: any message containing `403` or
/// the substring `key`. This is the single place the classification lives;
/// callers clearing stored credentials must go through it.
pub fn is_auth_error(message: &str) -> bool {
    message.contains("403") || message.contains("key")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = CoverGenError::RequestError("boom".into());
        assert_eq!(err.to_string(), "Request error: boom");
        assert_eq!(
            CoverGenError::NoImageFound.to_string(),
            "failed to produce an image, please retry"
        );
    }

    #[test]
    fn test_is_auth_error_on_status() {
        assert!(is_auth_error("HTTP 403 Forbidden"));
        assert!(is_auth_error("got status: 403 Forbidden from upstream"));
    }

    #[test]
    fn test_is_auth_error_on_key_mentions() {
        assert!(is_auth_error("API key not valid. Please pass a valid API key."));
        // Substring match is deliberate and coarse: unrelated mentions of
        // "key" also trigger it.
        assert!(is_auth_error("missing key frame in stream"));
    }

    #[test]
    fn test_is_auth_error_negative() {
        assert!(!is_auth_error("connection reset by peer"));
        assert!(!is_auth_error("HTTP 500 Internal Server Error"));
    }
}
