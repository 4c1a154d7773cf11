use crate::{
    config::CredentialConfig,
    error::{CoverGenError, Result},
};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Required literal prefix of a Gemini API key.
pub const CREDENTIAL_PREFIX: &str = "AIza";

/// Fixed message shown when a stored credential is invalidated.
pub const INVALID_CREDENTIAL_PROMPT: &str = "API key invalid or expired, please re-enter it.";

/// Durable store for the single API credential. One string, one file;
/// survives restarts, removed on `clear`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(config: CredentialConfig) -> Result<Self> {
        let path = match config.path {
            Some(path) => path,
            None => default_credential_path()?,
        };

        Ok(Self { path })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(CredentialConfig::from_env())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the stored credential, or `None` when nothing usable is
    /// persisted.
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let credential = contents.trim();
        if credential.is_empty() {
            return None;
        }
        Some(credential.to_string())
    }

    /// Persists the credential. Values not starting with
    /// [`CREDENTIAL_PREFIX`] are rejected and nothing is written.
    pub fn save(&self, credential: &str) -> Result<()> {
        let credential = credential.trim();
        if !credential.starts_with(CREDENTIAL_PREFIX) {
            return Err(CoverGenError::CredentialError(format!(
                "API key must start with '{}'",
                CREDENTIAL_PREFIX
            )));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CoverGenError::CredentialError(e.to_string()))?;
        }

        fs::write(&self.path, credential)
            .map_err(|e| CoverGenError::CredentialError(e.to_string()))?;

        log::debug!("Credential saved to {}", self.path.display());
        Ok(())
    }

    /// Removes the stored credential. Idempotent.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Stored credential cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoverGenError::CredentialError(e.to_string())),
        }
    }
}

fn default_credential_path() -> Result<PathBuf> {
    let home = env::var("HOME")
        .map_err(|_| CoverGenError::ConfigError("HOME is not set".into()))?;

    Ok(PathBuf::from(home)
        .join(".config")
        .join("covergen")
        .join("credential"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        let config = CredentialConfig::new().with_path(dir.path().join("credential"));
        CredentialStore::new(config).unwrap()
    }

    #[test]
    fn test_save_rejects_bad_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let result = store.save("badkey");
        assert!(result.is_err());
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("AIzaSyExample123").unwrap();
        assert_eq!(store.load().as_deref(), Some("AIzaSyExample123"));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("  AIzaSyExample123\n").unwrap();
        assert_eq!(store.load().as_deref(), Some("AIzaSyExample123"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_load_ignores_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "   \n").unwrap();
        assert!(store.load().is_none());
    }
}
