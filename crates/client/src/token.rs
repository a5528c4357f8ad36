//! Persisted bearer token storage.
//!
//! The client never caches the token itself: it asks the [`TokenStore`] on
//! every authenticated request. Stores hold at most one token and only ever
//! replace or delete it wholesale.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Key the token is stored under in the device-local key-value file.
pub const TOKEN_KEY: &str = "authToken";

/// Errors raised by a [`TokenStore`].
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object.
    #[error("corrupt token file: {0}")]
    Corrupt(String),
}

impl From<serde_json::Error> for TokenStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}

/// Where the bearer token lives between requests.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// The current token, or `None` if signed out.
    async fn load(&self) -> Result<Option<SecretString>, TokenStoreError>;

    /// Replace the current token.
    async fn save(&self, token: &SecretString) -> Result<(), TokenStoreError>;

    /// Remove the current token.
    async fn clear(&self) -> Result<(), TokenStoreError>;
}

// =============================================================================
// In-memory store
// =============================================================================

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    /// An empty (signed-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<SecretString>, TokenStoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &SecretString) -> Result<(), TokenStoreError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.write().await = None;
        Ok(())
    }
}

// =============================================================================
// File-backed store
// =============================================================================

/// Token store backed by a small JSON key-value file.
///
/// The token is kept under [`TOKEN_KEY`]. Other keys in the file are left
/// untouched, so the file can be shared with other local preferences.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token in `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<Map<String, Value>, TokenStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            other => Err(TokenStoreError::Corrupt(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    async fn write_map(&self, map: Map<String, Value>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec_pretty(&Value::Object(map))?;

        // Write a private sibling file, then swap it in
        let temp = self.temp_path();
        if let Err(e) = tokio::fs::remove_file(&temp).await
            && e.kind() != std::io::ErrorKind::NotFound
        {
            return Err(e.into());
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&temp).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }

    /// `<file name>.tmp` next to the backing file.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<SecretString>, TokenStoreError> {
        let map = self.read_map().await?;
        Ok(map
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::from(t.to_string())))
    }

    #[instrument(skip(self, token), fields(path = %self.path.display()))]
    async fn save(&self, token: &SecretString) -> Result<(), TokenStoreError> {
        let mut map = self.read_map().await?;
        map.insert(
            TOKEN_KEY.to_string(),
            Value::String(token.expose_secret().to_string()),
        );
        self.write_map(map).await?;
        debug!("Token persisted");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn clear(&self) -> Result<(), TokenStoreError> {
        let mut map = self.read_map().await?;
        if map.remove(TOKEN_KEY).is_some() {
            self.write_map(map).await?;
            debug!("Token removed");
        }
        Ok(())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.save(&SecretString::from("abc")).await.unwrap();
        let token = store.load().await.unwrap().unwrap();
        assert_eq!(token.expose_secret(), "abc");

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/session.json"));
        assert!(store.load().await.unwrap().is_none());
        // Clearing a missing file is a no-op, not an error
        store.clear().await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_file_store_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/session.json"));

        store.save(&SecretString::from("tok-1")).await.unwrap();
        assert_eq!(
            store.load().await.unwrap().unwrap().expose_secret(),
            "tok-1"
        );

        store.save(&SecretString::from("tok-2")).await.unwrap();
        assert_eq!(
            store.load().await.unwrap().unwrap().expose_secret(),
            "tok-2"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(&path);
        store.save(&SecretString::from("secret-bearer")).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "token file mode is {mode:o}");
    }

    #[tokio::test]
    async fn test_file_store_replaces_stale_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        // Left behind by an interrupted save
        std::fs::write(dir.path().join("session.json.tmp"), "{\"authTo").unwrap();

        let store = FileTokenStore::new(&path);
        store.save(&SecretString::from("tok-1")).await.unwrap();

        assert_eq!(
            store.load().await.unwrap().unwrap().expose_secret(),
            "tok-1"
        );
        assert!(!dir.path().join("session.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        tokio::fs::write(&path, r#"{"theme":"dark","authToken":"old"}"#)
            .await
            .unwrap();

        let store = FileTokenStore::new(&path);
        store.clear().await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["theme"], "dark");
        assert!(value.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_file_store_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "[1,2]").await.unwrap();

        let err = FileTokenStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, TokenStoreError::Corrupt(_)));
    }
}
