//! Command implementations, one module per command group.

pub mod auth;
pub mod domain;
pub mod faq;
pub mod password;
pub mod policy;
pub mod security;
pub mod shop;
pub mod social;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use storedesk_client::{ClientConfig, ConfigError, FileTokenStore, RemoteStoreClient, StoreApiError};
use storedesk_core::{FileUpload, ValidationErrors};
use thiserror::Error;

/// Errors surfaced by any command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] StoreApiError),

    /// Local form validation failed; nothing was sent.
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Build a client from the environment, persisting the token to the
/// configured file.
pub fn connect() -> Result<RemoteStoreClient, CliError> {
    let config = ClientConfig::from_env()?;
    tracing::debug!(base_url = %config.base_url, token_file = %config.token_file.display(), "Loaded configuration");

    let tokens = Arc::new(FileTokenStore::new(config.token_file.clone()));
    Ok(RemoteStoreClient::new(&config, tokens)?)
}

/// Write a result to stdout as pretty JSON.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Read a file to be uploaded as a multipart part.
pub fn read_upload(path: &Path) -> Result<FileUpload, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
    Ok(FileUpload::new(file_name, bytes))
}

/// Read a text file such as a policy document.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
