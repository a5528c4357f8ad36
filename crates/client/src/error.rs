//! Client error types.

use storedesk_core::{DomainError, PolicyContentError};
use thiserror::Error;

use crate::token::TokenStoreError;

/// Errors returned by [`RemoteStoreClient`](crate::RemoteStoreClient)
/// operations.
///
/// `Api`, `Validation` and `UnexpectedResponse` display as the bare message
/// so callers can show them to the user unchanged.
#[derive(Debug, Error)]
pub enum StoreApiError {
    /// Transport failure: connection refused, DNS, TLS, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend `message`, or the operation's fallback text.
        message: String,
    },

    /// A client-side precondition failed before any request was made.
    #[error("{0}")]
    Validation(String),

    /// A success reply was missing something the operation needs.
    #[error("{0}")]
    UnexpectedResponse(String),

    /// The request URL could not be built from the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A success reply was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing the persisted token failed.
    #[error("Token storage error: {0}")]
    TokenStore(#[from] TokenStoreError),
}

impl StoreApiError {
    /// HTTP status of an `Api` error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend rejected the bearer token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

impl From<DomainError> for StoreApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PolicyContentError> for StoreApiError {
    fn from(err: PolicyContentError) -> Self {
        Self::Validation(err.to_string())
    }
}
