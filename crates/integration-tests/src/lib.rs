//! Contract tests for `storedesk-client`.
//!
//! Each test starts a [`wiremock`] server standing in for the store backend
//! and drives a real [`RemoteStoreClient`] against it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storedesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth` - Login, two-factor, registration, password reset, logout
//! - `settings` - Authenticated reads and mutations, preconditions

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use secrecy::ExposeSecret;
use storedesk_client::{ClientConfig, MemoryTokenStore, RemoteStoreClient, TokenStore};
use wiremock::{MockServer, Request};

/// Path prefix of the mock backend's API.
pub const API_PREFIX: &str = "/api";

/// A mock backend and a client pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub client: RemoteStoreClient,
}

impl TestBackend {
    /// Start a backend with no stored token.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built for the mock server.
    pub async fn start() -> Self {
        Self::with_store(MemoryTokenStore::new()).await
    }

    /// Start a backend with `token` already stored.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built for the mock server.
    pub async fn signed_in(token: &str) -> Self {
        Self::with_store(MemoryTokenStore::with_token(token)).await
    }

    async fn with_store(store: MemoryTokenStore) -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(store);
        let config = ClientConfig::new(&format!("{}{API_PREFIX}", server.uri()))
            .expect("Mock server URI is a valid base URL");
        let client = RemoteStoreClient::new(&config, tokens.clone())
            .expect("Failed to create store client");

        Self {
            server,
            tokens,
            client,
        }
    }

    /// Every request the backend has received so far.
    ///
    /// # Panics
    ///
    /// Panics if request recording was disabled.
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled")
    }

    /// The stored token, exposed for assertions.
    ///
    /// # Panics
    ///
    /// Panics if the token store fails.
    pub async fn stored_token(&self) -> Option<String> {
        self.tokens
            .load()
            .await
            .expect("Memory token store never fails")
            .map(|t| t.expose_secret().to_string())
    }
}

/// Full backend path for an endpoint path such as `/login`.
#[must_use]
pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

/// The `Authorization` header of a recorded request, if any.
#[must_use]
pub fn authorization(request: &Request) -> Option<&str> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
}

/// Body of a recorded request as lossy UTF-8, for multipart assertions.
#[must_use]
pub fn body_text(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
}
