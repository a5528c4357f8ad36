//! Store backend REST client.
//!
//! Owns the HTTP client, the base URL and the token store, and implements the
//! one request/response cycle every operation goes through. The operations
//! themselves live in [`crate::auth`] and [`crate::settings`].

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use storedesk_core::FileUpload;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::envelope;
use crate::error::StoreApiError;
use crate::token::TokenStore;

/// Client for the store-management REST backend.
///
/// Cheap to clone; clones share the HTTP connection pool and token store.
///
/// # Authentication
///
/// Authenticated endpoints read the token from the [`TokenStore`] on every
/// call. When no token is stored the request is still sent, with the header
/// `Authorization: Bearer null`, and the backend decides.
#[derive(Clone)]
pub struct RemoteStoreClient {
    inner: Arc<RemoteStoreClientInner>,
}

struct RemoteStoreClientInner {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for RemoteStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStoreClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Request body for one dispatch.
pub(crate) enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RemoteStoreClient {
    /// Create a client for `config.base_url` using `tokens` for the bearer
    /// token.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, StoreApiError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self::with_http_client(client, &config.base_url, tokens))
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(
        client: reqwest::Client,
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            inner: Arc::new(RemoteStoreClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
                tokens,
            }),
        }
    }

    /// Backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The token store this client reads from.
    #[must_use]
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.tokens
    }

    // =========================================================================
    // Token handling
    // =========================================================================

    /// `Authorization` header value built from the stored token.
    async fn bearer_header(&self) -> Result<String, StoreApiError> {
        let token = self.inner.tokens.load().await?;
        Ok(match token {
            Some(token) => format!("Bearer {}", token.expose_secret()),
            None => {
                debug!("No stored token, sending literal null bearer");
                "Bearer null".to_string()
            }
        })
    }

    /// Persist a token returned by the backend.
    pub(crate) async fn store_token(&self, token: &SecretString) -> Result<(), StoreApiError> {
        self.inner.tokens.save(token).await?;
        Ok(())
    }

    /// Remove the stored token.
    pub(crate) async fn forget_token(&self) -> Result<(), StoreApiError> {
        self.inner.tokens.clear().await?;
        Ok(())
    }

    /// Whether a token is currently stored.
    pub(crate) async fn has_token(&self) -> Result<bool, StoreApiError> {
        Ok(self.inner.tokens.load().await?.is_some())
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Send one request to `endpoint` and return the parsed success body.
    ///
    /// `suffix` is appended to the endpoint path as one percent-encoded
    /// segment (used for `/{id}` routes).
    ///
    /// # Errors
    ///
    /// - `StoreApiError::Http` if the request cannot be sent or read
    /// - `StoreApiError::Api` for non-2xx replies, carrying the backend
    ///   `message` or the endpoint's fallback text
    /// - `StoreApiError::Parse` if a 2xx body is not JSON
    #[instrument(
        skip(self, endpoint, body),
        fields(method = %endpoint.method, path = endpoint.path)
    )]
    pub(crate) async fn dispatch(
        &self,
        endpoint: &Endpoint,
        suffix: Option<&str>,
        body: RequestBody,
    ) -> Result<Value, StoreApiError> {
        let url = endpoint_url(&self.inner.base_url, endpoint, suffix)?;

        let mut request = self
            .inner
            .client
            .request(endpoint.method.clone(), url)
            .header(ACCEPT, "application/json");

        if endpoint.authenticated {
            request = request.header(AUTHORIZATION, self.bearer_header().await?);
        }

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = envelope::error_message(&text)
                .unwrap_or_else(|| endpoint.fallback_error.to_string());
            warn!(status = status.as_u16(), error = %message, "Store API request failed");
            return Err(StoreApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Store API request succeeded");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a JSON body built from any serialisable payload.
    pub(crate) async fn send_json<B: serde::Serialize + Sync>(
        &self,
        endpoint: &Endpoint,
        suffix: Option<&str>,
        body: &B,
    ) -> Result<Value, StoreApiError> {
        let value = serde_json::to_value(body)?;
        self.dispatch(endpoint, suffix, RequestBody::Json(value))
            .await
    }

    /// GET (or bodiless DELETE) an endpoint.
    pub(crate) async fn send_empty(
        &self,
        endpoint: &Endpoint,
        suffix: Option<&str>,
    ) -> Result<Value, StoreApiError> {
        self.dispatch(endpoint, suffix, RequestBody::Empty).await
    }

    /// POST a multipart form made of text `fields` and optional `files`.
    pub(crate) async fn send_multipart(
        &self,
        endpoint: &Endpoint,
        fields: Vec<(&'static str, String)>,
        files: Vec<(&'static str, &FileUpload)>,
    ) -> Result<Value, StoreApiError> {
        let form = build_form(fields, files)?;
        self.dispatch(endpoint, None, RequestBody::Multipart(form))
            .await
    }
}

/// Assemble a multipart form. Text fields are always present (callers pass
/// `""` for unset values); file parts only when supplied.
pub(crate) fn build_form(
    fields: Vec<(&'static str, String)>,
    files: Vec<(&'static str, &FileUpload)>,
) -> Result<Form, StoreApiError> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    for (name, file) in files {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        form = form.part(name, part);
    }
    Ok(form)
}

/// Full URL for `endpoint`, with `suffix` pushed as a single path segment.
fn endpoint_url(
    base_url: &str,
    endpoint: &Endpoint,
    suffix: Option<&str>,
) -> Result<Url, StoreApiError> {
    let mut url = Url::parse(&format!("{base_url}{}", endpoint.path))?;
    if let Some(suffix) = suffix {
        url.path_segments_mut()
            .map_err(|()| {
                StoreApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .push(suffix);
    }
    Ok(url)
}
