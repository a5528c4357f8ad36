//! Privacy, return and terms documents.
//!
//! All three documents share one read shape and one update shape; only the
//! endpoint and the backend field name differ per [`PolicyKind`].

use serde_json::Value;
use storedesk_core::{Acknowledgement, PolicyContent, PolicyDocument, PolicyKind};
use tracing::{debug, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints::{self, Endpoint};
use crate::envelope;
use crate::error::StoreApiError;

fn read_endpoint(kind: PolicyKind) -> &'static Endpoint {
    match kind {
        PolicyKind::Privacy => &endpoints::PRIVACY_POLICY,
        PolicyKind::Return => &endpoints::RETURN_POLICY,
        PolicyKind::Terms => &endpoints::TERMS,
    }
}

fn update_endpoint(kind: PolicyKind) -> &'static Endpoint {
    match kind {
        PolicyKind::Privacy => &endpoints::UPDATE_PRIVACY_POLICY,
        PolicyKind::Return => &endpoints::UPDATE_RETURN_POLICY,
        PolicyKind::Terms => &endpoints::UPDATE_TERMS,
    }
}

impl RemoteStoreClient {
    /// Fetch one policy document.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or the
    /// document's "Failed to fetch ..." text).
    #[instrument(skip(self))]
    pub async fn get_policy(&self, kind: PolicyKind) -> Result<PolicyDocument, StoreApiError> {
        let reply = self.send_empty(read_endpoint(kind), None).await?;
        Ok(map_policy(&reply, kind))
    }

    /// Replace one policy document.
    ///
    /// Blank content, or the editor's empty `<p><br></p>`, is rejected before
    /// any request is made.
    ///
    /// # Errors
    ///
    /// - `StoreApiError::Validation("<label> content cannot be empty")`
    /// - `StoreApiError::Api` with the backend message (or the document's
    ///   "Failed to update ..." text)
    #[instrument(skip(self, html), fields(len = html.len()))]
    pub async fn update_policy(
        &self,
        kind: PolicyKind,
        html: &str,
    ) -> Result<Acknowledgement, StoreApiError> {
        let content = PolicyContent::parse(kind, html)?;

        let reply = self
            .send_multipart(
                update_endpoint(kind),
                vec![(kind.field(), content.as_html().to_string())],
                Vec::new(),
            )
            .await?;

        debug!(policy = %kind, "Policy updated");
        Ok(envelope::acknowledgement(&reply))
    }

    /// Fetch the privacy policy.
    ///
    /// # Errors
    ///
    /// See [`get_policy`](Self::get_policy).
    pub async fn get_privacy_policy(&self) -> Result<PolicyDocument, StoreApiError> {
        self.get_policy(PolicyKind::Privacy).await
    }

    /// Replace the privacy policy.
    ///
    /// # Errors
    ///
    /// See [`update_policy`](Self::update_policy).
    pub async fn update_privacy_policy(&self, html: &str) -> Result<Acknowledgement, StoreApiError> {
        self.update_policy(PolicyKind::Privacy, html).await
    }

    /// Fetch the return policy.
    ///
    /// # Errors
    ///
    /// See [`get_policy`](Self::get_policy).
    pub async fn get_return_policy(&self) -> Result<PolicyDocument, StoreApiError> {
        self.get_policy(PolicyKind::Return).await
    }

    /// Replace the return policy.
    ///
    /// # Errors
    ///
    /// See [`update_policy`](Self::update_policy).
    pub async fn update_return_policy(&self, html: &str) -> Result<Acknowledgement, StoreApiError> {
        self.update_policy(PolicyKind::Return, html).await
    }

    /// Fetch the terms and conditions.
    ///
    /// # Errors
    ///
    /// See [`get_policy`](Self::get_policy).
    pub async fn get_terms_and_conditions(&self) -> Result<PolicyDocument, StoreApiError> {
        self.get_policy(PolicyKind::Terms).await
    }

    /// Replace the terms and conditions.
    ///
    /// # Errors
    ///
    /// See [`update_policy`](Self::update_policy).
    pub async fn update_terms_and_conditions(
        &self,
        html: &str,
    ) -> Result<Acknowledgement, StoreApiError> {
        self.update_policy(PolicyKind::Terms, html).await
    }
}

/// `data.<field>`, then `data.content`, then `<field>` at the root.
fn map_policy(reply: &Value, kind: PolicyKind) -> PolicyDocument {
    let field = kind.field();
    PolicyDocument {
        content: envelope::string_at(
            reply,
            &[&["data", field], &["data", "content"], &[field]],
        ),
    }
}
