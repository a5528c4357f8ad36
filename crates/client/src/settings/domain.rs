//! Custom domain.

use serde_json::Value;
use storedesk_core::{Acknowledgement, DomainDetails, DomainName};
use tracing::{debug, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints;
use crate::envelope;
use crate::error::StoreApiError;

impl RemoteStoreClient {
    /// Fetch the configured custom domain.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to fetch domain details").
    #[instrument(skip(self))]
    pub async fn get_domain_details(&self) -> Result<DomainDetails, StoreApiError> {
        let reply = self.send_empty(&endpoints::DOMAIN_DETAILS, None).await?;
        Ok(map_domain_details(&reply))
    }

    /// Point the shop at a new custom domain.
    ///
    /// The value is checked locally first; an invalid domain never reaches
    /// the backend.
    ///
    /// # Errors
    ///
    /// - `StoreApiError::Validation("Please enter a valid domain name")`
    /// - `StoreApiError::Api` with the backend message (or
    ///   "Failed to update domain")
    #[instrument(skip(self))]
    pub async fn update_domain(&self, domain: &str) -> Result<Acknowledgement, StoreApiError> {
        let domain = DomainName::parse(domain)?;

        let reply = self
            .send_multipart(
                &endpoints::UPDATE_DOMAIN,
                vec![("domain", domain.as_str().to_string())],
                Vec::new(),
            )
            .await?;

        debug!(domain = %domain, "Domain updated");
        Ok(envelope::acknowledgement(&reply))
    }
}

fn map_domain_details(reply: &Value) -> DomainDetails {
    DomainDetails {
        domain: envelope::string_at(reply, &[&["data", "domain"], &["domain"]]),
        is_verified: envelope::flag_at(reply, &[&["data", "is_verified"], &["is_verified"]]),
        ssl_status: envelope::opt_string_at(reply, &[&["data", "ssl_status"], &["ssl_status"]]),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_domain_details_from_data() {
        let reply = json!({
            "status": true,
            "data": {"domain": "shop.example.com", "is_verified": 1, "ssl_status": "active"}
        });
        assert_eq!(
            map_domain_details(&reply),
            DomainDetails {
                domain: "shop.example.com".to_string(),
                is_verified: true,
                ssl_status: Some("active".to_string()),
            }
        );
    }

    #[test]
    fn test_domain_details_root_and_string_flag() {
        let reply = json!({"domain": "shop.example.com", "is_verified": "true"});
        let details = map_domain_details(&reply);
        assert_eq!(details.domain, "shop.example.com");
        assert!(details.is_verified);
        assert_eq!(details.ssl_status, None);
    }

    #[test]
    fn test_domain_details_unset() {
        let details = map_domain_details(&json!({"data": {"domain": null, "is_verified": "0"}}));
        assert_eq!(details, DomainDetails::default());
    }
}
