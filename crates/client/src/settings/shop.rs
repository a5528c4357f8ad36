//! Shop summary, company info and business registration.

use serde_json::Value;
use storedesk_core::{
    Acknowledgement, BusinessDetails, BusinessRegistrationUpdate, CompanyDetails, CompanyInfo,
    CompanyInfoUpdate, ShopDetails, ShopId,
};
use tracing::{debug, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints;
use crate::envelope::{self, Path};
use crate::error::StoreApiError;

impl RemoteStoreClient {
    /// Fetch the signed-in shop's summary (first element of `data`).
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to fetch shop details").
    #[instrument(skip(self))]
    pub async fn get_shop_details(&self) -> Result<ShopDetails, StoreApiError> {
        let reply = self.send_empty(&endpoints::SHOP_DETAILS, None).await?;
        Ok(map_shop_details(&reply))
    }

    /// Fetch company info and business registration details.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to fetch company details").
    #[instrument(skip(self))]
    pub async fn get_company_details(&self) -> Result<CompanyDetails, StoreApiError> {
        let reply = self.send_empty(&endpoints::COMPANY_DETAILS, None).await?;
        Ok(map_company_details(&reply))
    }

    /// Update company info, uploading a new logo and/or favicon if given.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to update company info").
    #[instrument(skip(self, update), fields(files = update.files().len()))]
    pub async fn update_company_info(
        &self,
        update: &CompanyInfoUpdate,
    ) -> Result<Acknowledgement, StoreApiError> {
        let reply = self
            .send_multipart(
                &endpoints::UPDATE_COMPANY_INFO,
                update.form_fields(),
                update.files(),
            )
            .await?;
        debug!("Company info updated");
        Ok(envelope::acknowledgement(&reply))
    }

    /// Update business registration details, uploading the certificate if
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to update business details").
    #[instrument(skip(self, update), fields(files = update.files().len()))]
    pub async fn update_business_registration(
        &self,
        update: &BusinessRegistrationUpdate,
    ) -> Result<Acknowledgement, StoreApiError> {
        let reply = self
            .send_multipart(
                &endpoints::UPDATE_BUSINESS_DETAILS,
                update.form_fields(),
                update.files(),
            )
            .await?;
        debug!("Business registration updated");
        Ok(envelope::acknowledgement(&reply))
    }
}

/// `data[0]` of the `/show` reply.
pub(crate) fn map_shop_details(reply: &Value) -> ShopDetails {
    let Some(shop) = envelope::lookup(reply, &["data", "0"]) else {
        return ShopDetails::default();
    };

    ShopDetails {
        id: envelope::opt_string_at(shop, &[&["id"]]).map(ShopId::from),
        shop_name: envelope::string_at(shop, &[&["shop_name"], &["name"]]),
        email: envelope::string_at(shop, &[&["email"]]),
        phone: envelope::string_at(shop, &[&["phone"]]),
        domain: envelope::string_at(shop, &[&["domain"]]),
        logo: envelope::opt_string_at(shop, &[&["logo"]]),
        status: envelope::string_at(shop, &[&["status"]]),
    }
}

/// Candidate paths for one company field, most specific first:
/// `data.company_details.X`, then `data.X`, then `X`.
fn company_paths(key: &str) -> [Vec<&str>; 3] {
    [
        vec!["data", "company_details", key],
        vec!["data", key],
        vec![key],
    ]
}

fn company_string(reply: &Value, key: &str) -> String {
    company_opt_string(reply, key).unwrap_or_default()
}

fn company_opt_string(reply: &Value, key: &str) -> Option<String> {
    let paths = company_paths(key);
    let refs: Vec<Path<'_>> = paths.iter().map(Vec::as_slice).collect();
    envelope::opt_string_at(reply, &refs)
}

/// `/details` reply. Every field falls back independently.
pub(crate) fn map_company_details(reply: &Value) -> CompanyDetails {
    CompanyDetails {
        company_info: CompanyInfo {
            site_title: company_string(reply, "site_title"),
            site_email: company_string(reply, "site_email"),
            site_phone: company_string(reply, "site_phone"),
            site_address: company_string(reply, "site_address"),
            site_description: company_string(reply, "site_description"),
            currency: company_string(reply, "currency"),
            logo: company_opt_string(reply, "logo"),
            favicon: company_opt_string(reply, "favicon"),
        },
        business_details: BusinessDetails {
            business_name: company_string(reply, "business_name"),
            registration_number: company_string(reply, "registration_number"),
            tax_number: company_string(reply, "tax_number"),
            business_type: company_string(reply, "business_type"),
            business_address: company_string(reply, "business_address"),
            registration_document: company_opt_string(reply, "registration_document"),
        },
    }
}
