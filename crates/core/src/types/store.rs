//! Shop, company and domain settings.
//!
//! Result types serialise with camelCase keys, matching the local naming the
//! rest of the app expects. Update payloads expose their backend (snake_case)
//! multipart fields through `form_fields`.

use serde::Serialize;

use super::{FileUpload, ShopId};

/// Summary of the signed-in shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDetails {
    /// Backend shop ID.
    pub id: Option<ShopId>,
    /// Display name.
    pub shop_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Primary domain.
    pub domain: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Account status, e.g. `active`.
    pub status: String,
}

/// Public-facing company information shown on the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub site_title: String,
    pub site_email: String,
    pub site_phone: String,
    pub site_address: String,
    pub site_description: String,
    pub currency: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Favicon URL.
    pub favicon: Option<String>,
}

/// Legal registration details of the business behind the shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub business_name: String,
    pub registration_number: String,
    pub tax_number: String,
    pub business_type: String,
    pub business_address: String,
    /// URL of the uploaded registration certificate.
    pub registration_document: Option<String>,
}

/// Everything returned by the company details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    pub company_info: CompanyInfo,
    pub business_details: BusinessDetails,
}

/// Changes to [`CompanyInfo`]. `None` fields are submitted as empty strings.
#[derive(Debug, Clone, Default)]
pub struct CompanyInfoUpdate {
    pub site_title: String,
    pub site_email: Option<String>,
    pub site_phone: Option<String>,
    pub site_address: Option<String>,
    pub site_description: Option<String>,
    pub currency: Option<String>,
    /// Replacement logo.
    pub logo: Option<FileUpload>,
    /// Replacement favicon.
    pub favicon: Option<FileUpload>,
}

impl CompanyInfoUpdate {
    /// Text parts of the multipart body, in submission order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("site_title", self.site_title.clone()),
            ("site_email", or_empty(self.site_email.as_ref())),
            ("site_phone", or_empty(self.site_phone.as_ref())),
            ("site_address", or_empty(self.site_address.as_ref())),
            ("site_description", or_empty(self.site_description.as_ref())),
            ("currency", or_empty(self.currency.as_ref())),
        ]
    }

    /// File parts of the multipart body.
    #[must_use]
    pub fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        [("logo", self.logo.as_ref()), ("favicon", self.favicon.as_ref())]
            .into_iter()
            .filter_map(|(name, file)| file.map(|f| (name, f)))
            .collect()
    }
}

/// Changes to [`BusinessDetails`]. `None` fields are submitted as empty strings.
#[derive(Debug, Clone, Default)]
pub struct BusinessRegistrationUpdate {
    pub business_name: String,
    pub registration_number: String,
    pub tax_number: Option<String>,
    pub business_type: Option<String>,
    pub business_address: Option<String>,
    /// Scan of the registration certificate.
    pub registration_document: Option<FileUpload>,
}

impl BusinessRegistrationUpdate {
    /// Text parts of the multipart body, in submission order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("business_name", self.business_name.clone()),
            ("registration_number", self.registration_number.clone()),
            ("tax_number", or_empty(self.tax_number.as_ref())),
            ("business_type", or_empty(self.business_type.as_ref())),
            ("business_address", or_empty(self.business_address.as_ref())),
        ]
    }

    /// File parts of the multipart body.
    #[must_use]
    pub fn files(&self) -> Vec<(&'static str, &FileUpload)> {
        self.registration_document
            .as_ref()
            .map(|f| vec![("registration_document", f)])
            .unwrap_or_default()
    }
}

/// Custom domain configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetails {
    /// Configured domain; empty when none is set.
    pub domain: String,
    /// DNS ownership verified.
    pub is_verified: bool,
    /// Certificate provisioning state, if reported.
    pub ssl_status: Option<String>,
}

fn or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}
