//! Shop summary, company info and business registration commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use storedesk_client::RemoteStoreClient;
use storedesk_core::validation::{validate_business_registration, validate_company_info};
use storedesk_core::{BusinessRegistrationUpdate, CompanyInfoUpdate};

use super::{CliError, print_json, read_upload};

#[derive(Subcommand)]
pub enum ShopAction {
    /// Show the shop summary
    Show,
}

#[derive(Subcommand)]
pub enum CompanyAction {
    /// Show company info and business registration
    Show,
    /// Update public company info
    Update(CompanyInfoArgs),
    /// Update business registration details
    Business(BusinessArgs),
}

#[derive(Args)]
pub struct CompanyInfoArgs {
    #[arg(long)]
    site_title: String,
    #[arg(long)]
    site_email: Option<String>,
    #[arg(long)]
    site_phone: Option<String>,
    #[arg(long)]
    site_address: Option<String>,
    #[arg(long)]
    site_description: Option<String>,
    /// Currency code, e.g. USD
    #[arg(long)]
    currency: Option<String>,
    /// Image file to upload as the logo
    #[arg(long)]
    logo: Option<PathBuf>,
    /// Image file to upload as the favicon
    #[arg(long)]
    favicon: Option<PathBuf>,
}

#[derive(Args)]
pub struct BusinessArgs {
    #[arg(long)]
    business_name: String,
    #[arg(long)]
    registration_number: String,
    #[arg(long)]
    tax_number: Option<String>,
    #[arg(long)]
    business_type: Option<String>,
    #[arg(long)]
    business_address: Option<String>,
    /// Scan of the registration certificate
    #[arg(long)]
    registration_document: Option<PathBuf>,
}

impl CompanyInfoArgs {
    fn into_update(self) -> Result<CompanyInfoUpdate, CliError> {
        Ok(CompanyInfoUpdate {
            site_title: self.site_title,
            site_email: self.site_email,
            site_phone: self.site_phone,
            site_address: self.site_address,
            site_description: self.site_description,
            currency: self.currency,
            logo: self.logo.as_deref().map(read_upload).transpose()?,
            favicon: self.favicon.as_deref().map(read_upload).transpose()?,
        })
    }
}

impl BusinessArgs {
    fn into_update(self) -> Result<BusinessRegistrationUpdate, CliError> {
        Ok(BusinessRegistrationUpdate {
            business_name: self.business_name,
            registration_number: self.registration_number,
            tax_number: self.tax_number,
            business_type: self.business_type,
            business_address: self.business_address,
            registration_document: self
                .registration_document
                .as_deref()
                .map(read_upload)
                .transpose()?,
        })
    }
}

pub async fn run_shop(client: &RemoteStoreClient, action: ShopAction) -> Result<(), CliError> {
    match action {
        ShopAction::Show => print_json(&client.get_shop_details().await?),
    }
}

pub async fn run_company(client: &RemoteStoreClient, action: CompanyAction) -> Result<(), CliError> {
    match action {
        CompanyAction::Show => print_json(&client.get_company_details().await?),
        CompanyAction::Update(args) => {
            let update = args.into_update()?;
            validate_company_info(&update)?;
            print_json(&client.update_company_info(&update).await?)
        }
        CompanyAction::Business(args) => {
            let update = args.into_update()?;
            validate_business_registration(&update)?;
            print_json(&client.update_business_registration(&update).await?)
        }
    }
}
