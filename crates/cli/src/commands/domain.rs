//! Custom domain commands.
//!
//! # Usage
//!
//! ```bash
//! storedesk domain show
//! storedesk domain set shop.example.com
//! ```

use clap::Subcommand;
use storedesk_client::RemoteStoreClient;

use super::{CliError, print_json};

#[derive(Subcommand)]
pub enum DomainAction {
    /// Show the custom domain and its verification state
    Show,
    /// Point the shop at a new domain
    Set {
        /// Domain name, e.g. shop.example.com
        domain: String,
    },
}

pub async fn run(client: &RemoteStoreClient, action: DomainAction) -> Result<(), CliError> {
    match action {
        DomainAction::Show => print_json(&client.get_domain_details().await?),
        DomainAction::Set { domain } => print_json(&client.update_domain(&domain).await?),
    }
}
