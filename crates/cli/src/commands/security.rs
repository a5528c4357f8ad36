//! Account security commands.
//!
//! # Usage
//!
//! ```bash
//! storedesk security show
//! storedesk security update --two-factor true --session-timeout 60
//! ```

use clap::{ArgAction, Subcommand};
use storedesk_client::RemoteStoreClient;
use storedesk_core::validation::validate_security_settings;

use super::{CliError, print_json};

#[derive(Subcommand)]
pub enum SecurityAction {
    /// Show the current settings
    Show,
    /// Change settings; unspecified options keep their current value
    Update {
        /// Require an emailed code at login
        #[arg(long, action = ArgAction::Set)]
        two_factor: Option<bool>,

        /// Email on every new login
        #[arg(long, action = ArgAction::Set)]
        login_alerts: Option<bool>,

        /// Idle timeout in minutes (5-1440)
        #[arg(long)]
        session_timeout: Option<u32>,
    },
}

pub async fn run(client: &RemoteStoreClient, action: SecurityAction) -> Result<(), CliError> {
    match action {
        SecurityAction::Show => print_json(&client.get_security_settings().await?),
        SecurityAction::Update {
            two_factor,
            login_alerts,
            session_timeout,
        } => {
            // The backend replaces the whole set, so start from what is saved
            let mut settings = client.get_security_settings().await?;
            if let Some(enabled) = two_factor {
                settings.two_factor_enabled = enabled;
            }
            if let Some(enabled) = login_alerts {
                settings.login_alerts = enabled;
            }
            if session_timeout.is_some() {
                settings.session_timeout = session_timeout;
            }

            validate_security_settings(&settings)?;
            print_json(&client.update_security_settings(&settings).await?)
        }
    }
}
