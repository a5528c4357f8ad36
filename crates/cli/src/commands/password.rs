//! Forgotten-password flow: request a code, check it, set a new password.

use clap::Subcommand;
use secrecy::SecretString;
use storedesk_client::RemoteStoreClient;
use storedesk_core::validation::{
    validate_new_password, validate_password_reset_request, validate_reset_code,
};
use storedesk_core::{NewPassword, ResetCodeVerification};

use super::{CliError, print_json};

#[derive(Subcommand)]
pub enum PasswordAction {
    /// Email a reset code
    Forgot {
        #[arg(short, long)]
        email: String,
    },
    /// Check a reset code
    Verify {
        #[arg(short, long)]
        email: String,

        /// 6-digit code from the email
        #[arg(short, long)]
        code: String,
    },
    /// Set the new password
    Reset {
        #[arg(short, long)]
        email: String,

        /// New password
        #[arg(long, env = "STOREDESK_NEW_PASSWORD", hide_env_values = true)]
        password: String,

        /// New password again; defaults to --password
        #[arg(long)]
        password_confirmation: Option<String>,
    },
}

pub async fn run(client: &RemoteStoreClient, action: PasswordAction) -> Result<(), CliError> {
    let ack = match action {
        PasswordAction::Forgot { email } => {
            validate_password_reset_request(&email)?;
            client.request_password_reset(&email).await?
        }
        PasswordAction::Verify { email, code } => {
            let input = ResetCodeVerification { email, code };
            validate_reset_code(&input)?;
            client.verify_reset_code(&input).await?
        }
        PasswordAction::Reset {
            email,
            password,
            password_confirmation,
        } => {
            let password_confirmation = password_confirmation.unwrap_or_else(|| password.clone());
            let input = NewPassword {
                email,
                password: SecretString::from(password),
                password_confirmation: SecretString::from(password_confirmation),
            };
            validate_new_password(&input)?;
            client.confirm_new_password(&input).await?
        }
    };
    print_json(&ack)
}
