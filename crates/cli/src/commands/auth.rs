//! Account commands.
//!
//! # Usage
//!
//! ```bash
//! storedesk auth register -n "Ada Lovelace" -e ada@shop.example -s "Harbor" -p +15551234567
//! storedesk auth login -e ada@shop.example
//! storedesk auth verify-otp -e ada@shop.example -o 123456
//! storedesk auth status
//! storedesk auth logout
//! ```

use clap::Subcommand;
use secrecy::SecretString;
use serde_json::json;
use storedesk_client::RemoteStoreClient;
use storedesk_core::validation::{validate_login, validate_otp, validate_registration};
use storedesk_core::{Credentials, LoginOutcome, OtpVerification, Registration, Session};

use super::{CliError, print_json};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create a shop-owner account
    Register {
        /// Owner's full name
        #[arg(short, long)]
        name: String,

        /// Owner's email address
        #[arg(short, long)]
        email: String,

        /// Shop display name
        #[arg(short, long)]
        shop_name: String,

        /// Contact phone, 10-15 digits with optional leading +
        #[arg(short, long)]
        phone: String,

        /// Account password
        #[arg(long, env = "STOREDESK_PASSWORD", hide_env_values = true)]
        password: String,

        /// Password again; defaults to --password
        #[arg(long)]
        password_confirmation: Option<String>,
    },
    /// Sign in and save the access token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(long, env = "STOREDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Finish a two-factor sign-in
    VerifyOtp {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// 6-digit code from the email
        #[arg(short, long)]
        otp: String,
    },
    /// Forget the saved access token
    Logout,
    /// Report whether an access token is saved
    Status,
}

pub async fn run(client: &RemoteStoreClient, action: AuthAction) -> Result<(), CliError> {
    match action {
        AuthAction::Register {
            name,
            email,
            shop_name,
            phone,
            password,
            password_confirmation,
        } => {
            let password_confirmation = password_confirmation.unwrap_or_else(|| password.clone());
            let registration = Registration {
                name,
                email,
                shop_name,
                phone,
                password: SecretString::from(password),
                password_confirmation: SecretString::from(password_confirmation),
            };
            validate_registration(&registration)?;

            let outcome = client.register(&registration).await?;
            print_json(&json!({
                "message": outcome.message,
                "authenticated": outcome.session.is_some(),
                "user": outcome.session.as_ref().and_then(|s| s.user.as_ref()),
            }))
        }
        AuthAction::Login { email, password } => {
            let credentials = Credentials {
                email,
                password: SecretString::from(password),
            };
            validate_login(&credentials)?;

            match client.login(&credentials).await? {
                LoginOutcome::Authenticated(session) => print_session(&session),
                LoginOutcome::OtpRequired { email, message } => {
                    tracing::info!("Run `storedesk auth verify-otp -e {email} -o <code>` to finish");
                    print_json(&json!({
                        "authenticated": false,
                        "otpRequired": true,
                        "email": email,
                        "message": message,
                    }))
                }
            }
        }
        AuthAction::VerifyOtp { email, otp } => {
            let input = OtpVerification { email, otp };
            validate_otp(&input)?;

            let session = client.verify_otp(&input).await?;
            print_session(&session)
        }
        AuthAction::Logout => {
            client.logout().await?;
            print_json(&json!({ "authenticated": false }))
        }
        AuthAction::Status => {
            let authenticated = client.is_authenticated().await?;
            print_json(&json!({ "authenticated": authenticated }))
        }
    }
}

/// The token itself is never printed.
fn print_session(session: &Session) -> Result<(), CliError> {
    print_json(&json!({
        "authenticated": true,
        "tokenType": session.token_type,
        "user": session.user,
    }))
}
