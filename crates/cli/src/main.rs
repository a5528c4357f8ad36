//! StoreDesk CLI - Manage a shop's settings against the store backend.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (the token is saved for later commands)
//! storedesk auth login -e owner@shop.example
//!
//! # Show company details
//! storedesk company show
//!
//! # Replace the return policy from a file
//! storedesk policy update return --file return-policy.html
//!
//! # Add an FAQ entry
//! storedesk faq add -q "Do you ship abroad?" -a "Yes, worldwide."
//! ```
//!
//! # Environment Variables
//!
//! - `STOREDESK_API_URL` - Backend base URL (required)
//! - `STOREDESK_TOKEN_FILE` - Token file (optional)
//! - `STOREDESK_PASSWORD` - Password for `auth login` (optional)
//! - `STOREDESK_LOG_JSON` - Emit JSON logs to stderr when set
//! - `RUST_LOG` - Log filter (default: `storedesk=info,storedesk_client=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "storedesk")]
#[command(author, version, about = "Manage a StoreDesk shop from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up, sign in and out
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Reset a forgotten password
    Password {
        #[command(subcommand)]
        action: commands::password::PasswordAction,
    },
    /// Shop summary
    Shop {
        #[command(subcommand)]
        action: commands::shop::ShopAction,
    },
    /// Company info and business registration
    Company {
        #[command(subcommand)]
        action: commands::shop::CompanyAction,
    },
    /// Custom domain
    Domain {
        #[command(subcommand)]
        action: commands::domain::DomainAction,
    },
    /// Privacy, return and terms documents
    Policy {
        #[command(subcommand)]
        action: commands::policy::PolicyAction,
    },
    /// Social media links
    Social {
        #[command(subcommand)]
        action: commands::social::SocialAction,
    },
    /// Storefront FAQ
    Faq {
        #[command(subcommand)]
        action: commands::faq::FaqAction,
    },
    /// Account security settings
    Security {
        #[command(subcommand)]
        action: commands::security::SecurityAction,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before reading any logging variables
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match &e {
            CliError::Invalid(errors) => {
                for error in errors.iter() {
                    tracing::error!(field = error.field, "{}", error.message);
                }
            }
            other => tracing::error!("Command failed: {other}"),
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storedesk=info,storedesk_client=info".into());

    let json = std::env::var_os("STOREDESK_LOG_JSON").is_some();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = commands::connect()?;

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&client, action).await,
        Commands::Password { action } => commands::password::run(&client, action).await,
        Commands::Shop { action } => commands::shop::run_shop(&client, action).await,
        Commands::Company { action } => commands::shop::run_company(&client, action).await,
        Commands::Domain { action } => commands::domain::run(&client, action).await,
        Commands::Policy { action } => commands::policy::run(&client, action).await,
        Commands::Social { action } => commands::social::run(&client, action).await,
        Commands::Faq { action } => commands::faq::run(&client, action).await,
        Commands::Security { action } => commands::security::run(&client, action).await,
    }
}
