//! FAQ commands.
//!
//! # Usage
//!
//! ```bash
//! storedesk faq list
//! storedesk faq add -q "Do you ship abroad?" -a "Yes, worldwide."
//! storedesk faq update 12 -q "Do you ship abroad?" -a "EU only." --inactive
//! storedesk faq delete 12
//! ```

use clap::{Args, Subcommand};
use storedesk_client::RemoteStoreClient;
use storedesk_core::validation::validate_faq;
use storedesk_core::{FaqId, FaqInput};

use super::{CliError, print_json};

#[derive(Subcommand)]
pub enum FaqAction {
    /// List every entry
    List,
    /// Add an entry
    Add(FaqArgs),
    /// Replace an entry
    Update {
        /// FAQ id
        id: String,

        #[command(flatten)]
        faq: FaqArgs,
    },
    /// Delete an entry
    Delete {
        /// FAQ id
        id: String,
    },
}

#[derive(Args)]
pub struct FaqArgs {
    #[arg(short, long)]
    question: String,

    #[arg(short, long)]
    answer: String,

    /// Hide the entry from the storefront
    #[arg(long)]
    inactive: bool,
}

impl From<FaqArgs> for FaqInput {
    fn from(args: FaqArgs) -> Self {
        Self {
            question: args.question,
            answer: args.answer,
            is_active: !args.inactive,
        }
    }
}

pub async fn run(client: &RemoteStoreClient, action: FaqAction) -> Result<(), CliError> {
    match action {
        FaqAction::List => print_json(&client.get_faqs().await?),
        FaqAction::Add(args) => {
            let input = FaqInput::from(args);
            validate_faq(&input)?;
            print_json(&client.add_faq(&input).await?)
        }
        FaqAction::Update { id, faq } => {
            let input = FaqInput::from(faq);
            validate_faq(&input)?;
            print_json(&client.update_faq(&FaqId::new(id), &input).await?)
        }
        FaqAction::Delete { id } => print_json(&client.delete_faq(&FaqId::new(id)).await?),
    }
}
