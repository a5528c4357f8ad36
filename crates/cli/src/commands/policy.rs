//! Policy document commands.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use storedesk_client::RemoteStoreClient;
use storedesk_core::PolicyKind;

use super::{CliError, print_json, read_text};

/// Policy selector on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Privacy,
    Return,
    Terms,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Privacy => Self::Privacy,
            PolicyArg::Return => Self::Return,
            PolicyArg::Terms => Self::Terms,
        }
    }
}

#[derive(Subcommand)]
pub enum PolicyAction {
    /// Print a policy document
    Show { policy: PolicyArg },
    /// Replace a policy document
    Update {
        policy: PolicyArg,

        /// Read the HTML body from a file
        #[arg(long, conflicts_with = "content", required_unless_present = "content")]
        file: Option<PathBuf>,

        /// HTML body given inline
        #[arg(long)]
        content: Option<String>,
    },
}

pub async fn run(client: &RemoteStoreClient, action: PolicyAction) -> Result<(), CliError> {
    match action {
        PolicyAction::Show { policy } => print_json(&client.get_policy(policy.into()).await?),
        PolicyAction::Update {
            policy,
            file,
            content,
        } => {
            let html = match file {
                Some(path) => read_text(&path)?,
                None => content.unwrap_or_default(),
            };
            print_json(&client.update_policy(policy.into(), &html).await?)
        }
    }
}
