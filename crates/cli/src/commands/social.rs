//! Social link commands.

use clap::{Args, Subcommand};
use storedesk_client::RemoteStoreClient;
use storedesk_core::SocialLinks;
use storedesk_core::validation::validate_social_links;

use super::{CliError, print_json};

#[derive(Subcommand)]
pub enum SocialAction {
    /// Show the saved links
    Show,
    /// Replace all links; omitted ones are cleared
    Update(SocialArgs),
}

#[derive(Args)]
pub struct SocialArgs {
    #[arg(long, default_value = "")]
    facebook: String,
    #[arg(long, default_value = "")]
    instagram: String,
    #[arg(long, default_value = "")]
    twitter: String,
    #[arg(long, default_value = "")]
    youtube: String,
    #[arg(long, default_value = "")]
    linkedin: String,
    #[arg(long, default_value = "")]
    pinterest: String,
}

impl From<SocialArgs> for SocialLinks {
    fn from(args: SocialArgs) -> Self {
        Self {
            facebook: args.facebook,
            instagram: args.instagram,
            twitter: args.twitter,
            youtube: args.youtube,
            linkedin: args.linkedin,
            pinterest: args.pinterest,
        }
    }
}

pub async fn run(client: &RemoteStoreClient, action: SocialAction) -> Result<(), CliError> {
    match action {
        SocialAction::Show => print_json(&client.get_social_links().await?),
        SocialAction::Update(args) => {
            let links = SocialLinks::from(args);
            validate_social_links(&links)?;
            print_json(&client.update_social_links(&links).await?)
        }
    }
}
