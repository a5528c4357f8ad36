//! Social media links.

use serde::Serialize;
use serde_json::Value;
use storedesk_core::{Acknowledgement, SocialLinks};
use tracing::{debug, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints;
use crate::envelope;
use crate::error::StoreApiError;

/// Backend (`*_url`) shape of [`SocialLinks`].
#[derive(Serialize)]
struct SocialLinksRequest<'a> {
    facebook_url: &'a str,
    instagram_url: &'a str,
    twitter_url: &'a str,
    youtube_url: &'a str,
    linkedin_url: &'a str,
    pinterest_url: &'a str,
}

impl<'a> From<&'a SocialLinks> for SocialLinksRequest<'a> {
    fn from(links: &'a SocialLinks) -> Self {
        Self {
            facebook_url: links.facebook.trim(),
            instagram_url: links.instagram.trim(),
            twitter_url: links.twitter.trim(),
            youtube_url: links.youtube.trim(),
            linkedin_url: links.linkedin.trim(),
            pinterest_url: links.pinterest.trim(),
        }
    }
}

impl RemoteStoreClient {
    /// Fetch the shop's social media links.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to fetch social links").
    #[instrument(skip(self))]
    pub async fn get_social_links(&self) -> Result<SocialLinks, StoreApiError> {
        let reply = self.send_empty(&endpoints::SOCIAL_LINKS, None).await?;
        Ok(map_social_links(&reply))
    }

    /// Replace all social media links. Empty strings clear a link.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to update social links").
    #[instrument(skip(self, links))]
    pub async fn update_social_links(
        &self,
        links: &SocialLinks,
    ) -> Result<Acknowledgement, StoreApiError> {
        let body = SocialLinksRequest::from(links);
        let reply = self
            .send_json(&endpoints::UPDATE_SOCIAL_LINKS, None, &body)
            .await?;
        debug!("Social links updated");
        Ok(envelope::acknowledgement(&reply))
    }
}

/// `data[0]` when `data` is a list, else `data` itself.
fn map_social_links(reply: &Value) -> SocialLinks {
    let links = match envelope::lookup(reply, &["data"]) {
        Some(Value::Array(items)) => items.first(),
        other => other,
    };
    let Some(links) = links else {
        return SocialLinks::default();
    };

    let link = |key: &str| envelope::string_at(links, &[&[key]]);

    SocialLinks {
        facebook: link("facebook_url"),
        instagram: link("instagram_url"),
        twitter: link("twitter_url"),
        youtube: link("youtube_url"),
        linkedin: link("linkedin_url"),
        pinterest: link("pinterest_url"),
    }
}
