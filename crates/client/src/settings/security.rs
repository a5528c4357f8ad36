//! Account security settings.

use serde::Serialize;
use serde_json::Value;
use storedesk_core::{Acknowledgement, SecuritySettings};
use tracing::{debug, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints;
use crate::envelope;
use crate::error::StoreApiError;

#[derive(Serialize)]
struct SecuritySettingsRequest {
    two_factor_enabled: bool,
    login_alerts: bool,
    session_timeout: Option<u32>,
}

impl From<&SecuritySettings> for SecuritySettingsRequest {
    fn from(settings: &SecuritySettings) -> Self {
        Self {
            two_factor_enabled: settings.two_factor_enabled,
            login_alerts: settings.login_alerts,
            session_timeout: settings.session_timeout,
        }
    }
}

impl RemoteStoreClient {
    /// Fetch the account's security settings.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to fetch security settings").
    #[instrument(skip(self))]
    pub async fn get_security_settings(&self) -> Result<SecuritySettings, StoreApiError> {
        let reply = self.send_empty(&endpoints::SECURITY_SETTINGS, None).await?;
        Ok(map_security_settings(&reply))
    }

    /// Submit the full set of security settings.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to update security settings").
    #[instrument(skip(self))]
    pub async fn update_security_settings(
        &self,
        settings: &SecuritySettings,
    ) -> Result<Acknowledgement, StoreApiError> {
        let reply = self
            .send_json(
                &endpoints::UPDATE_SECURITY_SETTINGS,
                None,
                &SecuritySettingsRequest::from(settings),
            )
            .await?;
        debug!("Security settings updated");
        Ok(envelope::acknowledgement(&reply))
    }
}

fn map_security_settings(reply: &Value) -> SecuritySettings {
    SecuritySettings {
        two_factor_enabled: envelope::flag_at(
            reply,
            &[&["data", "two_factor_enabled"], &["two_factor_enabled"]],
        ),
        login_alerts: envelope::flag_at(reply, &[&["data", "login_alerts"], &["login_alerts"]]),
        session_timeout: envelope::u32_at(
            reply,
            &[&["data", "session_timeout"], &["session_timeout"]],
        ),
    }
}
