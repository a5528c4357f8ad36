//! Account security settings.

use serde::Serialize;

/// Security options for the shop owner's account. Also used as the update
/// payload: the whole set is submitted on every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Require an emailed one-time password at login.
    pub two_factor_enabled: bool,
    /// Email the owner on every new login.
    pub login_alerts: bool,
    /// Idle session timeout in minutes; `None` uses the backend default.
    pub session_timeout: Option<u32>,
}
