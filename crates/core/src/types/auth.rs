//! Account and session types.
//!
//! Passwords and tokens are held as [`SecretString`] and are only exposed by
//! the client at the moment a request body is serialised.

use secrecy::SecretString;
use serde::Serialize;

/// Email/password pair submitted to the login endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: SecretString,
}

/// New shop-owner account.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Owner's full name.
    pub name: String,
    /// Owner's email, also the login.
    pub email: String,
    /// Shop display name.
    pub shop_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Chosen password.
    pub password: SecretString,
    /// Must repeat `password`.
    pub password_confirmation: SecretString,
}

/// Verification of the code emailed by the forgot-password flow.
#[derive(Debug, Clone)]
pub struct ResetCodeVerification {
    /// Account email.
    pub email: String,
    /// Six-digit code from the reset email.
    pub code: String,
}

/// Final step of the forgot-password flow.
#[derive(Debug, Clone)]
pub struct NewPassword {
    /// Account email.
    pub email: String,
    /// Replacement password.
    pub password: SecretString,
    /// Must repeat `password`.
    pub password_confirmation: SecretString,
}

/// Second-factor code submitted after a login that required one.
#[derive(Debug, Clone)]
pub struct OtpVerification {
    /// Account email.
    pub email: String,
    /// Six-digit one-time password.
    pub otp: String,
}

/// Public profile of the signed-in account, when the backend includes one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend user ID.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// An authenticated session. The token has already been persisted when a
/// client operation hands one of these back.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token for subsequent requests.
    pub access_token: SecretString,
    /// Token type reported by the backend (normally `Bearer`).
    pub token_type: String,
    /// Account profile, if returned.
    pub user: Option<UserProfile>,
}

/// Result of a sign-up.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// Backend message, e.g. "Shop created successfully".
    pub message: String,
    /// Present when the backend signed the new owner in straight away.
    pub session: Option<Session>,
}

/// Result of a login attempt.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials accepted and a token was issued.
    Authenticated(Session),
    /// Credentials accepted but a one-time password must be verified first.
    OtpRequired {
        /// Email the OTP was sent for.
        email: String,
        /// Backend message, e.g. "OTP sent to your email".
        message: String,
    },
}

impl LoginOutcome {
    /// The session, if the login completed without a second factor.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::OtpRequired { .. } => None,
        }
    }
}
