//! Account operations: sign-up, login, password reset and two-factor.
//!
//! None of these attach a bearer token. Operations whose reply carries an
//! `access_token` persist it through the client's token store before
//! returning.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use storedesk_core::{
    Acknowledgement, Credentials, LoginOutcome, NewPassword, OtpVerification, Registration,
    RegistrationOutcome, ResetCodeVerification, Session, UserProfile,
};
use tracing::{debug, info, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints;
use crate::envelope::{self, Path};
use crate::error::StoreApiError;

const ACCESS_TOKEN_PATHS: &[Path<'static>] = &[&["access_token"], &["data", "access_token"]];
const TOKEN_TYPE_PATHS: &[Path<'static>] = &[&["token_type"], &["data", "token_type"]];
const OTP_FLAG_PATHS: &[Path<'static>] = &[
    &["two_factor"],
    &["otp_required"],
    &["requires_otp"],
    &["data", "two_factor"],
    &["data", "otp_required"],
    &["data", "requires_otp"],
];

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
    shop_name: &'a str,
    phone: &'a str,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetCodeRequest<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct ConfirmPasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

#[derive(Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

impl RemoteStoreClient {
    /// Create a shop-owner account.
    ///
    /// If the backend signs the new owner in immediately, the returned token
    /// is persisted and included in the outcome.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Registration failed"), or a transport / token-store error.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(
        &self,
        registration: &Registration,
    ) -> Result<RegistrationOutcome, StoreApiError> {
        let body = RegisterRequest {
            name: registration.name.trim(),
            email: registration.email.trim(),
            password: registration.password.expose_secret(),
            password_confirmation: registration.password_confirmation.expose_secret(),
            shop_name: registration.shop_name.trim(),
            phone: registration.phone.trim(),
        };

        let reply = self.send_json(&endpoints::REGISTER, None, &body).await?;
        let session = self.persist_session(&reply).await?;

        info!(signed_in = session.is_some(), "Registration accepted");

        Ok(RegistrationOutcome {
            message: envelope::message(&reply),
            session,
        })
    }

    /// Log in with email and password.
    ///
    /// On success the returned `access_token` is persisted before this
    /// returns. Accounts with two-factor enabled get
    /// [`LoginOutcome::OtpRequired`] instead; finish with
    /// [`verify_otp`](Self::verify_otp).
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Login failed"); `StoreApiError::UnexpectedResponse` if a success reply
    /// has neither a token nor a second-factor flag.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, StoreApiError> {
        let body = LoginRequest {
            email: credentials.email.trim(),
            password: credentials.password.expose_secret(),
        };

        let reply = self.send_json(&endpoints::LOGIN, None, &body).await?;

        if let Some(session) = self.persist_session(&reply).await? {
            info!("Logged in");
            return Ok(LoginOutcome::Authenticated(session));
        }

        if envelope::flag_at(&reply, OTP_FLAG_PATHS) {
            info!("Second factor required");
            return Ok(LoginOutcome::OtpRequired {
                email: body.email.to_string(),
                message: envelope::message(&reply),
            });
        }

        Err(StoreApiError::UnexpectedResponse(
            endpoints::LOGIN.fallback_error.to_string(),
        ))
    }

    /// Complete a two-factor login. The issued token is persisted.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "OTP verification failed"); `StoreApiError::UnexpectedResponse` if the
    /// success reply carries no token.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn verify_otp(&self, input: &OtpVerification) -> Result<Session, StoreApiError> {
        let body = OtpRequest {
            email: input.email.trim(),
            otp: input.otp.trim(),
        };

        let reply = self.send_json(&endpoints::VERIFY_OTP, None, &body).await?;

        self.persist_session(&reply).await?.ok_or_else(|| {
            StoreApiError::UnexpectedResponse(endpoints::VERIFY_OTP.fallback_error.to_string())
        })
    }

    /// Ask the backend to email a password-reset code.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to send reset code").
    #[instrument(skip(self))]
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<Acknowledgement, StoreApiError> {
        let body = EmailRequest {
            email: email.trim(),
        };
        let reply = self
            .send_json(&endpoints::FORGOT_PASSWORD, None, &body)
            .await?;
        Ok(envelope::acknowledgement(&reply))
    }

    /// Check the code from the password-reset email.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Invalid or expired reset code").
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn verify_reset_code(
        &self,
        input: &ResetCodeVerification,
    ) -> Result<Acknowledgement, StoreApiError> {
        let body = ResetCodeRequest {
            email: input.email.trim(),
            code: input.code.trim(),
        };
        let reply = self
            .send_json(&endpoints::RESET_PASSWORD, None, &body)
            .await?;
        Ok(envelope::acknowledgement(&reply))
    }

    /// Set a new password at the end of the reset flow.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to update password").
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn confirm_new_password(
        &self,
        input: &NewPassword,
    ) -> Result<Acknowledgement, StoreApiError> {
        let body = ConfirmPasswordRequest {
            email: input.email.trim(),
            password: input.password.expose_secret(),
            password_confirmation: input.password_confirmation.expose_secret(),
        };
        let reply = self
            .send_json(&endpoints::CONFIRM_PASSWORD, None, &body)
            .await?;
        Ok(envelope::acknowledgement(&reply))
    }

    /// Forget the persisted token. Local only; the backend is not contacted.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::TokenStore` if the token cannot be removed.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), StoreApiError> {
        self.forget_token().await?;
        info!("Logged out");
        Ok(())
    }

    /// Whether a token is persisted. Does not check it with the backend.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::TokenStore` if the store cannot be read.
    pub async fn is_authenticated(&self) -> Result<bool, StoreApiError> {
        self.has_token().await
    }

    /// Persist the reply's token, if any, and build the session around it.
    async fn persist_session(&self, reply: &Value) -> Result<Option<Session>, StoreApiError> {
        let Some(session) = map_session(reply) else {
            return Ok(None);
        };
        self.store_token(&session.access_token).await?;
        debug!("Access token persisted");
        Ok(Some(session))
    }
}

/// Build a session from a reply carrying `access_token`.
fn map_session(reply: &Value) -> Option<Session> {
    let token = envelope::opt_string_at(reply, ACCESS_TOKEN_PATHS)?;
    let token_type = envelope::opt_string_at(reply, TOKEN_TYPE_PATHS)
        .unwrap_or_else(|| "Bearer".to_string());

    Some(Session {
        access_token: SecretString::from(token),
        token_type,
        user: map_user(reply),
    })
}

/// `user` object from the reply root or `data`.
fn map_user(reply: &Value) -> Option<UserProfile> {
    let user = envelope::first_truthy(reply, &[&["user"], &["data", "user"]])?;
    if !user.is_object() {
        return None;
    }
    Some(UserProfile {
        id: envelope::opt_string_at(user, &[&["id"]]),
        name: envelope::string_at(user, &[&["name"]]),
        email: envelope::string_at(user, &[&["email"]]),
    })
}
