//! Form validation run before a request is submitted.
//!
//! Every check is pure: it looks only at the payload and reports one message
//! per failing field, in field order. The client layer does not repeat these
//! checks, so callers are expected to run the matching `validate_*` function
//! before calling it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use crate::types::{
    BusinessRegistrationUpdate, CompanyInfoUpdate, Credentials, Email, FaqInput, NewPassword,
    OtpVerification, Registration, ResetCodeVerification, SecuritySettings, SocialLinks,
};

/// Symbols accepted (and one required) in a password.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";
const MIN_PASSWORD_LENGTH: usize = 8;

static PASSWORD_ALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("Invalid regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("Invalid regex"));
static SIX_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid regex"));

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to.
    pub field: &'static str,
    /// User-facing message.
    pub message: String,
}

/// All failed checks for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// No check failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failures in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// The first message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing failed, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one check failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Account forms
// =============================================================================

/// Login form: email well-formed, password present.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_login(credentials: &Credentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, "email", &credentials.email);
    if credentials.password.expose_secret().is_empty() {
        errors.push("password", "Password is required");
    }
    errors.into_result()
}

/// Sign-up form.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_registration(registration: &Registration) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_length(&mut errors, "name", "Name", &registration.name, 2, 50);
    check_email(&mut errors, "email", &registration.email);
    check_length(
        &mut errors,
        "shop_name",
        "Shop name",
        &registration.shop_name,
        2,
        100,
    );
    check_phone(&mut errors, "phone", &registration.phone, true);
    check_password_pair(
        &mut errors,
        &registration.password,
        &registration.password_confirmation,
    );
    errors.into_result()
}

/// Forgot-password form.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_password_reset_request(email: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, "email", email);
    errors.into_result()
}

/// Reset-code form: email plus a six-digit code.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_reset_code(input: &ResetCodeVerification) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, "email", &input.email);
    if !SIX_DIGITS_RE.is_match(input.code.trim()) {
        errors.push("code", "Code must be 6 digits");
    }
    errors.into_result()
}

/// Two-factor form: email plus a six-digit OTP.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_otp(input: &OtpVerification) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, "email", &input.email);
    if !SIX_DIGITS_RE.is_match(input.otp.trim()) {
        errors.push("otp", "OTP must be 6 digits");
    }
    errors.into_result()
}

/// New-password form.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_new_password(input: &NewPassword) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, "email", &input.email);
    check_password_pair(&mut errors, &input.password, &input.password_confirmation);
    errors.into_result()
}

/// Password strength rule shared by sign-up and reset.
///
/// At least eight characters drawn from letters, digits and `@$!%*?&`, with
/// at least one of each: lowercase, uppercase, digit, symbol.
///
/// # Errors
///
/// Returns the user-facing message for the first rule that fails.
pub fn check_password_strength(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    let strong = PASSWORD_ALLOWED_RE.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if strong {
        Ok(())
    } else {
        Err(
            "Password must contain an uppercase letter, a lowercase letter, a number and a special character (@$!%*?&)",
        )
    }
}

// =============================================================================
// Settings forms
// =============================================================================

/// Company info form.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_company_info(update: &CompanyInfoUpdate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_length(
        &mut errors,
        "site_title",
        "Site title",
        &update.site_title,
        1,
        100,
    );
    if let Some(email) = update.site_email.as_deref().filter(|e| !e.trim().is_empty()) {
        check_email(&mut errors, "site_email", email);
    }
    if let Some(phone) = update.site_phone.as_deref() {
        check_phone(&mut errors, "site_phone", phone, false);
    }
    errors.into_result()
}

/// Business registration form.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_business_registration(
    update: &BusinessRegistrationUpdate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_length(
        &mut errors,
        "business_name",
        "Business name",
        &update.business_name,
        1,
        150,
    );
    if update.registration_number.trim().is_empty() {
        errors.push("registration_number", "Registration number is required");
    }
    errors.into_result()
}

/// FAQ editor.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_faq(input: &FaqInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_length(&mut errors, "question", "Question", &input.question, 5, 255);
    let answer_len = input.answer.trim().chars().count();
    if answer_len == 0 {
        errors.push("answer", "Answer is required");
    } else if answer_len < 5 {
        errors.push("answer", "Answer must be at least 5 characters");
    }
    errors.into_result()
}

/// Social links form: every link that is filled in must be an http(s) URL.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_social_links(links: &SocialLinks) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for (field, value) in links.entries() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let valid = url::Url::parse(value)
            .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some());
        if !valid {
            errors.push(field, "Please enter a valid URL");
        }
    }
    errors.into_result()
}

/// Security settings form.
///
/// # Errors
///
/// Returns the failing fields.
pub fn validate_security_settings(settings: &SecuritySettings) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if let Some(minutes) = settings.session_timeout
        && !(5..=1440).contains(&minutes)
    {
        errors.push(
            "session_timeout",
            "Session timeout must be between 5 and 1440 minutes",
        );
    }
    errors.into_result()
}

// =============================================================================
// Helpers
// =============================================================================

fn check_email(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if let Err(e) = Email::parse(value) {
        errors.push(field, e.to_string());
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(field, format!("{label} is required"));
    } else if len < min {
        errors.push(field, format!("{label} must be at least {min} characters"));
    } else if len > max {
        errors.push(field, format!("{label} must be at most {max} characters"));
    }
}

fn check_phone(errors: &mut ValidationErrors, field: &'static str, value: &str, required: bool) {
    let value = value.trim();
    if value.is_empty() {
        if required {
            errors.push(field, "Phone number is required");
        }
        return;
    }
    if !PHONE_RE.is_match(value) {
        errors.push(field, "Phone number must be 10 to 15 digits");
    }
}

fn check_password_pair(
    errors: &mut ValidationErrors,
    password: &SecretString,
    confirmation: &SecretString,
) {
    if let Err(message) = check_password_strength(password.expose_secret()) {
        errors.push("password", message);
    }
    if confirmation.expose_secret().is_empty() {
        errors.push("password_confirmation", "Please confirm your password");
    } else if password.expose_secret() != confirmation.expose_secret() {
        errors.push("password_confirmation", "Passwords do not match");
    }
}
