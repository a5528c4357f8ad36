//! Backend endpoint table.
//!
//! Each entry fixes the verb, path, whether a bearer token is attached, and
//! the message used when a failed reply carries no `message` of its own.

use reqwest::Method;

/// One REST endpoint of the store backend.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub authenticated: bool,
    pub fallback_error: &'static str,
}

impl Endpoint {
    const fn public(method: Method, path: &'static str, fallback_error: &'static str) -> Self {
        Self {
            method,
            path,
            authenticated: false,
            fallback_error,
        }
    }

    const fn bearer(method: Method, path: &'static str, fallback_error: &'static str) -> Self {
        Self {
            method,
            path,
            authenticated: true,
            fallback_error,
        }
    }
}

// Account
pub(crate) static REGISTER: Endpoint =
    Endpoint::public(Method::POST, "/setup", "Registration failed");
pub(crate) static LOGIN: Endpoint = Endpoint::public(Method::POST, "/login", "Login failed");
pub(crate) static FORGOT_PASSWORD: Endpoint = Endpoint::public(
    Method::POST,
    "/forgot-password",
    "Failed to send reset code",
);
pub(crate) static RESET_PASSWORD: Endpoint = Endpoint::public(
    Method::POST,
    "/reset-password",
    "Invalid or expired reset code",
);
pub(crate) static CONFIRM_PASSWORD: Endpoint = Endpoint::public(
    Method::POST,
    "/confirm-password",
    "Failed to update password",
);
pub(crate) static VERIFY_OTP: Endpoint =
    Endpoint::public(Method::POST, "/verify-otp", "OTP verification failed");

// Shop and company
pub(crate) static SHOP_DETAILS: Endpoint =
    Endpoint::bearer(Method::GET, "/show", "Failed to fetch shop details");
pub(crate) static COMPANY_DETAILS: Endpoint =
    Endpoint::bearer(Method::GET, "/details", "Failed to fetch company details");
pub(crate) static UPDATE_COMPANY_INFO: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-details",
    "Failed to update company info",
);
pub(crate) static UPDATE_BUSINESS_DETAILS: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-mybusinessdetails",
    "Failed to update business details",
);

// Domain
pub(crate) static DOMAIN_DETAILS: Endpoint =
    Endpoint::bearer(Method::GET, "/get-domain", "Failed to fetch domain details");
pub(crate) static UPDATE_DOMAIN: Endpoint =
    Endpoint::bearer(Method::POST, "/update-domain", "Failed to update domain");

// Policies
pub(crate) static PRIVACY_POLICY: Endpoint =
    Endpoint::bearer(Method::GET, "/privacy-policy", "Failed to fetch privacy policy");
pub(crate) static UPDATE_PRIVACY_POLICY: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-privacy-policy",
    "Failed to update privacy policy",
);
pub(crate) static RETURN_POLICY: Endpoint =
    Endpoint::bearer(Method::GET, "/return-policy", "Failed to fetch return policy");
pub(crate) static UPDATE_RETURN_POLICY: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-return-policy",
    "Failed to update return policy",
);
pub(crate) static TERMS: Endpoint = Endpoint::bearer(
    Method::GET,
    "/terms-condition",
    "Failed to fetch terms and conditions",
);
pub(crate) static UPDATE_TERMS: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-terms-condition",
    "Failed to update terms and conditions",
);

// Social links
pub(crate) static SOCIAL_LINKS: Endpoint =
    Endpoint::bearer(Method::GET, "/sociallinks", "Failed to fetch social links");
pub(crate) static UPDATE_SOCIAL_LINKS: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-sociallinks",
    "Failed to update social links",
);

// FAQ
pub(crate) static FAQS: Endpoint = Endpoint::bearer(Method::GET, "/faq", "Failed to fetch FAQs");
pub(crate) static ADD_FAQ: Endpoint = Endpoint::bearer(Method::POST, "/add-faq", "Failed to add FAQ");
pub(crate) static UPDATE_FAQ: Endpoint =
    Endpoint::bearer(Method::PUT, "/update-faq", "Failed to update FAQ");
pub(crate) static DELETE_FAQ: Endpoint =
    Endpoint::bearer(Method::DELETE, "/delete-faq", "Failed to delete FAQ");

// Security
pub(crate) static SECURITY_SETTINGS: Endpoint = Endpoint::bearer(
    Method::GET,
    "/security-settings",
    "Failed to fetch security settings",
);
pub(crate) static UPDATE_SECURITY_SETTINGS: Endpoint = Endpoint::bearer(
    Method::POST,
    "/update-security-settings",
    "Failed to update security settings",
);
