//! Core types for StoreDesk.
//!
//! This module provides request payloads, result types, and type-safe
//! wrappers for validated values.

pub mod auth;
pub mod common;
pub mod domain;
pub mod email;
pub mod faq;
pub mod id;
pub mod policy;
pub mod security;
pub mod social;
pub mod store;

pub use auth::{
    Credentials, LoginOutcome, NewPassword, OtpVerification, Registration,
    RegistrationOutcome, ResetCodeVerification, Session, UserProfile,
};
pub use common::{Acknowledgement, FileUpload};
pub use domain::{DomainError, DomainName};
pub use email::{Email, EmailError};
pub use faq::{Faq, FaqInput, FaqSaved};
pub use id::*;
pub use policy::{PolicyContent, PolicyContentError, PolicyDocument, PolicyKind};
pub use security::SecuritySettings;
pub use social::SocialLinks;
pub use store::{
    BusinessDetails, BusinessRegistrationUpdate, CompanyDetails, CompanyInfo, CompanyInfoUpdate,
    DomainDetails, ShopDetails,
};
