//! Custom storefront domain names.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`DomainName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input does not look like `name.tld`.
    #[error("Please enter a valid domain name")]
    Invalid,
}

/// A domain name a shop can be served from, e.g. `shop.example.com`.
///
/// Only the coarse shape is checked: letters, digits, dots and hyphens,
/// followed by an alphabetic TLD of at least two characters. Input is trimmed.
///
/// ```
/// use storedesk_core::DomainName;
///
/// assert!(DomainName::parse("my-shop.example.com").is_ok());
/// assert!(DomainName::parse("not-a-domain").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DomainName(String);

impl DomainName {
    /// Parse a `DomainName`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Invalid`] when the trimmed input fails the
    /// domain pattern.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        if DOMAIN_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(DomainError::Invalid)
        }
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
