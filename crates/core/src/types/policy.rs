//! Store policy documents (privacy, returns, terms).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Markup produced by the rich-text editor when the document is empty.
const EMPTY_EDITOR_MARKUP: &str = "<p><br></p>";

/// Which policy document an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Privacy policy.
    Privacy,
    /// Return / refund policy.
    Return,
    /// Terms and conditions.
    Terms,
}

impl PolicyKind {
    /// Human-readable name used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Privacy => "Privacy policy",
            Self::Return => "Return policy",
            Self::Terms => "Terms and conditions",
        }
    }

    /// Backend field carrying the document body, in both reads and updates.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Privacy => "privacy_policy",
            Self::Return => "return_policy",
            Self::Terms => "terms_condition",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur when building [`PolicyContent`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyContentError {
    /// Content was blank or only the empty editor markup.
    #[error("{} content cannot be empty", .0.label())]
    Empty(PolicyKind),
}

/// Non-empty HTML body for a policy document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyContent {
    kind: PolicyKind,
    html: String,
}

impl PolicyContent {
    /// Accept `html` as the new body of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyContentError::Empty`] if the trimmed content is empty
    /// or is exactly `<p><br></p>`.
    pub fn parse(kind: PolicyKind, html: &str) -> Result<Self, PolicyContentError> {
        let trimmed = html.trim();
        if trimmed.is_empty() || trimmed == EMPTY_EDITOR_MARKUP {
            return Err(PolicyContentError::Empty(kind));
        }
        Ok(Self {
            kind,
            html: html.to_owned(),
        })
    }

    /// The targeted document.
    #[must_use]
    pub const fn kind(&self) -> PolicyKind {
        self.kind
    }

    /// The HTML body, untrimmed.
    #[must_use]
    pub fn as_html(&self) -> &str {
        &self.html
    }
}

/// A policy document as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    /// HTML body; empty when the shop has not written one yet.
    pub content: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_editor_placeholder_share_message() {
        let blank = PolicyContent::parse(PolicyKind::Terms, "").unwrap_err();
        let placeholder = PolicyContent::parse(PolicyKind::Terms, "<p><br></p>").unwrap_err();
        assert_eq!(blank, placeholder);
        assert_eq!(
            blank.to_string(),
            "Terms and conditions content cannot be empty"
        );
    }

    #[test]
    fn test_whitespace_around_placeholder_rejected() {
        assert!(PolicyContent::parse(PolicyKind::Privacy, "  <p><br></p>\n").is_err());
        assert!(PolicyContent::parse(PolicyKind::Privacy, " \t ").is_err());
    }

    #[test]
    fn test_content_kept_verbatim() {
        let content = PolicyContent::parse(PolicyKind::Return, " <p>30 days</p>").unwrap();
        assert_eq!(content.as_html(), " <p>30 days</p>");
        assert_eq!(content.kind(), PolicyKind::Return);
    }

    #[test]
    fn test_backend_fields() {
        assert_eq!(PolicyKind::Privacy.field(), "privacy_policy");
        assert_eq!(PolicyKind::Return.field(), "return_policy");
        assert_eq!(PolicyKind::Terms.field(), "terms_condition");
    }
}
