//! Storefront FAQ entries.

use serde::Serialize;

use super::FaqId;

/// A published (or hidden) question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    /// Shown on the storefront.
    pub is_active: bool,
}

/// Fields submitted when creating or editing an FAQ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub is_active: bool,
}

impl FaqInput {
    /// A new, active entry.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            is_active: true,
        }
    }
}

/// Reply to an FAQ create/update: the saved entry when the backend echoes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqSaved {
    pub message: String,
    pub faq: Option<Faq>,
}
