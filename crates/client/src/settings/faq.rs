//! Storefront FAQ list and CRUD.

use serde::Serialize;
use serde_json::Value;
use storedesk_core::{Acknowledgement, Faq, FaqId, FaqInput, FaqSaved};
use tracing::{debug, instrument};

use crate::client::RemoteStoreClient;
use crate::endpoints;
use crate::envelope;
use crate::error::StoreApiError;

const MISSING_ID: &str = "FAQ id is required";
const INVALID_ID: &str = "FAQ id is invalid";

#[derive(Serialize)]
struct FaqRequest<'a> {
    question: &'a str,
    answer: &'a str,
    status: bool,
}

impl<'a> From<&'a FaqInput> for FaqRequest<'a> {
    fn from(input: &'a FaqInput) -> Self {
        Self {
            question: input.question.trim(),
            answer: input.answer.trim(),
            status: input.is_active,
        }
    }
}

impl RemoteStoreClient {
    /// Fetch every FAQ entry, active or not.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to fetch FAQs").
    #[instrument(skip(self))]
    pub async fn get_faqs(&self) -> Result<Vec<Faq>, StoreApiError> {
        let reply = self.send_empty(&endpoints::FAQS, None).await?;
        let faqs = map_faqs(&reply);
        debug!(count = faqs.len(), "Fetched FAQs");
        Ok(faqs)
    }

    /// Create an FAQ entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreApiError::Api` with the backend message (or
    /// "Failed to add FAQ").
    #[instrument(skip(self, input))]
    pub async fn add_faq(&self, input: &FaqInput) -> Result<FaqSaved, StoreApiError> {
        let reply = self
            .send_json(&endpoints::ADD_FAQ, None, &FaqRequest::from(input))
            .await?;
        Ok(map_faq_saved(&reply))
    }

    /// Replace an existing FAQ entry.
    ///
    /// # Errors
    ///
    /// - `StoreApiError::Validation("FAQ id is required")` for an empty id
    /// - `StoreApiError::Api` with the backend message (or
    ///   "Failed to update FAQ")
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update_faq(&self, id: &FaqId, input: &FaqInput) -> Result<FaqSaved, StoreApiError> {
        let id = require_id(id)?;
        let reply = self
            .send_json(&endpoints::UPDATE_FAQ, Some(id), &FaqRequest::from(input))
            .await?;
        Ok(map_faq_saved(&reply))
    }

    /// Delete an FAQ entry.
    ///
    /// # Errors
    ///
    /// - `StoreApiError::Validation("FAQ id is required")` for an empty id
    /// - `StoreApiError::Api` with the backend message (or
    ///   "Failed to delete FAQ")
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_faq(&self, id: &FaqId) -> Result<Acknowledgement, StoreApiError> {
        let id = require_id(id)?;
        let reply = self.send_empty(&endpoints::DELETE_FAQ, Some(id)).await?;
        Ok(envelope::acknowledgement(&reply))
    }
}

/// The trimmed id, sent as one escaped path segment.
fn require_id(id: &FaqId) -> Result<&str, StoreApiError> {
    if id.is_empty() {
        return Err(StoreApiError::Validation(MISSING_ID.to_string()));
    }
    let id = id.as_str().trim();
    // Dot segments would address the parent route
    if matches!(id, "." | "..") {
        return Err(StoreApiError::Validation(INVALID_ID.to_string()));
    }
    Ok(id)
}

/// `data` when it is a list, else `data.faqs`, else nothing.
fn map_faqs(reply: &Value) -> Vec<Faq> {
    [&["data"][..], &["data", "faqs"]]
        .into_iter()
        .find_map(|path| envelope::lookup(reply, path).and_then(Value::as_array))
        .map(|items| items.iter().filter_map(map_faq).collect())
        .unwrap_or_default()
}

/// One entry. Entries without an id are dropped; `status` defaults to active.
fn map_faq(item: &Value) -> Option<Faq> {
    if !item.is_object() {
        return None;
    }
    let id = envelope::opt_string_at(item, &[&["id"]])?;

    Some(Faq {
        id: FaqId::new(id),
        question: envelope::string_at(item, &[&["question"]]),
        answer: envelope::string_at(item, &[&["answer"]]),
        is_active: envelope::flag_or(item, &[&["status"]], true),
    })
}

fn map_faq_saved(reply: &Value) -> FaqSaved {
    FaqSaved {
        message: envelope::message(reply),
        faq: envelope::lookup(reply, &["data"]).and_then(map_faq),
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_faqs_from_data_list() {
        let reply = json!({
            "data": [
                {"id": 1, "question": "Do you ship abroad?", "answer": "Yes, worldwide.", "status": 1},
                {"id": "2", "question": "Returns?", "answer": "Within 30 days.", "status": 0},
                {"id": 3, "question": "Gift wrap?", "answer": "On request."}
            ]
        });
        let faqs = map_faqs(&reply);

        assert_eq!(faqs.len(), 3);
        assert_eq!(faqs[0].id.as_str(), "1");
        assert!(faqs[0].is_active);
        assert_eq!(faqs[1].id.as_str(), "2");
        assert!(!faqs[1].is_active);
        assert!(faqs[2].is_active);
    }

    #[test]
    fn test_faqs_from_nested_list() {
        let reply = json!({"data": {"faqs": [{"id": 9, "question": "Q?", "answer": "A."}]}});
        let faqs = map_faqs(&reply);
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "Q?");
    }

    #[test]
    fn test_faqs_missing_is_empty() {
        assert!(map_faqs(&json!({"data": null})).is_empty());
        assert!(map_faqs(&json!({"message": "ok"})).is_empty());
    }

    #[test]
    fn test_faq_saved_with_and_without_entry() {
        let saved = map_faq_saved(&json!({
            "message": "FAQ added",
            "data": {"id": 5, "question": "Q?", "answer": "A.", "status": "active"}
        }));
        assert_eq!(saved.message, "FAQ added");
        assert_eq!(saved.faq.map(|f| f.id), Some(FaqId::from("5")));

        let saved = map_faq_saved(&json!({"message": "FAQ added", "data": true}));
        assert!(saved.faq.is_none());
    }

    #[test]
    fn test_require_id() {
        assert!(matches!(
            require_id(&FaqId::new("  ")),
            Err(StoreApiError::Validation(msg)) if msg == MISSING_ID
        ));
        assert!(matches!(require_id(&FaqId::from(3_i64)), Ok("3")));
        assert!(matches!(
            require_id(&FaqId::new("..")),
            Err(StoreApiError::Validation(msg)) if msg == INVALID_ID
        ));
        assert!(matches!(require_id(&FaqId::new("../setup")), Ok("../setup")));
    }

    #[test]
    fn test_request_body() {
        let mut input = FaqInput::new(" Do you ship abroad? ", "Yes.");
        input.is_active = false;
        let body = serde_json::to_value(FaqRequest::from(&input)).unwrap_or_default();
        assert_eq!(
            body,
            json!({"question": "Do you ship abroad?", "answer": "Yes.", "status": false})
        );
    }
}
