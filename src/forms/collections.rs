use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::collection::{NewCollection, UpdateCollection};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a collection title.
const TITLE_MAX_LEN: u64 = 255;

/// Result type returned by the collection form helpers.
pub type CollectionFormResult<T> = Result<T, CollectionFormError>;

/// Errors that can occur while processing collection forms.
#[derive(Debug, Error)]
pub enum CollectionFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided title is empty after sanitization.
    #[error("collection title cannot be empty")]
    EmptyTitle,
}

/// Body of `POST /v1/collections`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCollectionForm {
    /// Title entered by the caller.
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
}

impl AddCollectionForm {
    /// Validates and sanitizes the payload into a domain `NewCollection`.
    pub fn into_new_collection(self) -> CollectionFormResult<NewCollection> {
        self.validate()?;

        let sanitized_title = sanitize_inline_text(&self.title);
        if sanitized_title.is_empty() {
            return Err(CollectionFormError::EmptyTitle);
        }

        Ok(NewCollection::new(sanitized_title))
    }
}

/// Body of `PUT /v1/collections/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCollectionForm {
    /// Updated title supplied by the caller.
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
}

impl EditCollectionForm {
    /// Validates and sanitizes the payload into a domain `UpdateCollection`.
    pub fn into_update_collection(self) -> CollectionFormResult<UpdateCollection> {
        self.validate()?;

        let sanitized_title = sanitize_inline_text(&self.title);
        if sanitized_title.is_empty() {
            return Err(CollectionFormError::EmptyTitle);
        }

        Ok(UpdateCollection::new(sanitized_title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_collection_form_sanitizes_and_converts() {
        let form = AddCollectionForm {
            title: "  Kitchen \t Essentials  ".to_string(),
        };

        let new_collection = form
            .into_new_collection()
            .expect("expected conversion to succeed");

        assert_eq!(new_collection.title, "Kitchen Essentials");
    }

    #[test]
    fn add_collection_form_rejects_empty_title() {
        let form = AddCollectionForm {
            title: "   ".to_string(),
        };

        let result = form.into_new_collection();

        assert!(matches!(result, Err(CollectionFormError::EmptyTitle)));
    }
}
