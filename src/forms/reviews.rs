use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::review::NewReview;
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 255;

/// Result type returned by the review form helpers.
pub type ReviewFormResult<T> = Result<T, ReviewFormError>;

/// Errors that can occur while processing review forms.
#[derive(Debug, Error)]
pub enum ReviewFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The reviewer name is empty after sanitization.
    #[error("reviewer name cannot be empty")]
    EmptyName,
}

/// Body of `POST /v1/products/{product_id}/reviews`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddReviewForm {
    /// Display name of the reviewer.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Review body.
    #[validate(length(min = 1))]
    pub description: String,
}

impl AddReviewForm {
    /// Validates and sanitizes the payload into a domain `NewReview`.
    pub fn into_new_review(self, product_id: i32) -> ReviewFormResult<NewReview> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ReviewFormError::EmptyName);
        }

        Ok(NewReview::new(product_id, name, self.description))
    }
}
