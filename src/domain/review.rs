use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer review attached to a product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Review {
    /// Unique identifier of the review.
    pub id: i32,
    /// Product the review refers to.
    pub product_id: i32,
    /// Display name of the reviewer.
    pub name: String,
    /// Review body.
    pub description: String,
    /// Timestamp for when the review was submitted.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub product_id: i32,
    pub name: String,
    pub description: String,
}

impl NewReview {
    pub fn new(product_id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            product_id,
            name: name.into(),
            description: description.into(),
        }
    }
}
