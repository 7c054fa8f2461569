use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a catalog collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Collection {
    /// Unique identifier of the collection.
    pub id: i32,
    /// Display title of the collection.
    pub title: String,
    /// Number of products currently referencing this collection.
    pub product_count: i64,
    /// Timestamp for when the collection record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the collection record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new collection.
#[derive(Debug, Clone)]
pub struct NewCollection {
    pub title: String,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCollection {
    /// Build a new collection payload with the current timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Patch applied when renaming an existing collection.
#[derive(Debug, Clone)]
pub struct UpdateCollection {
    pub title: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateCollection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
