use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Membership tiers a customer can hold. The tier carries no pricing
/// behaviour; it is plain profile data.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    Bronze,
    Silver,
    Gold,
}

impl Default for Membership {
    fn default() -> Self {
        Self::Bronze
    }
}

impl From<&str> for Membership {
    fn from(value: &str) -> Self {
        match value {
            "silver" => Self::Silver,
            "gold" => Self::Gold,
            _ => Self::Bronze,
        }
    }
}

impl From<Membership> for &'static str {
    fn from(value: Membership) -> Self {
        match value {
            Membership::Bronze => "bronze",
            Membership::Silver => "silver",
            Membership::Gold => "gold",
        }
    }
}

/// Customer profile attached one-to-one to an external user identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Customer {
    /// Unique identifier of the customer record.
    pub id: i32,
    /// External user identity this profile belongs to.
    pub user_id: i32,
    /// Contact phone number.
    pub phone: String,
    /// Optional date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Membership tier.
    pub membership: Membership,
    /// Timestamp for when the profile was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the profile.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new customer profile.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub user_id: i32,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCustomer {
    /// Build a profile payload for `user_id` with the default tier.
    pub fn new(user_id: i32, phone: impl Into<String>) -> Self {
        Self {
            user_id,
            phone: phone.into(),
            birth_date: None,
            membership: Membership::default(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Attach a birth date to the payload.
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Override the default membership tier.
    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }
}

/// Patch data applied when updating an existing customer profile.
#[derive(Debug, Clone)]
pub struct UpdateCustomer {
    pub phone: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub membership: Option<Membership>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateCustomer {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCustomer {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            phone: None,
            birth_date: None,
            membership: None,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Update the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Update the birth date, using `None` to clear an existing value.
    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Update the membership tier.
    pub fn membership(mut self, membership: Membership) -> Self {
        self.membership = Some(membership);
        self
    }
}
