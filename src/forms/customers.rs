use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{Membership, NewCustomer, UpdateCustomer};

const PHONE_MAX_LEN: u64 = 32;

/// Body of `POST /v1/customers/me`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileForm {
    /// Contact phone number.
    #[validate(length(min = 1, max = PHONE_MAX_LEN))]
    pub phone: String,
    /// Optional date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Membership tier; bronze when absent.
    pub membership: Option<Membership>,
}

impl CreateProfileForm {
    /// Build the domain payload for `user_id`.
    pub fn into_new_customer(self, user_id: i32) -> NewCustomer {
        let mut new_customer = NewCustomer::new(user_id, self.phone);
        if let Some(birth_date) = self.birth_date {
            new_customer = new_customer.with_birth_date(birth_date);
        }
        if let Some(membership) = self.membership {
            new_customer = new_customer.with_membership(membership);
        }
        new_customer
    }
}

/// Body of `PUT /v1/customers/me`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileForm {
    #[validate(length(min = 1, max = PHONE_MAX_LEN))]
    pub phone: Option<String>,
    /// Absent leaves the birth date unchanged; `null` clears it.
    #[serde(default, deserialize_with = "crate::forms::double_option")]
    pub birth_date: Option<Option<NaiveDate>>,
    pub membership: Option<Membership>,
}

impl UpdateProfileForm {
    /// Build the domain patch.
    pub fn into_update_customer(self) -> UpdateCustomer {
        let mut update = UpdateCustomer::new();
        if let Some(phone) = self.phone {
            update = update.phone(phone);
        }
        if let Some(birth_date) = self.birth_date {
            update = update.birth_date(birth_date);
        }
        if let Some(membership) = self.membership {
            update = update.membership(membership);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_profile_form_distinguishes_null_from_absent_birth_date() {
        let cleared: UpdateProfileForm =
            serde_json::from_str(r#"{"birth_date": null}"#).expect("expected deserialization");
        assert_eq!(cleared.birth_date, Some(None));

        let untouched: UpdateProfileForm =
            serde_json::from_str("{}").expect("expected deserialization");
        assert!(untouched.birth_date.is_none());
    }
}
