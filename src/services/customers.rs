use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::customer::Customer;
use crate::forms::customers::{CreateProfileForm, UpdateProfileForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

fn no_profile() -> ServiceError {
    ServiceError::NotFound("no customer profile for the current user".to_string())
}

/// Fetches the caller's customer profile.
pub fn get_profile<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_user_id(user.user_id)
        .map_err(ServiceError::from)?
        .ok_or_else(no_profile)
}

/// Creates the caller's customer profile. At most one profile may exist
/// per user identity.
pub fn create_profile<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateProfileForm,
) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    if repo.get_customer_by_user_id(user.user_id)?.is_some() {
        return Err(ServiceError::Conflict(
            "customer profile already exists".to_string(),
        ));
    }

    let new_customer = form.into_new_customer(user.user_id);

    repo.create_customer(&new_customer).map_err(ServiceError::from)
}

/// Applies a partial update to the caller's customer profile.
pub fn update_profile<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateProfileForm,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let update = form.into_update_customer();

    repo.update_customer(user.user_id, &update)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_profile(),
            other => ServiceError::from(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::customer::Membership;
    use crate::repository::mock::MockCustomerRepository;

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_customer(user_id: i32) -> Customer {
        Customer {
            id: 1,
            user_id,
            phone: "555-0100".to_string(),
            birth_date: None,
            membership: Membership::Bronze,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_user(user_id: i32) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            email: "user@example.com".to_string(),
            name: "Tester".to_string(),
        }
    }

    #[test]
    fn create_profile_twice_is_conflict() {
        let mut repo = MockCustomerRepository::new();
        let user = sample_user(4);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(sample_customer(user_id))));
        repo.expect_create_customer().times(0);

        let form = CreateProfileForm {
            phone: "555-0100".to_string(),
            birth_date: None,
            membership: None,
        };

        let result = create_profile(&repo, &user, form);

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn create_profile_defaults_to_bronze() {
        let mut repo = MockCustomerRepository::new();
        let user = sample_user(4);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create_customer()
            .times(1)
            .withf(|new_customer| {
                assert_eq!(new_customer.user_id, 4);
                assert_eq!(new_customer.membership, Membership::Bronze);
                true
            })
            .returning(|new_customer| {
                let mut customer = sample_customer(new_customer.user_id);
                customer.phone = new_customer.phone.clone();
                Ok(customer)
            });

        let form = CreateProfileForm {
            phone: "555-0199".to_string(),
            birth_date: None,
            membership: None,
        };

        let customer = match create_profile(&repo, &user, form) {
            Ok(customer) => customer,
            Err(err) => panic!("expected success, got {err}"),
        };

        assert_eq!(customer.phone, "555-0199");
    }
}
