use serde::Deserialize;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderListQuery};
use crate::forms::orders::{CheckoutForm, UpdateOrderForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

fn no_order() -> ServiceError {
    ServiceError::NotFound("no order with the given identifier".to_string())
}

/// Query parameters accepted by the order list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// A customer record must exist for the authenticated identity. Its
/// absence is a data problem on our side, not bad user input.
fn resolve_customer<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_user_id(user.user_id)?
        .ok_or_else(|| {
            ServiceError::Internal(format!("no customer record for user {}", user.user_id))
        })
}

/// Converts the cart named in the form into a new pending order.
///
/// The repository runs the conversion as one transaction, so a failure
/// leaves the cart intact and the caller can simply resubmit it.
pub fn checkout<R>(repo: &R, user: &AuthenticatedUser, form: CheckoutForm) -> ServiceResult<Order>
where
    R: OrderWriter + CustomerReader + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let customer = resolve_customer(repo, user)?;

    repo.checkout_cart(&form.cart_id, customer.id)
        .map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound("no cart with the given identifier".to_string())
            }
            other => ServiceError::from(other),
        })
}

/// Fetches one of the caller's orders.
pub fn get_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + CustomerReader + ?Sized,
{
    let customer = resolve_customer(repo, user)?;

    repo.get_order_by_id(order_id, customer.id)
        .map_err(ServiceError::from)?
        .ok_or_else(no_order)
}

/// Lists the caller's orders, newest first.
pub fn list_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: OrdersQuery,
) -> ServiceResult<Paginated<Order>>
where
    R: OrderReader + CustomerReader + ?Sized,
{
    let customer = resolve_customer(repo, user)?;

    let page = query.page.unwrap_or(1);
    let list_query = OrderListQuery::new(customer.id).paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, orders) = repo.list_orders(list_query).map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    Ok(Paginated::new(orders, page, total_pages))
}

/// Moves one of the caller's orders to a new payment status.
pub fn set_payment_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    form: UpdateOrderForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + CustomerReader + ?Sized,
{
    let customer = resolve_customer(repo, user)?;

    repo.set_payment_status(order_id, customer.id, form.payment_status)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_order(),
            other => ServiceError::from(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::customer::Membership;
    use crate::domain::order::PaymentStatus;
    use crate::repository::mock::MockOrderRepository;

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_customer(id: i32, user_id: i32) -> Customer {
        Customer {
            id,
            user_id,
            phone: "555-0100".to_string(),
            birth_date: None,
            membership: Membership::Bronze,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_order(id: i32, customer_id: i32) -> Order {
        Order {
            id,
            customer_id,
            payment_status: PaymentStatus::Pending,
            items: Vec::new(),
            total_cents: 0,
            placed_at: fixed_datetime(),
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
    fn checkout_resolves_customer_and_forwards_cart() {
        let mut repo = MockOrderRepository::new();
        let user = sample_user(11);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .withf(|user_id| *user_id == 11)
            .returning(|_| Ok(Some(sample_customer(5, 11))));

        repo.expect_checkout_cart()
            .times(1)
            .withf(|cart_id, customer_id| {
                assert_eq!(cart_id, "cart-token");
                assert_eq!(*customer_id, 5);
                true
            })
            .returning(|_, customer_id| Ok(sample_order(1, customer_id)));

        let form = CheckoutForm {
            cart_id: "cart-token".to_string(),
        };

        let order = match checkout(&repo, &user, form) {
            Ok(order) => order,
            Err(err) => panic!("expected checkout to succeed, got {err}"),
        };

        assert_eq!(order.customer_id, 5);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn checkout_without_customer_record_is_internal_error() {
        let mut repo = MockOrderRepository::new();
        let user = sample_user(11);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_checkout_cart().times(0);

        let form = CheckoutForm {
            cart_id: "cart-token".to_string(),
        };

        let result = checkout(&repo, &user, form);

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn checkout_of_missing_cart_is_not_found() {
        let mut repo = MockOrderRepository::new();
        let user = sample_user(11);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .returning(|_| Ok(Some(sample_customer(5, 11))));
        repo.expect_checkout_cart()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form = CheckoutForm {
            cart_id: "gone".to_string(),
        };

        match checkout(&repo, &user, form) {
            Err(ServiceError::NotFound(message)) => {
                assert_eq!(message, "no cart with the given identifier");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn checkout_of_empty_cart_is_validation_error() {
        let mut repo = MockOrderRepository::new();
        let user = sample_user(11);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .returning(|_| Ok(Some(sample_customer(5, 11))));
        repo.expect_checkout_cart()
            .times(1)
            .returning(|_, _| Err(RepositoryError::Validation("cart is empty".to_string())));

        let form = CheckoutForm {
            cart_id: "empty".to_string(),
        };

        match checkout(&repo, &user, form) {
            Err(ServiceError::Validation(message)) => assert_eq!(message, "cart is empty"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn list_orders_pages_by_customer() {
        let mut repo = MockOrderRepository::new();
        let user = sample_user(11);

        repo.expect_get_customer_by_user_id()
            .times(1)
            .returning(|_| Ok(Some(sample_customer(5, 11))));

        repo.expect_list_orders()
            .times(1)
            .withf(|query| {
                assert_eq!(query.customer_id, 5);
                match &query.pagination {
                    Some(pagination) => {
                        assert_eq!(pagination.page, 2);
                        assert_eq!(pagination.per_page, DEFAULT_ITEMS_PER_PAGE);
                    }
                    None => panic!("expected pagination to be set"),
                }
                true
            })
            .returning(|_| Ok((30, vec![sample_order(1, 5), sample_order(2, 5)])));

        let query = OrdersQuery { page: Some(2) };

        let orders = match list_orders(&repo, &user, query) {
            Ok(orders) => orders,
            Err(err) => panic!("expected success, got {err}"),
        };

        assert_eq!(orders.page, 2);
        assert_eq!(orders.items.len(), 2);
        assert_eq!(orders.total_pages, 30usize.div_ceil(DEFAULT_ITEMS_PER_PAGE));
    }
}
