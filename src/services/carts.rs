use validator::Validate;

use crate::domain::cart::{Cart, CartLine};
use crate::forms::carts::{AddCartItemForm, UpdateCartItemForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{CartReader, CartWriter};
use crate::services::{ServiceError, ServiceResult};

fn no_cart() -> ServiceError {
    ServiceError::NotFound("no cart with the given identifier".to_string())
}

fn no_cart_item() -> ServiceError {
    ServiceError::NotFound("no cart item with the given identifier".to_string())
}

/// Creates an empty cart addressed by a fresh opaque token.
pub fn create_cart<R>(repo: &R) -> ServiceResult<Cart>
where
    R: CartWriter + ?Sized,
{
    repo.create_cart().map_err(ServiceError::from)
}

/// Fetches a cart with its lines and totals.
pub fn get_cart<R>(repo: &R, cart_id: &str) -> ServiceResult<Cart>
where
    R: CartReader + ?Sized,
{
    repo.get_cart(cart_id)
        .map_err(ServiceError::from)?
        .ok_or_else(no_cart)
}

/// Deletes a cart and all of its lines.
pub fn delete_cart<R>(repo: &R, cart_id: &str) -> ServiceResult<()>
where
    R: CartWriter + ?Sized,
{
    repo.delete_cart(cart_id).map_err(|err| match err {
        RepositoryError::NotFound => no_cart(),
        other => ServiceError::from(other),
    })
}

/// Adds a product to the cart, merging into an existing line for the
/// same product.
pub fn add_item<R>(repo: &R, cart_id: &str, form: AddCartItemForm) -> ServiceResult<CartLine>
where
    R: CartWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.add_cart_item(cart_id, form.product_id, form.quantity)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_cart(),
            other => ServiceError::from(other),
        })
}

/// Replaces the quantity on an existing cart line.
pub fn update_item<R>(
    repo: &R,
    cart_id: &str,
    item_id: i32,
    form: UpdateCartItemForm,
) -> ServiceResult<CartLine>
where
    R: CartWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_cart_item(cart_id, item_id, form.quantity)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_cart_item(),
            other => ServiceError::from(other),
        })
}

/// Removes a single line from the cart. The cart itself stays.
pub fn remove_item<R>(repo: &R, cart_id: &str, item_id: i32) -> ServiceResult<()>
where
    R: CartWriter + ?Sized,
{
    repo.remove_cart_item(cart_id, item_id)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_cart_item(),
            other => ServiceError::from(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockCartWriter;

    #[test]
    fn add_item_rejects_zero_quantity_before_touching_storage() {
        let mut repo = MockCartWriter::new();
        repo.expect_add_cart_item().times(0);

        let form = AddCartItemForm {
            product_id: 1,
            quantity: 0,
        };

        let result = add_item(&repo, "cart-token", form);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn add_item_maps_missing_cart_to_not_found() {
        let mut repo = MockCartWriter::new();

        repo.expect_add_cart_item()
            .times(1)
            .returning(|_, _, _| Err(RepositoryError::NotFound));

        let form = AddCartItemForm {
            product_id: 1,
            quantity: 2,
        };

        let result = add_item(&repo, "missing", form);

        match result {
            Err(ServiceError::NotFound(message)) => {
                assert_eq!(message, "no cart with the given identifier");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
