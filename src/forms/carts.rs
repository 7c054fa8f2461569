use serde::Deserialize;
use validator::Validate;

/// Body of `POST /v1/carts/{cart_id}/items`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCartItemForm {
    /// Product to add to the cart.
    #[validate(range(min = 1))]
    pub product_id: i32,
    /// Units to add. Merged into an existing line for the same product.
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

/// Body of `PATCH /v1/carts/{cart_id}/items/{item_id}`.
///
/// A quantity of zero is not an alias for removal; lines are removed
/// through the explicit delete endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCartItemForm {
    /// Replacement quantity for the line.
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_cart_item_form_rejects_zero_quantity() {
        let form = AddCartItemForm {
            product_id: 1,
            quantity: 0,
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn update_cart_item_form_accepts_positive_quantity() {
        let form = UpdateCartItemForm { quantity: 3 };

        assert!(form.validate().is_ok());
    }
}
