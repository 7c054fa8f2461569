use serde::Deserialize;
use validator::Validate;

use crate::domain::order::PaymentStatus;

/// Body of `POST /v1/orders`: the cart to convert into an order.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutForm {
    /// Opaque token of the cart being checked out.
    #[validate(length(min = 1, message = "cart_id cannot be empty"))]
    pub cart_id: String,
}

/// Body of `PATCH /v1/orders/{id}`. The payment status is the only
/// mutable field of a placed order.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderForm {
    pub payment_status: PaymentStatus,
}
