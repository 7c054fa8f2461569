use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::ProductSummary;

/// Domain representation of an anonymous shopping cart.
///
/// Carts are addressed by an opaque UUID token rather than a sequential
/// identifier so the token cannot be guessed from another cart's.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cart {
    /// Opaque cart token.
    pub id: String,
    /// Lines currently in the cart.
    pub items: Vec<CartLine>,
    /// Sum of all line totals at current product prices.
    pub total_cents: i64,
    /// Timestamp for when the cart was created.
    pub created_at: NaiveDateTime,
}

/// A single (product, quantity) line within a cart.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartLine {
    /// Unique identifier of the line.
    pub id: i32,
    /// Summary of the referenced product at its current price.
    pub product: ProductSummary,
    /// Number of units requested, always >= 1.
    pub quantity: i32,
    /// Line total at the product's current price.
    pub total_cents: i64,
}

impl CartLine {
    /// Assemble a line from its row data and the referenced product.
    pub fn new(id: i32, product: ProductSummary, quantity: i32) -> Self {
        let total_cents = i64::from(product.unit_price_cents) * i64::from(quantity);
        Self {
            id,
            product,
            quantity,
            total_cents,
        }
    }
}

impl Cart {
    /// Assemble a cart from its token, creation time and lines.
    pub fn new(id: String, created_at: NaiveDateTime, items: Vec<CartLine>) -> Self {
        let total_cents = items.iter().map(|line| line.total_cents).sum();
        Self {
            id,
            items,
            total_cents,
            created_at,
        }
    }
}
