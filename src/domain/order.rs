use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Payment states an order moves through after checkout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment has not been confirmed yet.
    Pending,
    /// Payment succeeded.
    Complete,
    /// Payment was attempted and failed.
    Failed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "complete" => Self::Complete,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }
}

impl From<PaymentStatus> for &'static str {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Complete => "complete",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Durable record of a completed checkout.
///
/// Orders are immutable after creation except for the payment status.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Customer who placed the order.
    pub customer_id: i32,
    /// Current payment status.
    pub payment_status: PaymentStatus,
    /// Lines frozen at checkout time.
    pub items: Vec<OrderItem>,
    /// Sum of all line totals at the frozen prices.
    pub total_cents: i64,
    /// Timestamp for when the order was placed.
    pub placed_at: NaiveDateTime,
}

/// A single line of an order, with the unit price frozen at checkout.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Unique identifier of the line.
    pub id: i32,
    /// Product the line refers to.
    pub product_id: i32,
    /// Unit price as it was when the order was placed. Later product
    /// price changes never affect this value.
    pub unit_price_cents: i32,
    /// Number of units purchased.
    pub quantity: i32,
}

/// Query definition used to list a customer's orders.
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    /// Owning customer identifier.
    pub customer_id: i32,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    /// Construct a query that targets all orders belonging to `customer_id`.
    pub fn new(customer_id: i32) -> Self {
        Self {
            customer_id,
            pagination: None,
        }
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
