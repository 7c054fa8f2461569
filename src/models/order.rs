use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{Order as DomainOrder, OrderItem as DomainOrderItem};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub payment_status: String,
    pub placed_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub unit_price_cents: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub payment_status: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub unit_price_cents: i32,
    pub quantity: i32,
}

impl Order {
    pub fn into_domain(self, items: Vec<OrderItem>) -> DomainOrder {
        let items: Vec<DomainOrderItem> = items.into_iter().map(OrderItem::into_domain).collect();
        let total_cents = items
            .iter()
            .map(|item| i64::from(item.unit_price_cents) * i64::from(item.quantity))
            .sum();

        DomainOrder {
            id: self.id,
            customer_id: self.customer_id,
            payment_status: self.payment_status.as_str().into(),
            items,
            total_cents,
            placed_at: self.placed_at,
        }
    }
}

impl OrderItem {
    pub fn into_domain(self) -> DomainOrderItem {
        DomainOrderItem {
            id: self.id,
            product_id: self.product_id,
            unit_price_cents: self.unit_price_cents,
            quantity: self.quantity,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from(value: (Order, Vec<OrderItem>)) -> Self {
        value.0.into_domain(value.1)
    }
}
