use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::CartLine as DomainCartLine;
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::carts)]
pub struct Cart {
    pub id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::cart_items)]
#[diesel(belongs_to(Cart, foreign_key = cart_id))]
pub struct CartItem {
    pub id: i32,
    pub cart_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::carts)]
pub struct NewCart<'a> {
    pub id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem<'a> {
    pub cart_id: &'a str,
    pub product_id: i32,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

impl CartItem {
    pub fn into_domain(self, product: &Product) -> DomainCartLine {
        DomainCartLine::new(self.id, product.summary(), self.quantity)
    }
}
