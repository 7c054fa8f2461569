use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductSummary,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub collection_id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price_cents: i32,
    pub inventory: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub collection_id: i32,
    pub title: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub unit_price_cents: i32,
    pub inventory: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub collection_id: Option<i32>,
    pub title: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub unit_price_cents: Option<i32>,
    pub inventory: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Reduced shape embedded in cart lines.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            unit_price_cents: self.unit_price_cents,
        }
    }
}

/// Tax-inclusive price at a flat 10% rate, rounded down to the cent.
fn price_with_tax_cents(unit_price_cents: i32) -> i64 {
    i64::from(unit_price_cents) * 110 / 100
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            collection_id: value.collection_id,
            title: value.title,
            slug: value.slug,
            description: value.description,
            unit_price_cents: value.unit_price_cents,
            price_with_tax_cents: price_with_tax_cents(value.unit_price_cents),
            inventory: value.inventory,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            collection_id: value.collection_id,
            title: value.title.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            unit_price_cents: value.unit_price_cents,
            inventory: value.inventory,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> UpdateProduct<'a> {
    pub fn from_domain(value: &'a DomainUpdateProduct, updated_at: NaiveDateTime) -> Self {
        Self {
            collection_id: value.collection_id,
            title: value.title.as_deref(),
            slug: value.slug.as_deref(),
            description: value
                .description
                .as_ref()
                .map(|description| description.as_deref()),
            unit_price_cents: value.unit_price_cents,
            inventory: value.inventory,
            updated_at,
        }
    }
}
