use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Collection this product belongs to.
    pub collection_id: i32,
    /// Display title of the product.
    pub title: String,
    /// URL-friendly identifier derived from the title.
    pub slug: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Current unit price in the smallest currency unit.
    pub unit_price_cents: i32,
    /// Unit price including tax, computed from the current price.
    pub price_with_tax_cents: i64,
    /// Units currently in stock.
    pub inventory: i32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Reduced product shape embedded in cart and order representations.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductSummary {
    pub id: i32,
    pub title: String,
    pub unit_price_cents: i32,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub collection_id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price_cents: i32,
    pub inventory: i32,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub collection_id: Option<i32>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub unit_price_cents: Option<i32>,
    pub inventory: Option<i32>,
}

/// Sort orders accepted by the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductOrdering {
    /// Alphabetical by title.
    #[default]
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
    UpdatedAsc,
    UpdatedDesc,
}

impl ProductOrdering {
    /// Parse an ordering directive: a field name with an optional
    /// leading `-` for descending.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::TitleAsc),
            "-title" => Some(Self::TitleDesc),
            "unit_price_cents" => Some(Self::PriceAsc),
            "-unit_price_cents" => Some(Self::PriceDesc),
            "updated_at" => Some(Self::UpdatedAsc),
            "-updated_at" => Some(Self::UpdatedDesc),
            _ => None,
        }
    }
}

/// Query definition used to filter, sort and paginate the product list.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Optional collection filter.
    pub collection_id: Option<i32>,
    /// Optional search term matched against title and description.
    pub search: Option<String>,
    /// Sort order applied to the results.
    pub ordering: ProductOrdering,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListQuery {
    /// Construct a query that targets all products in title order.
    pub fn new() -> Self {
        Self {
            collection_id: None,
            search: None,
            ordering: ProductOrdering::default(),
            pagination: None,
        }
    }

    /// Replace the default title ordering.
    pub fn order_by(mut self, ordering: ProductOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Restrict the results to products in the given collection.
    pub fn collection_id(mut self, collection_id: i32) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    /// Filter the results by a search term applied to title or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
