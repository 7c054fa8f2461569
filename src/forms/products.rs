use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::sanitize_inline_text;

const TITLE_MAX_LEN: u64 = 255;
const SLUG_MAX_LEN: u64 = 255;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided title is empty after sanitization.
    #[error("product title cannot be empty")]
    EmptyTitle,
}

/// Body of `POST /v1/products`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Collection the product belongs to.
    #[validate(range(min = 1))]
    pub collection_id: i32,
    /// Title entered by the caller.
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    /// Optional explicit slug; derived from the title when absent.
    #[validate(length(min = 1, max = SLUG_MAX_LEN))]
    pub slug: Option<String>,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Unit price in the smallest currency unit.
    #[validate(range(min = 0))]
    pub unit_price_cents: i32,
    /// Units in stock.
    #[validate(range(min = 0))]
    #[serde(default)]
    pub inventory: i32,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ProductFormError::EmptyTitle);
        }

        let slug = match self.slug {
            Some(slug) => slugify(&slug),
            None => slugify(&title),
        };

        Ok(NewProduct {
            collection_id: self.collection_id,
            title,
            slug,
            description: self.description,
            unit_price_cents: self.unit_price_cents,
            inventory: self.inventory,
            updated_at: chrono::Utc::now().naive_utc(),
        })
    }
}

/// Body of `PATCH /v1/products/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(range(min = 1))]
    pub collection_id: Option<i32>,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = SLUG_MAX_LEN))]
    pub slug: Option<String>,
    /// Absent leaves the description unchanged; `null` clears it.
    #[serde(default, deserialize_with = "crate::forms::double_option")]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0))]
    pub unit_price_cents: Option<i32>,
    #[validate(range(min = 0))]
    pub inventory: Option<i32>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let title = match self.title {
            Some(title) => {
                let sanitized = sanitize_inline_text(&title);
                if sanitized.is_empty() {
                    return Err(ProductFormError::EmptyTitle);
                }
                Some(sanitized)
            }
            None => None,
        };

        Ok(UpdateProduct {
            collection_id: self.collection_id,
            slug: self.slug.as_deref().map(slugify),
            title,
            description: self.description,
            unit_price_cents: self.unit_price_cents,
            inventory: self.inventory,
        })
    }
}

/// Lowercase the input and replace every non-alphanumeric run with a
/// single hyphen.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut previous_hyphen = false;

    for ch in input.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            previous_hyphen = false;
        } else if !previous_hyphen && !slug.is_empty() {
            slug.push('-');
            previous_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_form_derives_slug_from_title() {
        let form = AddProductForm {
            collection_id: 1,
            title: "Cast Iron  Skillet (12\")".to_string(),
            slug: None,
            description: None,
            unit_price_cents: 4999,
            inventory: 10,
        };

        let new_product = form
            .into_new_product()
            .expect("expected conversion to succeed");

        assert_eq!(new_product.title, "Cast Iron Skillet (12\")");
        assert_eq!(new_product.slug, "cast-iron-skillet-12");
    }

    #[test]
    fn add_product_form_rejects_negative_price() {
        let form = AddProductForm {
            collection_id: 1,
            title: "Skillet".to_string(),
            slug: None,
            description: None,
            unit_price_cents: -1,
            inventory: 0,
        };

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::Validation(_))));
    }

    #[test]
    fn edit_product_form_distinguishes_null_from_absent_description() {
        let cleared: EditProductForm =
            serde_json::from_str(r#"{"description": null}"#).expect("expected deserialization");
        assert_eq!(cleared.description, Some(None));

        let untouched: EditProductForm =
            serde_json::from_str("{}").expect("expected deserialization");
        assert!(untouched.description.is_none());
    }

    #[test]
    fn edit_product_form_keeps_absent_fields_unset() {
        let form = EditProductForm {
            collection_id: None,
            title: None,
            slug: None,
            description: None,
            unit_price_cents: Some(1500),
            inventory: None,
        };

        let update = form
            .into_update_product()
            .expect("expected conversion to succeed");

        assert!(update.title.is_none());
        assert_eq!(update.unit_price_cents, Some(1500));
    }
}
