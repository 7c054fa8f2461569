use serde::Deserialize;

use crate::domain::product::{Product, ProductListQuery, ProductOrdering};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::errors::RepositoryError;
use crate::repository::{CollectionReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

fn no_product() -> ServiceError {
    ServiceError::NotFound("no product with the given identifier".to_string())
}

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional collection filter.
    pub collection_id: Option<i32>,
    /// Optional search term matched against title and description.
    pub search: Option<String>,
    /// Optional sort directive, a field name with an optional leading
    /// `-` for descending, e.g. `-unit_price_cents`.
    pub ordering: Option<String>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// Lists products with optional filtering and pagination.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let ProductsQuery {
        collection_id,
        search,
        ordering,
        page,
    } = query;

    let page = page.unwrap_or(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(collection_id) = collection_id {
        list_query = list_query.collection_id(collection_id);
    }

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    if let Some(raw) = ordering.as_deref() {
        let ordering = ProductOrdering::parse(raw)
            .ok_or_else(|| ServiceError::Validation(format!("unsupported ordering: {raw}")))?;
        list_query = list_query.order_by(ordering);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    Ok(Paginated::new(items, page, total_pages))
}

/// Fetches a single product.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(no_product)
}

/// Creates a new product in an existing collection.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + CollectionReader + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    if repo.get_collection_by_id(new_product.collection_id)?.is_none() {
        return Err(ServiceError::Validation(
            "no collection with the given identifier".to_string(),
        ));
    }

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Applies a partial update to an existing product.
pub fn update_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + CollectionReader + ?Sized,
{
    let update = form
        .into_update_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    if let Some(collection_id) = update.collection_id
        && repo.get_collection_by_id(collection_id)?.is_none()
    {
        return Err(ServiceError::Validation(
            "no collection with the given identifier".to_string(),
        ));
    }

    repo.update_product(product_id, &update)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_product(),
            other => ServiceError::from(other),
        })
}

/// Deletes a product, refusing while any placed order references it so
/// historical orders keep their lines.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    if repo.product_has_order_items(product_id)? {
        return Err(ServiceError::Conflict(
            "product cannot be deleted because there are orders associated with it".to_string(),
        ));
    }

    repo.delete_product(product_id).map_err(|err| match err {
        RepositoryError::NotFound => no_product(),
        other => ServiceError::from(other),
    })
}
