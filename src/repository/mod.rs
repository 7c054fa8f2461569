use crate::db::{DbConnection, DbPool};
use crate::domain::cart::{Cart, CartLine};
use crate::domain::collection::{Collection, NewCollection, UpdateCollection};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::order::{Order, OrderListQuery, PaymentStatus};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::review::{NewReview, Review};
use crate::repository::errors::RepositoryResult;

pub mod errors;

pub mod cart;
pub mod collection;
pub mod customer;
pub mod order;
pub mod product;
pub mod review;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over collections.
pub trait CollectionReader {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
    fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
    /// Whether any product still references the collection. Used by the
    /// deletion guard rail.
    fn collection_has_products(&self, id: i32) -> RepositoryResult<bool>;
}

/// Write operations over collections.
pub trait CollectionWriter {
    fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
    fn update_collection(
        &self,
        collection_id: i32,
        updates: &UpdateCollection,
    ) -> RepositoryResult<Collection>;
    fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Whether any placed order references the product. Used by the
    /// deletion guard rail.
    fn product_has_order_items(&self, id: i32) -> RepositoryResult<bool>;
}

/// Write operations over products.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product reviews.
pub trait ReviewReader {
    fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<Review>>;
}

/// Write operations over product reviews.
pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
}

/// Read-only operations over carts.
pub trait CartReader {
    fn get_cart(&self, cart_id: &str) -> RepositoryResult<Option<Cart>>;
}

/// Write operations over carts and their lines.
pub trait CartWriter {
    fn create_cart(&self) -> RepositoryResult<Cart>;
    fn delete_cart(&self, cart_id: &str) -> RepositoryResult<()>;
    /// Add `quantity` of a product to the cart. An existing line for the
    /// same product is incremented rather than duplicated.
    fn add_cart_item(
        &self,
        cart_id: &str,
        product_id: i32,
        quantity: i32,
    ) -> RepositoryResult<CartLine>;
    fn update_cart_item(
        &self,
        cart_id: &str,
        item_id: i32,
        quantity: i32,
    ) -> RepositoryResult<CartLine>;
    fn remove_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over customer profiles.
pub trait CustomerReader {
    fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Customer>>;
}

/// Write operations over customer profiles.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(&self, user_id: i32, updates: &UpdateCustomer)
    -> RepositoryResult<Customer>;
}

/// Read-only operations over orders.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32, customer_id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

/// Write operations over orders.
pub trait OrderWriter {
    /// Convert the cart into a new pending order in one transaction,
    /// freezing unit prices and deleting the cart. See the trait impl for
    /// the precise failure semantics.
    fn checkout_cart(&self, cart_id: &str, customer_id: i32) -> RepositoryResult<Order>;
    /// Move a pending order to a new payment status. Settled and failed
    /// orders reject further changes.
    fn set_payment_status(
        &self,
        order_id: i32,
        customer_id: i32,
        status: PaymentStatus,
    ) -> RepositoryResult<Order>;
}
