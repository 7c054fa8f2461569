use mockall::mock;

use super::{
    CartReader, CartWriter, CollectionReader, CollectionWriter, CustomerReader, CustomerWriter,
    OrderReader, OrderWriter, ProductReader, ProductWriter, ReviewReader, ReviewWriter,
};
use crate::domain::{
    cart::{Cart, CartLine},
    collection::{Collection, NewCollection, UpdateCollection},
    customer::{Customer, NewCustomer, UpdateCustomer},
    order::{Order, OrderListQuery, PaymentStatus},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    review::{NewReview, Review},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CollectionReader {}

    impl CollectionReader for CollectionReader {
        fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
        fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
        fn collection_has_products(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub CollectionWriter {}

    impl CollectionReader for CollectionWriter {
        fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
        fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
        fn collection_has_products(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl CollectionWriter for CollectionWriter {
        fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
        fn update_collection(&self, collection_id: i32, updates: &UpdateCollection) -> RepositoryResult<Collection>;
        fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn product_has_order_items(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductReader for ProductWriter {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn product_has_order_items(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ReviewRepository {}

    impl ProductReader for ReviewRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn product_has_order_items(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl ReviewReader for ReviewRepository {
        fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<Review>>;
    }

    impl ReviewWriter for ReviewRepository {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    }
}

mock! {
    pub CartReader {}

    impl CartReader for CartReader {
        fn get_cart(&self, cart_id: &str) -> RepositoryResult<Option<Cart>>;
    }
}

mock! {
    pub CartWriter {}

    impl CartWriter for CartWriter {
        fn create_cart(&self) -> RepositoryResult<Cart>;
        fn delete_cart(&self, cart_id: &str) -> RepositoryResult<()>;
        fn add_cart_item(&self, cart_id: &str, product_id: i32, quantity: i32) -> RepositoryResult<CartLine>;
        fn update_cart_item(&self, cart_id: &str, item_id: i32, quantity: i32) -> RepositoryResult<CartLine>;
        fn remove_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CustomerRepository {}

    impl CustomerReader for CustomerRepository {
        fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Customer>>;
    }

    impl CustomerWriter for CustomerRepository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, user_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
    }
}

mock! {
    pub OrderRepository {}

    impl CustomerReader for OrderRepository {
        fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Customer>>;
    }

    impl OrderReader for OrderRepository {
        fn get_order_by_id(&self, id: i32, customer_id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }

    impl OrderWriter for OrderRepository {
        fn checkout_cart(&self, cart_id: &str, customer_id: i32) -> RepositoryResult<Order>;
        fn set_payment_status(&self, order_id: i32, customer_id: i32, status: PaymentStatus) -> RepositoryResult<Order>;
    }
}
