use storefront::domain::collection::{NewCollection, UpdateCollection};
use storefront::domain::customer::{Membership, NewCustomer, UpdateCustomer};
use storefront::domain::product::{NewProduct, ProductListQuery, ProductOrdering, UpdateProduct};
use storefront::domain::review::NewReview;
use storefront::repository::errors::RepositoryError;
use storefront::repository::{
    CartWriter, CollectionReader, CollectionWriter, CustomerReader, CustomerWriter,
    DieselRepository, OrderWriter, ProductReader, ProductWriter, ReviewReader, ReviewWriter,
};
use storefront::services::{self, ServiceError};

mod common;

fn new_product(collection_id: i32, title: &str, unit_price_cents: i32) -> NewProduct {
    NewProduct {
        collection_id,
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: Some(format!("{title} description")),
        unit_price_cents,
        inventory: 5,
        updated_at: chrono::Utc::now().naive_utc(),
    }
}

#[test]
fn test_collection_crud_and_product_counts() {
    let test_db = common::TestDb::new("test_collection_crud_and_product_counts.db");
    let repo = DieselRepository::new(test_db.pool());

    let kitchen = repo.create_collection(&NewCollection::new("Kitchen")).unwrap();
    let garden = repo.create_collection(&NewCollection::new("Garden")).unwrap();
    assert_eq!(kitchen.product_count, 0);

    repo.create_product(&new_product(kitchen.id, "Skillet", 1000))
        .unwrap();
    repo.create_product(&new_product(kitchen.id, "Dutch Oven", 2500))
        .unwrap();

    let collections = repo.list_collections().unwrap();
    assert_eq!(collections.len(), 2);
    let counts: Vec<(i32, i64)> = collections
        .iter()
        .map(|collection| (collection.id, collection.product_count))
        .collect();
    assert!(counts.contains(&(kitchen.id, 2)));
    assert!(counts.contains(&(garden.id, 0)));

    let renamed = repo
        .update_collection(garden.id, &UpdateCollection::new("Outdoor"))
        .unwrap();
    assert_eq!(renamed.title, "Outdoor");

    repo.delete_collection(garden.id).unwrap();
    assert!(repo.get_collection_by_id(garden.id).unwrap().is_none());
}

#[test]
fn test_collection_delete_guard_end_to_end() {
    let test_db = common::TestDb::new("test_collection_delete_guard_end_to_end.db");
    let repo = DieselRepository::new(test_db.pool());

    let collection = repo.create_collection(&NewCollection::new("Kitchen")).unwrap();
    let product = repo
        .create_product(&new_product(collection.id, "Skillet", 1000))
        .unwrap();

    let result = services::collections::delete_collection(&repo, collection.id);
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    assert!(repo.get_collection_by_id(collection.id).unwrap().is_some());

    // Once the last product is gone the collection can be removed.
    repo.delete_product(product.id).unwrap();
    services::collections::delete_collection(&repo, collection.id).unwrap();
    assert!(repo.get_collection_by_id(collection.id).unwrap().is_none());
}

#[test]
fn test_product_list_filters_and_pagination() {
    let test_db = common::TestDb::new("test_product_list_filters_and_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    let kitchen = repo.create_collection(&NewCollection::new("Kitchen")).unwrap();
    let garden = repo.create_collection(&NewCollection::new("Garden")).unwrap();

    for title in ["Skillet", "Dutch Oven", "Stock Pot"] {
        repo.create_product(&new_product(kitchen.id, title, 1000))
            .unwrap();
    }
    repo.create_product(&new_product(garden.id, "Trowel", 500))
        .unwrap();

    let (total, products) = repo
        .list_products(ProductListQuery::new().collection_id(kitchen.id))
        .unwrap();
    assert_eq!(total, 3);
    assert!(products.iter().all(|p| p.collection_id == kitchen.id));

    let (total, products) = repo
        .list_products(ProductListQuery::new().search("oven"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(products[0].title, "Dutch Oven");

    let (total, page) = repo
        .list_products(ProductListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 4);
    assert_eq!(page.len(), 2);
}

#[test]
fn test_product_list_ordering() {
    let test_db = common::TestDb::new("test_product_list_ordering.db");
    let repo = DieselRepository::new(test_db.pool());

    let collection = repo.create_collection(&NewCollection::new("Kitchen")).unwrap();
    for (title, price) in [("Skillet", 1000), ("Dutch Oven", 2500), ("Trivet", 500)] {
        repo.create_product(&new_product(collection.id, title, price))
            .unwrap();
    }

    let (_, by_price) = repo
        .list_products(ProductListQuery::new().order_by(ProductOrdering::PriceDesc))
        .unwrap();
    let prices: Vec<i32> = by_price.iter().map(|p| p.unit_price_cents).collect();
    assert_eq!(prices, vec![2500, 1000, 500]);

    // Title order is the default.
    let (_, by_title) = repo.list_products(ProductListQuery::new()).unwrap();
    let titles: Vec<&str> = by_title.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Dutch Oven", "Skillet", "Trivet"]);
}

#[test]
fn test_product_update_and_delete_guard() {
    let test_db = common::TestDb::new("test_product_update_and_delete_guard.db");
    let repo = DieselRepository::new(test_db.pool());

    let collection = repo.create_collection(&NewCollection::new("Kitchen")).unwrap();
    let product = repo
        .create_product(&new_product(collection.id, "Skillet", 1000))
        .unwrap();

    let updated = repo
        .update_product(
            product.id,
            &UpdateProduct {
                unit_price_cents: Some(1200),
                inventory: Some(3),
                ..UpdateProduct::default()
            },
        )
        .unwrap();
    assert_eq!(updated.unit_price_cents, 1200);
    assert_eq!(updated.price_with_tax_cents, 1320);
    assert_eq!(updated.inventory, 3);
    // Untouched fields keep their values.
    assert_eq!(updated.title, "Skillet");

    // Place an order referencing the product.
    let customer = repo.create_customer(&NewCustomer::new(1, "555-0100")).unwrap();
    let cart = repo.create_cart().unwrap();
    repo.add_cart_item(&cart.id, product.id, 1).unwrap();
    repo.checkout_cart(&cart.id, customer.id).unwrap();

    let result = services::products::delete_product(&repo, product.id);
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    assert!(repo.get_product_by_id(product.id).unwrap().is_some());
}

#[test]
fn test_add_cart_item_requires_existing_product() {
    let test_db = common::TestDb::new("test_add_cart_item_requires_existing_product.db");
    let repo = DieselRepository::new(test_db.pool());

    let cart = repo.create_cart().unwrap();

    let err = repo
        .add_cart_item(&cart.id, 999, 1)
        .expect_err("expected unknown product to be rejected");
    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[test]
fn test_reviews_attach_to_their_product() {
    let test_db = common::TestDb::new("test_reviews_attach_to_their_product.db");
    let repo = DieselRepository::new(test_db.pool());

    let collection = repo.create_collection(&NewCollection::new("Kitchen")).unwrap();
    let skillet = repo
        .create_product(&new_product(collection.id, "Skillet", 1000))
        .unwrap();
    let pot = repo
        .create_product(&new_product(collection.id, "Stock Pot", 2000))
        .unwrap();

    repo.create_review(&NewReview::new(skillet.id, "Alex", "Solid heft, even heat."))
        .unwrap();
    repo.create_review(&NewReview::new(skillet.id, "Sam", "Seasoning took a while."))
        .unwrap();

    let reviews = repo.list_reviews(skillet.id).unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(repo.list_reviews(pot.id).unwrap().is_empty());
}

#[test]
fn test_customer_profile_lifecycle() {
    let test_db = common::TestDb::new("test_customer_profile_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.get_customer_by_user_id(1).unwrap().is_none());

    let created = repo
        .create_customer(&NewCustomer::new(1, "555-0100"))
        .unwrap();
    assert_eq!(created.membership, Membership::Bronze);
    assert!(created.birth_date.is_none());

    let birth_date = chrono::NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();
    let updated = repo
        .update_customer(
            1,
            &UpdateCustomer::new()
                .phone("555-0199")
                .birth_date(Some(birth_date))
                .membership(Membership::Gold),
        )
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.phone, "555-0199");
    assert_eq!(updated.birth_date, Some(birth_date));
    assert_eq!(updated.membership, Membership::Gold);

    let err = repo
        .update_customer(2, &UpdateCustomer::new().phone("555-0000"))
        .expect_err("expected update of unknown profile to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}
