use std::env;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront::db::establish_connection_pool;
use storefront::repository::DieselRepository;
use storefront::routes::carts::{
    add_cart_item, create_cart, delete_cart, get_cart, remove_cart_item, update_cart_item,
};
use storefront::routes::collections::{
    add_collection, delete_collection, edit_collection, get_collection, list_collections,
};
use storefront::routes::customers::{create_profile, get_profile, update_profile};
use storefront::routes::orders::{get_order, list_orders, place_order, update_order};
use storefront::routes::products::{
    add_product, delete_product, edit_product, get_product, list_products,
};
use storefront::routes::reviews::{add_review, list_reviews};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("store.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(list_collections)
            .service(get_collection)
            .service(add_collection)
            .service(edit_collection)
            .service(delete_collection)
            .service(list_products)
            .service(get_product)
            .service(add_product)
            .service(edit_product)
            .service(delete_product)
            .service(list_reviews)
            .service(add_review)
            .service(create_cart)
            .service(get_cart)
            .service(delete_cart)
            .service(add_cart_item)
            .service(update_cart_item)
            .service(remove_cart_item)
            .service(place_order)
            .service(list_orders)
            .service(get_order)
            .service(update_order)
            .service(get_profile)
            .service(create_profile)
            .service(update_profile)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
