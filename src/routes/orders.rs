use actix_web::{HttpResponse, get, patch, post, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::orders::{CheckoutForm, UpdateOrderForm};
use crate::repository::DieselRepository;
use crate::services::orders::OrdersQuery;
use crate::services::{ServiceError, orders};

/// Checkout: converts the cart named in the body into a new order
/// owned by the authenticated customer.
#[post("/v1/orders")]
pub async fn place_order(
    user: AuthenticatedUser,
    form: web::Json<CheckoutForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let order = orders::checkout(repo.get_ref(), &user, form.into_inner())?;
    Ok(HttpResponse::Created().json(order))
}

#[get("/v1/orders")]
pub async fn list_orders(
    user: AuthenticatedUser,
    params: web::Query<OrdersQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = orders::list_orders(repo.get_ref(), &user, params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/v1/orders/{order_id}")]
pub async fn get_order(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let order = orders::get_order(repo.get_ref(), &user, path.into_inner())?;
    Ok(HttpResponse::Ok().json(order))
}

#[patch("/v1/orders/{order_id}")]
pub async fn update_order(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    form: web::Json<UpdateOrderForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let order =
        orders::set_payment_status(repo.get_ref(), &user, path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(order))
}
