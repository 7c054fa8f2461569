use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::forms::carts::{AddCartItemForm, UpdateCartItemForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, carts};

#[post("/v1/carts")]
pub async fn create_cart(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ServiceError> {
    let cart = carts::create_cart(repo.get_ref())?;
    Ok(HttpResponse::Created().json(cart))
}

#[get("/v1/carts/{cart_id}")]
pub async fn get_cart(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let cart = carts::get_cart(repo.get_ref(), &path.into_inner())?;
    Ok(HttpResponse::Ok().json(cart))
}

#[delete("/v1/carts/{cart_id}")]
pub async fn delete_cart(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    carts::delete_cart(repo.get_ref(), &path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/v1/carts/{cart_id}/items")]
pub async fn add_cart_item(
    path: web::Path<String>,
    form: web::Json<AddCartItemForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let line = carts::add_item(repo.get_ref(), &path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Created().json(line))
}

#[patch("/v1/carts/{cart_id}/items/{item_id}")]
pub async fn update_cart_item(
    path: web::Path<(String, i32)>,
    form: web::Json<UpdateCartItemForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (cart_id, item_id) = path.into_inner();
    let line = carts::update_item(repo.get_ref(), &cart_id, item_id, form.into_inner())?;
    Ok(HttpResponse::Ok().json(line))
}

#[delete("/v1/carts/{cart_id}/items/{item_id}")]
pub async fn remove_cart_item(
    path: web::Path<(String, i32)>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (cart_id, item_id) = path.into_inner();
    carts::remove_item(repo.get_ref(), &cart_id, item_id)?;
    Ok(HttpResponse::NoContent().finish())
}
