use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::services::products::ProductsQuery;
use crate::services::{ServiceError, products};

#[get("/v1/products")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = products::list_products(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/v1/products/{product_id}")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let product = products::get_product(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(product))
}

#[post("/v1/products")]
pub async fn add_product(
    form: web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let product = products::create_product(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(product))
}

#[patch("/v1/products/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    form: web::Json<EditProductForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let product = products::update_product(repo.get_ref(), path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(product))
}

#[delete("/v1/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    products::delete_product(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
