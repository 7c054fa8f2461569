use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::collections::{AddCollectionForm, EditCollectionForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, collections};

#[get("/v1/collections")]
pub async fn list_collections(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let items = collections::list_collections(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/v1/collections/{collection_id}")]
pub async fn get_collection(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let collection = collections::get_collection(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(collection))
}

#[post("/v1/collections")]
pub async fn add_collection(
    form: web::Json<AddCollectionForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let collection = collections::create_collection(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Created().json(collection))
}

#[put("/v1/collections/{collection_id}")]
pub async fn edit_collection(
    path: web::Path<i32>,
    form: web::Json<EditCollectionForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let collection =
        collections::update_collection(repo.get_ref(), path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(collection))
}

#[delete("/v1/collections/{collection_id}")]
pub async fn delete_collection(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    collections::delete_collection(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
