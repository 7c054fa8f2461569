use actix_web::{HttpResponse, get, post, web};

use crate::forms::reviews::AddReviewForm;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, reviews};

#[get("/v1/products/{product_id}/reviews")]
pub async fn list_reviews(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let items = reviews::list_reviews(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(items))
}

#[post("/v1/products/{product_id}/reviews")]
pub async fn add_review(
    path: web::Path<i32>,
    form: web::Json<AddReviewForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let review = reviews::create_review(repo.get_ref(), path.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Created().json(review))
}
