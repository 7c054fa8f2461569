use actix_web::{HttpResponse, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::customers::{CreateProfileForm, UpdateProfileForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, customers};

#[get("/v1/customers/me")]
pub async fn get_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customer = customers::get_profile(repo.get_ref(), &user)?;
    Ok(HttpResponse::Ok().json(customer))
}

#[post("/v1/customers/me")]
pub async fn create_profile(
    user: AuthenticatedUser,
    form: web::Json<CreateProfileForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customer = customers::create_profile(repo.get_ref(), &user, form.into_inner())?;
    Ok(HttpResponse::Created().json(customer))
}

#[put("/v1/customers/me")]
pub async fn update_profile(
    user: AuthenticatedUser,
    form: web::Json<UpdateProfileForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customer = customers::update_profile(repo.get_ref(), &user, form.into_inner())?;
    Ok(HttpResponse::Ok().json(customer))
}
