use crate::domain::review::Review;
use crate::forms::reviews::AddReviewForm;
use crate::repository::{ProductReader, ReviewReader, ReviewWriter};
use crate::services::{ServiceError, ServiceResult};

fn no_product() -> ServiceError {
    ServiceError::NotFound("no product with the given identifier".to_string())
}

/// Lists reviews for a product, newest first.
pub fn list_reviews<R>(repo: &R, product_id: i32) -> ServiceResult<Vec<Review>>
where
    R: ReviewReader + ProductReader + ?Sized,
{
    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(no_product());
    }

    repo.list_reviews(product_id).map_err(ServiceError::from)
}

/// Creates a review for an existing product.
pub fn create_review<R>(repo: &R, product_id: i32, form: AddReviewForm) -> ServiceResult<Review>
where
    R: ReviewWriter + ProductReader + ?Sized,
{
    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(no_product());
    }

    let new_review = form
        .into_new_review(product_id)
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_review(&new_review).map_err(ServiceError::from)
}
