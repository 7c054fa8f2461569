use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod carts;
pub mod collections;
pub mod customers;
pub mod orders;
pub mod products;
pub mod reviews;

/// Result type returned by all service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Application-level errors, mapped one-to-one onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller is not authenticated.
    #[error("unauthorized")]
    Unauthorized,
    /// The addressed record does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// The request payload failed validation (400).
    #[error("{0}")]
    Validation(String),
    /// The operation would violate a referential guard rail (409).
    #[error("{0}")]
    Conflict(String),
    /// Data the request depends on is missing or inconsistent on the
    /// server side. Not a user input error.
    #[error("{0}")]
    Internal(String),
    /// Storage failure propagated from the repository.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound("record not found".to_string()),
            RepositoryError::Validation(message) => Self::Validation(message),
            other => Self::Repository(other),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Internal(message) => {
                log::error!("internal error: {message}");
                HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
            }
            Self::Repository(err) => {
                log::error!("storage failure: {err}");
                HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
            }
            other => {
                HttpResponse::build(other.status_code()).json(json!({ "error": other.to_string() }))
            }
        }
    }
}
