use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

/// Identity claims stored in the session cookie by the auth service.
///
/// Handlers that declare an `AuthenticatedUser` argument receive `401
/// Unauthorized` automatically when no valid identity is attached to the
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// External user identifier the customer profile is keyed on.
    pub user_id: i32,
    pub email: String,
    pub name: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = Identity::from_request(req, payload)
            .into_inner()
            .and_then(|identity| identity.id().map_err(ErrorUnauthorized))
            .and_then(|claims| {
                serde_json::from_str::<AuthenticatedUser>(&claims).map_err(ErrorUnauthorized)
            });

        ready(result)
    }
}
