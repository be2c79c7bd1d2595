use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// Extracts the authenticated caller's user id from request extensions.
///
/// Valid only on routes behind `AuthMiddleware`, which verifies the bearer
/// token and inserts the id. If the id is missing the middleware did not
/// run; responding 401 is the safe default.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub i32);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<i32>().copied() {
            Some(user_id) => ready(Ok(AuthenticatedUser(user_id))),
            None => {
                let err = AppError::Unauthorized(
                    "User id not found in request. Ensure AuthMiddleware is active.".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
