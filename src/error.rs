//!
//! # Custom Error Handling
//!
//! Defines the application-wide `AppError` type. Every handler returns
//! `Result<_, AppError>`, and the `ResponseError` impl converts each variant
//! into the matching HTTP status with a JSON body, so store, validation and
//! token errors all surface consistently at the route boundary.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error` and `bcrypt::BcryptError` let handlers
//! propagate with the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All error conditions the service can report to a client.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request data (HTTP 400).
    Validation(String),
    /// A uniqueness conflict, e.g. an already-registered email (HTTP 409).
    Conflict(String),
    /// Failed authentication: bad credentials or an invalid token (HTTP 401).
    Unauthorized(String),
    /// The requested resource does not exist for this caller (HTTP 404).
    /// Also covers tasks owned by someone else, so their existence never leaks.
    NotFound(String),
    /// An error reported by the database driver (HTTP 500).
    Database(String),
    /// Any other unexpected server-side failure (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "message": msg
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "message": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "message": msg
            })),
            // The driver message is preserved alongside a generic headline.
            AppError::Database(msg) => HttpResponse::InternalServerError().json(json!({
                "message": "Database error",
                "error": msg
            })),
            AppError::Internal(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
        }
    }
}

/// Maps `sqlx::Error` onto the taxonomy: a missing row is `NotFound`, a
/// unique-constraint violation (the `users.email` index) is `Conflict`,
/// everything else is a generic database failure.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email already registered".into())
            }
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// Token decoding/verification failures are authentication failures.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

/// Hashing failures are server-side faults, never the caller's.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
