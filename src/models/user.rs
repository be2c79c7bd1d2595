use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A user account row. The password hash never leaves the database layer;
/// this struct is what signup returns and what logs refer to.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The subset of a user row needed to check a login attempt.
#[derive(Debug, FromRow)]
pub struct Credentials {
    pub id: i32,
    pub password_hash: String,
}
