use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime. A login is good for one hour; there is no refresh.
const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Claims carried by a bearer token. The user's id is the only
/// identity claim; `iat`/`exp` bound its validity window.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub iat: usize,
    pub exp: usize,
}

/// Issues a signed HS256 token for `user_id`, valid for one hour.
///
/// The signing secret is passed in from configuration; this module never
/// reads the environment.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::seconds(TOKEN_TTL_SECONDS))
        .expect("valid timestamp");

    let claims = Claims {
        user_id,
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a token's signature and expiry and returns its claims.
///
/// Any failure — malformed token, wrong secret, expired signature — is an
/// `Unauthorized` error; the caller cannot tell the cases apart.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
