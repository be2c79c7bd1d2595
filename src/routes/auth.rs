use crate::{
    auth::{generate_token, hash_password, verify_password, LoginRequest, LoginResponse, SignupRequest},
    config::Config,
    error::AppError,
    models::{Credentials, User},
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user.
///
/// Hashes the password and inserts the account. The `users.email` unique
/// constraint is the duplicate check: a violation surfaces as 409. No token
/// is issued here; the caller logs in separately.
#[post("/signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    signup_data.validate()?;

    let password_hash = hash_password(&signup_data.password)?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)
         RETURNING id, name, email, created_at",
    )
    .bind(&signup_data.name)
    .bind(&signup_data.email)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await?;

    log::info!("created user {} ({})", user.id, user.email);

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully"
    })))
}

/// Authenticate a user and issue a bearer token.
///
/// An unknown email is 404, a wrong password 401. On success the response
/// carries an HS256 token with a one-hour lifetime.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user = sqlx::query_as::<_, Credentials>(
        "SELECT id, password_hash FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    let user = user.ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let token = generate_token(user.id, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
