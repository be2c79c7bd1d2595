use actix_web::{get, http::header::ContentType, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Root route, also the simplest liveness probe.
#[get("/")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().body("Welcome to the Task Manager API")
}

/// Health check endpoint with a timestamp, for anything that wants JSON.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}

/// The dashboard client, embedded at build time and served as a single
/// page. It talks to this same server and keeps the bearer token in
/// localStorage.
#[get("/app")]
pub async fn dashboard() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/dashboard.html"))
}
