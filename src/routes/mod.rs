pub mod auth;
pub mod home;
pub mod tasks;

use actix_web::web;

/// Routes that require no authentication: the welcome root, health check,
/// the dashboard page, and the signup/login pair.
pub fn public(cfg: &mut web::ServiceConfig) {
    cfg.service(home::welcome)
        .service(home::health)
        .service(home::dashboard)
        .service(auth::signup)
        .service(auth::login);
}

/// Task CRUD handlers. Register these inside a scope wrapped with
/// `AuthMiddleware`; every handler expects `AuthenticatedUser` to resolve.
pub fn protected(cfg: &mut web::ServiceConfig) {
    cfg.service(tasks::list_tasks)
        .service(tasks::create_task)
        .service(tasks::get_task)
        .service(tasks::update_task)
        .service(tasks::delete_task);
}
