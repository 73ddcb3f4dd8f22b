// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Authentication routes (stub provider; see core::auth)
    cfg.service(
        web::scope("/auth")
            .route("/signin", web::post().to(handlers::auth::sign_in))
            .route("/signup", web::post().to(handlers::auth::sign_up))
            .route("/signout", web::post().to(handlers::auth::sign_out))
            .route("/user", web::get().to(handlers::auth::current_user))
    );

    // Password generator (open; works with or without a signed-in user)
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );
}
