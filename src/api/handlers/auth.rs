// src/api/handlers/auth.rs

use actix_web::{web, HttpResponse, Responder};
use log::info;

use crate::api::types::{AuthResponse, CredentialsRequest, CurrentUserResponse, SuccessResponse};
use crate::core::auth::{AuthProvider, StubAuthProvider};

/// Sign in
///
/// Attempts to sign in against the configured identity provider. The shipped
/// provider is a stub, so this always fails with a fixed error.
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 503, description = "Auth backend not configured", body = AuthResponse)
    )
)]
pub async fn sign_in(req: web::Json<CredentialsRequest>) -> impl Responder {
    let provider = StubAuthProvider::new();

    match provider.sign_in(&req.email, &req.password) {
        Ok(user) => {
            info!("User {} signed in", user.email);
            HttpResponse::Ok().json(AuthResponse {
                success: true,
                user: Some(user),
                error: None,
            })
        }
        Err(e) => HttpResponse::ServiceUnavailable().json(AuthResponse {
            success: false,
            user: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Sign up
///
/// Attempts to create an account with the configured identity provider.
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 503, description = "Auth backend not configured", body = AuthResponse)
    )
)]
pub async fn sign_up(req: web::Json<CredentialsRequest>) -> impl Responder {
    let provider = StubAuthProvider::new();

    match provider.sign_up(&req.email, &req.password) {
        Ok(user) => HttpResponse::Ok().json(AuthResponse {
            success: true,
            user: Some(user),
            error: None,
        }),
        Err(e) => HttpResponse::ServiceUnavailable().json(AuthResponse {
            success: false,
            user: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Sign out
#[utoipa::path(
    post,
    path = "/auth/signout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Signed out", body = SuccessResponse),
        (status = 503, description = "Auth backend not configured", body = SuccessResponse)
    )
)]
pub async fn sign_out() -> impl Responder {
    let provider = StubAuthProvider::new();

    match provider.sign_out() {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse {
            success: true,
            message: Some("Signed out".to_string()),
            error: None,
        }),
        Err(e) => HttpResponse::ServiceUnavailable().json(SuccessResponse {
            success: false,
            message: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Current user
///
/// Reports the current auth state. Never fails; with the stub provider there
/// is simply never a signed-in user.
#[utoipa::path(
    get,
    path = "/auth/user",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current auth state", body = CurrentUserResponse)
    )
)]
pub async fn current_user() -> impl Responder {
    let provider = StubAuthProvider::new();
    let user = provider.current_user();

    HttpResponse::Ok().json(CurrentUserResponse {
        success: true,
        authenticated: user.is_some(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use crate::api::routes::configure_routes;
    use crate::api::types::CurrentUserResponse;
    use crate::core::config::Config;

    #[actix_web::test]
    async fn sign_in_reports_backend_not_configured() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "password": "hunter2"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn current_user_is_always_absent() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/auth/user").to_request();
        let body: CurrentUserResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.success);
        assert!(!body.authenticated);
        assert!(body.user.is_none());
    }
}
