// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Authentication endpoints
        crate::api::handlers::auth::sign_in,
        crate::api::handlers::auth::sign_up,
        crate::api::handlers::auth::sign_out,
        crate::api::handlers::auth::current_user,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password
    ),
    components(
        schemas(
            crate::api::types::GenerationRequest,
            crate::api::types::GenerationResponse,
            crate::api::types::AnalysisResponse,
            crate::api::types::CredentialsRequest,
            crate::api::types::AuthResponse,
            crate::api::types::CurrentUserResponse,
            crate::api::types::SuccessResponse,

            crate::core::auth::User,
            crate::models::StrengthReport,
            crate::models::StrengthLabel,
            crate::models::StrengthChecks
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength analysis endpoints"),
        (name = "Authentication", description = "Identity provider endpoints (stub backend)")
    ),
    info(
        title = "PassGen API",
        version = "0.1.0",
        description = "Password generator with heuristic strength scoring",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting PassGen API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS for browser clients
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
