// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{AnalysisResponse, GenerationRequest, GenerationResponse};
use crate::core::config::Config;
use crate::generators::{password, strength};
use crate::models::GenerationOptions;

/// Generate a password
///
/// Generates a random password from the selected character classes and scores
/// it. No authentication is required; generation works identically with or
/// without a signed-in user.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerationResponse),
        (status = 400, description = "Invalid options", body = GenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<GenerationRequest>,
) -> impl Responder {
    // Fill in defaults for anything the caller left out
    let options = GenerationOptions {
        length: generation_req.length.unwrap_or(config.default_password_length),
        include_uppercase: generation_req.include_uppercase.unwrap_or(true),
        include_lowercase: generation_req.include_lowercase.unwrap_or(true),
        include_digits: generation_req.include_digits.unwrap_or(true),
        include_symbols: generation_req.include_symbols.unwrap_or(true),
    };

    // Validate the length against the configured bounds (the core itself only
    // requires length >= 1; the 8-64 window is the recognized UI surface)
    if options.length < config.min_password_length {
        return HttpResponse::BadRequest().json(GenerationResponse {
            success: false,
            password: None,
            strength: None,
            error: Some(format!(
                "Password length must be at least {} characters",
                config.min_password_length
            )),
        });
    }

    if options.length > config.max_password_length {
        return HttpResponse::BadRequest().json(GenerationResponse {
            success: false,
            password: None,
            strength: None,
            error: Some(format!(
                "Password length must be at most {} characters",
                config.max_password_length
            )),
        });
    }

    let generated = match password::generate_password(&options) {
        Ok(pwd) => pwd,
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(GenerationResponse {
                success: false,
                password: None,
                strength: None,
                error: Some(e.to_string()),
            });
        }
    };

    let report = strength::score_password(&generated);
    debug!(
        "Generated {}-character password, strength {}/7",
        options.length, report.score
    );

    HttpResponse::Ok().json(GenerationResponse {
        success: true,
        password: Some(generated),
        strength: Some(report),
        error: None,
    })
}

/// Analyze password strength
///
/// Scores an arbitrary password and returns the per-predicate checklist.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze (URL-encoded)")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = AnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    let password = path.into_inner();

    // URL decode the password if needed
    let decoded_password = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.to_string(),
        Err(_) => password.clone(),
    };

    let report = strength::score_password(&decoded_password);
    let checks = strength::run_checks(&decoded_password);

    HttpResponse::Ok().json(AnalysisResponse {
        success: true,
        strength: Some(report),
        checks: Some(checks),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use crate::api::routes::configure_routes;
    use crate::api::types::{AnalysisResponse, GenerationResponse};
    use crate::core::config::Config;
    use crate::models::StrengthLabel;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Config::default()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generate_returns_password_of_requested_length() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({ "length": 24 }))
            .to_request();
        let body: GenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.success);
        assert_eq!(body.password.unwrap().chars().count(), 24);
        assert!(body.strength.is_some());
    }

    #[actix_web::test]
    async fn generate_rejects_empty_class_selection() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({
                "include_uppercase": false,
                "include_lowercase": false,
                "include_digits": false,
                "include_symbols": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn generate_rejects_out_of_range_length() {
        let app = test_app!();

        for length in [4, 65] {
            let req = test::TestRequest::post()
                .uri("/generator/password")
                .set_json(serde_json::json!({ "length": length }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn analysis_scores_url_encoded_password() {
        let app = test_app!();

        // "Abc12345!@#$" with '#' and '$' percent-encoded
        let req = test::TestRequest::get()
            .uri("/generator/analysis/Abc12345!%40%23%24")
            .to_request();
        let body: AnalysisResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.success);
        let report = body.strength.unwrap();
        assert_eq!(report.score, 6);
        assert_eq!(report.label, StrengthLabel::Good);
        assert!(!body.checks.unwrap().length_16);
    }
}
