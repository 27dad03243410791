use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::MatchGenerator;
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, ResumeRequest, ResumeResponse};
use crate::services::{PersonaStore, UpstreamClient};

/// Which backend serves the match and resume endpoints
///
/// The demo snapshot shipped a local-mock variant and a network variant
/// as duplicated source files; here the choice is a single configuration
/// switch.
#[derive(Clone)]
pub enum MatchBackend {
    Local(MatchGenerator),
    Remote(Arc<UpstreamClient>),
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: MatchBackend,
    pub persona: Arc<PersonaStore>,
}

/// Configure the matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_matches))
        .route("/resume", web::post().to(submit_resume));
}

/// Health check endpoint
///
/// With the remote backend the upstream API is probed; a failed probe
/// reads as degraded.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = match &state.backend {
        MatchBackend::Local(_) => "healthy",
        MatchBackend::Remote(upstream) => {
            if upstream.check_health().await {
                "healthy"
            } else {
                "degraded"
            }
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match endpoint
///
/// POST /match
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "description": "string",
///   "skills": ["string"],
///   "top_k": 10,
///   "filters": { "major_field_of_studies": ["string"] }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    tracing::info!("Match query for \"{}\" (top_k: {})", req.title, req.top_k);

    match &state.backend {
        MatchBackend::Local(generator) => {
            let response = generator.generate(&req);
            tracing::info!(
                "Returning {} candidates for \"{}\"",
                response.candidates_found,
                response.job_title
            );
            HttpResponse::Ok().json(response)
        }
        MatchBackend::Remote(upstream) => match upstream.post_match(&req).await {
            Ok(response) => HttpResponse::Ok().json(response),
            Err(e) => {
                tracing::error!("Upstream match call failed: {}", e);
                HttpResponse::BadGateway().json(ErrorResponse {
                    error: "Matching failed".to_string(),
                    message: e.to_string(),
                    status_code: 502,
                })
            }
        },
    }
}

/// Resume submission endpoint
///
/// POST /resume
async fn submit_resume(
    state: web::Data<AppState>,
    req: web::Json<ResumeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for resume submission: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match &state.backend {
        MatchBackend::Local(_) => {
            let resume_id = uuid::Uuid::new_v4().to_string();
            tracing::info!("Accepted resume submission: {}", resume_id);
            HttpResponse::Ok().json(ResumeResponse {
                status: "success".to_string(),
                resume_id,
            })
        }
        MatchBackend::Remote(upstream) => match upstream.post_resume(&req).await {
            Ok(response) => HttpResponse::Ok().json(response),
            Err(e) => {
                tracing::error!("Upstream resume call failed: {}", e);
                HttpResponse::BadGateway().json(ErrorResponse {
                    error: "Resume submission failed".to_string(),
                    message: e.to_string(),
                    status_code: 502,
                })
            }
        },
    }
}
