use actix_web::{web, HttpResponse, Responder};

use crate::models::{PersonaResponse, SetBlindRequest, SetPersonaRequest};
use crate::routes::matches::AppState;

/// Configure the persona lifecycle routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/persona", web::get().to(get_persona))
        .route("/persona", web::post().to(set_persona))
        .route("/persona", web::delete().to(clear_persona))
        .route("/persona/switch", web::post().to(switch_persona))
        .route("/persona/blind", web::put().to(set_blind));
}

/// Current persona state
///
/// GET /persona
async fn get_persona(state: web::Data<AppState>) -> impl Responder {
    persona_snapshot(&state).await
}

/// Select a persona on entry choice
///
/// POST /persona
async fn set_persona(
    state: web::Data<AppState>,
    req: web::Json<SetPersonaRequest>,
) -> impl Responder {
    state.persona.set(req.role).await;
    tracing::info!("Persona selected: {}", req.role);

    persona_snapshot(&state).await
}

/// Toggle the persona
///
/// POST /persona/switch
async fn switch_persona(state: web::Data<AppState>) -> impl Responder {
    let role = state.persona.switch().await;
    tracing::info!("Persona switched to: {}", role);

    persona_snapshot(&state).await
}

/// Store the blind-review display flag
///
/// PUT /persona/blind
async fn set_blind(
    state: web::Data<AppState>,
    req: web::Json<SetBlindRequest>,
) -> impl Responder {
    state.persona.set_blind(req.enabled).await;

    persona_snapshot(&state).await
}

/// Explicit reset
///
/// DELETE /persona
async fn clear_persona(state: web::Data<AppState>) -> impl Responder {
    state.persona.clear().await;
    tracing::info!("Persona cleared");

    persona_snapshot(&state).await
}

async fn persona_snapshot(state: &web::Data<AppState>) -> HttpResponse {
    let role = state.persona.get().await;
    let record = state.persona.record().await;
    let blind = state.persona.blind().await;

    HttpResponse::Ok().json(PersonaResponse {
        role,
        created_at: record.map(|r| r.created_at),
        blind,
    })
}
