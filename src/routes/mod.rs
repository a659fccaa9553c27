// Route exports
pub mod numerology;
pub mod roster;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use crate::models::HealthResponse;
use crate::services::RosterStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
}

impl AppState {
    pub fn new(roster: RosterStore) -> Self {
        Self { roster: Arc::new(roster) }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(numerology::configure)
            .configure(roster::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let profiles_loaded = state.roster.len();
    let status = if profiles_loaded > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles_loaded,
        timestamp: chrono::Utc::now(),
    })
}
