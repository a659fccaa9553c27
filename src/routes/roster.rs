use actix_web::{web, HttpResponse, Responder};
use crate::core::{analyze, build_roster_view, profile_compatibility, RosterQuery, DEFAULT_LIFE_PATH};
use crate::models::{AnalysisQueryParams, CompatibilityResponse, ErrorResponse, RosterQueryParams, RosterResponse};
use crate::routes::AppState;

/// Configure roster routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/roster", web::get().to(get_roster))
        .route("/roster/{id}/analysis", web::get().to(get_profile_analysis));
}

/// Visible roster for a viewer
///
/// GET /api/v1/roster?lifePath={number}&band={all|high|medium|low}&sort={default|compatibility-desc|compatibility-asc}
///
/// All parameters are optional. A missing `lifePath` falls back to 5.
async fn get_roster(
    state: web::Data<AppState>,
    params: web::Query<RosterQueryParams>,
) -> impl Responder {
    let query = RosterQuery::new(params.life_path, params.band, params.sort);
    let view = build_roster_view(state.roster.profiles(), &query);

    tracing::info!(
        "Roster view: lifePath={}, band={:?}, sort={:?}, {} of {} profiles",
        view.my_life_path,
        query.band,
        query.sort,
        view.entries.len(),
        view.total_candidates
    );

    let response = RosterResponse {
        my_life_path: view.my_life_path,
        total_results: view.entries.len(),
        total_profiles: view.total_candidates,
        profiles: view.entries,
    };

    HttpResponse::Ok().json(response)
}

/// Compatibility analysis between the viewer and one profile
///
/// GET /api/v1/roster/{id}/analysis?lifePath={number}
async fn get_profile_analysis(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<AnalysisQueryParams>,
) -> impl Responder {
    let id = path.into_inner();

    let Some(profile) = state.roster.get(&id) else {
        tracing::info!("Analysis requested for unknown profile {}", id);
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No profile with id {}", id),
            status_code: 404,
        });
    };

    let my_life_path = params.life_path.unwrap_or(DEFAULT_LIFE_PATH);
    let score = profile_compatibility(my_life_path, profile);

    HttpResponse::Ok().json(CompatibilityResponse {
        score,
        analysis: analyze(score),
    })
}
