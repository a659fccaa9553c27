use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{analyze, calculate_compatibility, calculate_indicators, indicator_meaning, number_meaning};
use crate::models::{
    indicator_or_zero, CalculateRequest, CalculateResponse, CompatibilityQuery, CompatibilityResponse,
    ErrorResponse, NumberMeaning, NumerologyNumber,
};

/// Configure numerology routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/numerology/calculate", web::post().to(calculate))
        .route("/numerology/meanings", web::get().to(meanings))
        .route("/compatibility", web::get().to(compatibility));
}

/// Calculate life-path and destiny numbers
///
/// POST /api/v1/numerology/calculate
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "birthDate": "YYYY-MM-DD"
/// }
/// ```
///
/// Indicators that cannot be computed (empty name or date) come back as `0`.
async fn calculate(req: web::Json<CalculateRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for calculate request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let indicators = calculate_indicators(&req.name, &req.birth_date);

    tracing::debug!(
        "Calculated indicators: lifePath={:?}, destiny={:?}",
        indicators.life_path,
        indicators.destiny
    );

    HttpResponse::Ok().json(CalculateResponse {
        life_path: indicator_or_zero(indicators.life_path),
        destiny: indicator_or_zero(indicators.destiny),
        life_path_meaning: indicator_meaning(indicators.life_path).to_string(),
        destiny_meaning: indicator_meaning(indicators.destiny).to_string(),
    })
}

/// Meanings of all numerology numbers
///
/// GET /api/v1/numerology/meanings
async fn meanings() -> impl Responder {
    let guide: Vec<NumberMeaning> = NumerologyNumber::ALL
        .into_iter()
        .map(|number| NumberMeaning {
            number,
            master: number.is_master(),
            meaning: number_meaning(number),
        })
        .collect();

    HttpResponse::Ok().json(guide)
}

/// Compatibility between two numbers
///
/// GET /api/v1/compatibility?a={number}&b={number}
async fn compatibility(query: web::Query<CompatibilityQuery>) -> impl Responder {
    let score = calculate_compatibility(query.a, query.b);

    HttpResponse::Ok().json(CompatibilityResponse {
        score,
        analysis: analyze(score),
    })
}
