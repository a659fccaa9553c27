use serde::{Deserialize, Serialize};
use crate::models::domain::{Analysis, CompatibilityScore, NumerologyNumber, ScoredProfile};

/// Response for the calculate endpoint
///
/// Indicators are `0` when they could not be computed from the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub life_path: u8,
    pub destiny: u8,
    pub life_path_meaning: String,
    pub destiny_meaning: String,
}

/// One entry of the numerology guide
#[derive(Debug, Clone, Serialize)]
pub struct NumberMeaning {
    pub number: NumerologyNumber,
    pub master: bool,
    pub meaning: &'static str,
}

/// Response for the compatibility endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResponse {
    pub score: CompatibilityScore,
    pub analysis: &'static Analysis,
}

/// Response for the roster endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse<'a> {
    pub my_life_path: NumerologyNumber,
    pub profiles: Vec<ScoredProfile<'a>>,
    pub total_results: usize,
    pub total_profiles: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profiles_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
