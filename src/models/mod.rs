// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    indicator_or_zero, Analysis, AnalysisCategory, CompatibilityBand, CompatibilityScore, NumerologyError,
    NumerologyNumber, Profile, ScoredProfile, SortMode,
};
pub use requests::{AnalysisQueryParams, CalculateRequest, CompatibilityQuery, RosterQueryParams};
pub use responses::{CalculateResponse, CompatibilityResponse, ErrorResponse, HealthResponse, NumberMeaning, RosterResponse};
