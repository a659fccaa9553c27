use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::{CompatibilityBand, NumerologyNumber, SortMode};

/// Request to calculate life-path and destiny numbers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateRequest {
    #[validate(length(max = 256))]
    #[serde(default)]
    pub name: String,
    #[validate(length(max = 32))]
    #[serde(default, alias = "birth_date", rename = "birthDate")]
    pub birth_date: String,
}

/// Query for pairwise compatibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompatibilityQuery {
    pub a: NumerologyNumber,
    pub b: NumerologyNumber,
}

/// Query for the visible roster
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RosterQueryParams {
    #[serde(default, alias = "life_path", rename = "lifePath", deserialize_with = "deserialize_life_path")]
    pub life_path: Option<NumerologyNumber>,
    #[serde(default)]
    pub band: CompatibilityBand,
    #[serde(default)]
    pub sort: SortMode,
}

/// Query for a single profile analysis
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisQueryParams {
    #[serde(default, alias = "life_path", rename = "lifePath", deserialize_with = "deserialize_life_path")]
    pub life_path: Option<NumerologyNumber>,
}

/// Viewer life path from a query string
///
/// `0` is the wire form of "not computed" and maps to `None`, like an absent
/// parameter. Any other value outside the numerology set is rejected.
fn deserialize_life_path<'de, D>(deserializer: D) -> Result<Option<NumerologyNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u8>::deserialize(deserializer)? {
        None | Some(0) => Ok(None),
        Some(value) => NumerologyNumber::try_from(value).map(Some).map_err(D::Error::custom),
    }
}
