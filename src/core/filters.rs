use crate::core::scoring::calculate_compatibility;
use crate::models::{CompatibilityBand, CompatibilityScore, NumerologyNumber, Profile};

/// Score a profile against the viewer's life path
#[inline]
pub fn profile_compatibility(my_life_path: NumerologyNumber, profile: &Profile) -> CompatibilityScore {
    calculate_compatibility(my_life_path, profile.life_path)
}

/// Check if a profile falls within the selected compatibility band
#[inline]
pub fn matches_band(
    my_life_path: NumerologyNumber,
    profile: &Profile,
    band: CompatibilityBand,
) -> bool {
    band.contains(profile_compatibility(my_life_path, profile))
}
