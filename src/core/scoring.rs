use crate::models::{CompatibilityScore, NumerologyNumber};

/// Calculate the compatibility (a percentage) between two numerology numbers
///
/// Banding over the absolute difference of the face values:
/// | diff | score |
/// |------|-------|
/// | 0    | 100   |
/// | 1-2  | 85    |
/// | 3-4  | 70    |
/// | 5-6  | 55    |
/// | 7+   | 40    |
///
/// Master numbers take part with their face value, so 11 and 9 differ by 2.
#[inline]
pub fn calculate_compatibility(a: NumerologyNumber, b: NumerologyNumber) -> CompatibilityScore {
    compatibility_from_values(a.value() as i64, b.value() as i64)
}

/// Same banding as [`calculate_compatibility`] over arbitrary integers
#[inline]
pub fn compatibility_from_values(a: i64, b: i64) -> CompatibilityScore {
    compatibility_for_difference(a.abs_diff(b))
}

#[inline]
fn compatibility_for_difference(diff: u64) -> CompatibilityScore {
    match diff {
        0 => CompatibilityScore::IDENTICAL,
        1..=2 => CompatibilityScore::VERY_CLOSE,
        3..=4 => CompatibilityScore::CLOSE,
        5..=6 => CompatibilityScore::DISTANT,
        _ => CompatibilityScore::FAR,
    }
}
