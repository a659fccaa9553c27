// Core engine exports
pub mod analysis;
pub mod filters;
pub mod indicators;
pub mod letters;
pub mod matcher;
pub mod meanings;
pub mod reduce;
pub mod scoring;

pub use analysis::{analyze, classify, narrative};
pub use filters::{matches_band, profile_compatibility};
pub use indicators::{calculate_destiny, calculate_indicators, calculate_life_path, Indicators};
pub use letters::letter_value;
pub use matcher::{build_roster_view, view, RosterQuery, RosterView, DEFAULT_LIFE_PATH};
pub use meanings::{indicator_meaning, number_meaning};
pub use reduce::{digit_sum, reduce_digits, reduce_sum};
pub use scoring::{calculate_compatibility, compatibility_from_values};
