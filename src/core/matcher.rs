use std::cmp::Reverse;
use crate::core::filters::{matches_band, profile_compatibility};
use crate::models::{CompatibilityBand, NumerologyNumber, Profile, ScoredProfile, SortMode};

/// Life path used for a viewer who has not calculated their own yet
pub const DEFAULT_LIFE_PATH: NumerologyNumber = NumerologyNumber::Five;

/// Viewer-side selection applied to a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterQuery {
    /// `None` falls back to [`DEFAULT_LIFE_PATH`]
    pub my_life_path: Option<NumerologyNumber>,
    pub band: CompatibilityBand,
    pub sort: SortMode,
}

impl RosterQuery {
    pub fn new(my_life_path: Option<NumerologyNumber>, band: CompatibilityBand, sort: SortMode) -> Self {
        Self { my_life_path, band, sort }
    }

    pub fn effective_life_path(&self) -> NumerologyNumber {
        self.my_life_path.unwrap_or(DEFAULT_LIFE_PATH)
    }
}

/// Filtered and ordered projection of a roster
#[derive(Debug, Clone)]
pub struct RosterView<'a> {
    pub my_life_path: NumerologyNumber,
    pub entries: Vec<ScoredProfile<'a>>,
    pub total_candidates: usize,
}

impl<'a> RosterView<'a> {
    pub fn profiles(&self) -> Vec<&'a Profile> {
        self.entries.iter().map(|entry| entry.profile).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the visible roster for a viewer
///
/// # Pipeline
/// 1. Resolve the viewer's life path (fallback 5)
/// 2. Score every profile and keep those in the selected band
/// 3. Order by the selected sort mode; sorting is stable so ties keep input order
///
/// Nothing is cached: every call recomputes from `profiles`.
pub fn build_roster_view<'a>(profiles: &'a [Profile], query: &RosterQuery) -> RosterView<'a> {
    let my_life_path = query.effective_life_path();

    let mut entries: Vec<ScoredProfile<'a>> = profiles
        .iter()
        .filter(|profile| matches_band(my_life_path, profile, query.band))
        .map(|profile| ScoredProfile {
            profile,
            compatibility: profile_compatibility(my_life_path, profile),
        })
        .collect();

    match query.sort {
        SortMode::Default => {}
        SortMode::CompatibilityDesc => entries.sort_by_key(|entry| Reverse(entry.compatibility)),
        SortMode::CompatibilityAsc => entries.sort_by_key(|entry| entry.compatibility),
    }

    RosterView {
        my_life_path,
        entries,
        total_candidates: profiles.len(),
    }
}

/// Visible profiles, in display order
pub fn view<'a>(
    profiles: &'a [Profile],
    my_life_path: Option<NumerologyNumber>,
    band: CompatibilityBand,
    sort: SortMode,
) -> Vec<&'a Profile> {
    build_roster_view(profiles, &RosterQuery::new(my_life_path, band, sort)).profiles()
}
