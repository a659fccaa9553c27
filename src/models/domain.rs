use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when converting raw integers into domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    #[error("{0} is not a numerology number (expected 1-9, 11, 22 or 33)")]
    InvalidNumber(u64),
}

/// A fully reduced numerology number: 1 through 9 or one of the master numbers
///
/// Intermediate sums such as 10 or 12 cannot be represented. The "not computed"
/// state is modelled as `Option<NumerologyNumber>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NumerologyNumber {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Eleven,
    TwentyTwo,
    ThirtyThree,
}

impl NumerologyNumber {
    /// All numbers in guide order
    pub const ALL: [NumerologyNumber; 12] = [
        NumerologyNumber::One,
        NumerologyNumber::Two,
        NumerologyNumber::Three,
        NumerologyNumber::Four,
        NumerologyNumber::Five,
        NumerologyNumber::Six,
        NumerologyNumber::Seven,
        NumerologyNumber::Eight,
        NumerologyNumber::Nine,
        NumerologyNumber::Eleven,
        NumerologyNumber::TwentyTwo,
        NumerologyNumber::ThirtyThree,
    ];

    /// Map an already reduced value onto the enumeration
    ///
    /// Returns `None` for 0 and for any value outside the set.
    pub fn from_value(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            11 => Some(Self::Eleven),
            22 => Some(Self::TwentyTwo),
            33 => Some(Self::ThirtyThree),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Eleven => 11,
            Self::TwentyTwo => 22,
            Self::ThirtyThree => 33,
        }
    }

    /// Master numbers are exempt from further reduction
    pub fn is_master(self) -> bool {
        matches!(self, Self::Eleven | Self::TwentyTwo | Self::ThirtyThree)
    }
}

impl TryFrom<u8> for NumerologyNumber {
    type Error = NumerologyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value as u64).ok_or(NumerologyError::InvalidNumber(value as u64))
    }
}

impl From<NumerologyNumber> for u8 {
    fn from(number: NumerologyNumber) -> Self {
        number.value()
    }
}

impl fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Wire form of an optional indicator: the number, or 0 when not computed
pub fn indicator_or_zero(number: Option<NumerologyNumber>) -> u8 {
    number.map_or(0, NumerologyNumber::value)
}

/// Compatibility percentage between two numerology numbers
///
/// Only the band values 100, 85, 70, 55 and 40 can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct CompatibilityScore(u8);

impl CompatibilityScore {
    pub const IDENTICAL: Self = Self(100);
    pub const VERY_CLOSE: Self = Self(85);
    pub const CLOSE: Self = Self(70);
    pub const DISTANT: Self = Self(55);
    pub const FAR: Self = Self(40);

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl From<CompatibilityScore> for u8 {
    fn from(score: CompatibilityScore) -> Self {
        score.0
    }
}

impl fmt::Display for CompatibilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Qualitative compatibility category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisCategory {
    Identical,
    Close,
    Moderate,
    Challenging,
}

/// Fixed narrative attached to an analysis category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub category: AnalysisCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

/// Candidate profile with precomputed indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "birthDate", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "lifePath")]
    pub life_path: NumerologyNumber,
    pub destiny: NumerologyNumber,
}

/// Compatibility band used to filter a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityBand {
    #[default]
    All,
    /// 85% and above
    High,
    /// 55% to 84%
    Medium,
    /// Below 55%
    Low,
}

impl CompatibilityBand {
    pub fn contains(self, score: CompatibilityScore) -> bool {
        let percent = score.percent();
        match self {
            Self::All => true,
            Self::High => percent >= 85,
            Self::Medium => (55..85).contains(&percent),
            Self::Low => percent < 55,
        }
    }
}

/// Ordering applied to a filtered roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep input order
    #[default]
    Default,
    CompatibilityDesc,
    CompatibilityAsc,
}

/// A profile paired with its compatibility against the viewer
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProfile<'a> {
    pub profile: &'a Profile,
    pub compatibility: CompatibilityScore,
}
