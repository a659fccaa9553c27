use serde::Serialize;
use crate::core::{letters::letter_value, reduce::{reduce_digits, reduce_sum}};
use crate::models::NumerologyNumber;

/// Life-path and destiny numbers for one person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicators {
    #[serde(rename = "lifePath")]
    pub life_path: Option<NumerologyNumber>,
    pub destiny: Option<NumerologyNumber>,
}

/// Life-path number of a birth date
///
/// Every non-digit character is dropped, so `1996-03-15`, `15.03.1996` and
/// `19960315` are equivalent. A date without digits yields `None`.
pub fn calculate_life_path(date: &str) -> Option<NumerologyNumber> {
    let digits = date
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8);
    reduce_digits(digits)
}

/// Destiny number of a name
///
/// Letters are summed case-insensitively; unmapped characters count as 0.
/// A name without mapped letters yields `None`.
pub fn calculate_destiny(name: &str) -> Option<NumerologyNumber> {
    let sum = name.chars().map(|c| u64::from(letter_value(c))).sum();
    reduce_sum(sum)
}

pub fn calculate_indicators(name: &str, birth_date: &str) -> Indicators {
    Indicators {
        life_path: calculate_life_path(birth_date),
        destiny: calculate_destiny(name),
    }
}
