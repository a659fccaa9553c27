use crate::models::NumerologyNumber;

const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// Sum of the decimal digits of `value`
#[inline]
pub fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Reduce a raw sum to a numerology number
///
/// While the sum is above 9 and not a master number it is replaced by its own
/// digit sum. A sum of 0 means there was nothing to reduce and yields `None`.
#[inline]
pub fn reduce_sum(mut sum: u64) -> Option<NumerologyNumber> {
    while sum > 9 && !MASTER_NUMBERS.contains(&sum) {
        sum = digit_sum(sum);
    }
    NumerologyNumber::from_value(sum)
}

/// Sum a sequence of decimal digits and reduce the total
pub fn reduce_digits<I>(digits: I) -> Option<NumerologyNumber>
where
    I: IntoIterator<Item = u8>,
{
    let sum = digits.into_iter().map(u64::from).sum();
    reduce_sum(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(34), 7);
        assert_eq!(digit_sum(1996), 25);
    }

    #[test]
    fn test_empty_input_is_not_computed() {
        assert_eq!(reduce_digits(std::iter::empty()), None);
        assert_eq!(reduce_sum(0), None);
    }

    #[test]
    fn test_master_numbers_are_fixed_points() {
        assert_eq!(reduce_sum(11), Some(NumerologyNumber::Eleven));
        assert_eq!(reduce_sum(22), Some(NumerologyNumber::TwentyTwo));
        assert_eq!(reduce_sum(33), Some(NumerologyNumber::ThirtyThree));
    }

    #[test]
    fn test_reduction_stops_on_master_number() {
        // 29 -> 11, not 2
        assert_eq!(reduce_sum(29), Some(NumerologyNumber::Eleven));
        // 499 -> 22
        assert_eq!(reduce_sum(499), Some(NumerologyNumber::TwentyTwo));
    }

    #[test]
    fn test_multi_pass_reduction() {
        // 99 -> 18 -> 9
        assert_eq!(reduce_sum(99), Some(NumerologyNumber::Nine));
        // 10 -> 1
        assert_eq!(reduce_sum(10), Some(NumerologyNumber::One));
        // 44 -> 8
        assert_eq!(reduce_sum(44), Some(NumerologyNumber::Eight));
    }

    #[test]
    fn test_reduce_digits() {
        assert_eq!(reduce_digits([1, 9, 9, 6, 0, 3, 1, 5]), Some(NumerologyNumber::Seven));
        assert_eq!(reduce_digits([0, 0, 0]), None);
    }
}
