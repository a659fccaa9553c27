/// Numerology value of a single character
///
/// Cyrillic and Latin letters map to 1-9 cyclically in alphabetical order.
/// Upper and lower case map identically. Anything else (spaces, digits,
/// punctuation, ъ and ь) is worth 0.
#[inline]
pub fn letter_value(c: char) -> u8 {
    if c.is_lowercase() {
        return lowercase_value(c);
    }
    c.to_lowercase().map(lowercase_value).sum()
}

fn lowercase_value(c: char) -> u8 {
    match c {
        // Cyrillic
        'а' => 1,
        'б' => 2,
        'в' => 3,
        'г' => 4,
        'д' => 5,
        'е' => 6,
        'ё' => 6,
        'ж' => 7,
        'з' => 8,
        'и' => 9,
        'й' => 1,
        'к' => 2,
        'л' => 3,
        'м' => 4,
        'н' => 5,
        'о' => 6,
        'п' => 7,
        'р' => 8,
        'с' => 9,
        'т' => 1,
        'у' => 2,
        'ф' => 3,
        'х' => 4,
        'ц' => 5,
        'ч' => 6,
        'ш' => 7,
        'щ' => 8,
        'ы' => 9,
        'э' => 1,
        'ю' => 2,
        'я' => 3,

        // Latin
        'a' => 1,
        'b' => 2,
        'c' => 3,
        'd' => 4,
        'e' => 5,
        'f' => 6,
        'g' => 7,
        'h' => 8,
        'i' => 9,
        'j' => 1,
        'k' => 2,
        'l' => 3,
        'm' => 4,
        'n' => 5,
        'o' => 6,
        'p' => 7,
        'q' => 8,
        'r' => 9,
        's' => 1,
        't' => 2,
        'u' => 3,
        'v' => 4,
        'w' => 5,
        'x' => 6,
        'y' => 7,
        'z' => 8,

        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_cycle() {
        let values: Vec<u8> = ('a'..='z').map(letter_value).collect();
        assert_eq!(
            values,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_cyrillic_values() {
        assert_eq!(letter_value('а'), 1);
        assert_eq!(letter_value('и'), 9);
        assert_eq!(letter_value('й'), 1);
        assert_eq!(letter_value('с'), 9);
        assert_eq!(letter_value('ы'), 9);
        assert_eq!(letter_value('я'), 3);
    }

    #[test]
    fn test_yo_matches_ye() {
        assert_eq!(letter_value('ё'), letter_value('е'));
        assert_eq!(letter_value('Ё'), 6);
    }

    #[test]
    fn test_case_insensitive() {
        for (upper, lower) in "ABCXYZАБВЮЯ".chars().zip("abcxyzабвюя".chars()) {
            assert_eq!(letter_value(upper), letter_value(lower), "{} vs {}", upper, lower);
        }
    }

    #[test]
    fn test_unmapped_characters() {
        for c in [' ', '-', '7', '!', 'ъ', 'ь', 'Ъ', 'ß', '😀'] {
            assert_eq!(letter_value(c), 0, "{:?} should be unmapped", c);
        }
    }
}
