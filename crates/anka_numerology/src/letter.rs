//! Letter-value table (Chaldean substitution) and vowel set.
//!
//! Each Latin letter maps to a digit in 1..=8. No letter carries 9 in this
//! scheme. Lookups are case-insensitive; anything outside a-z has no value.

/// Letter values for `a`..=`z`, indexed by `letter - b'a'`.
pub const LETTER_VALUES: [u8; 26] = [
    1, // a
    2, // b
    3, // c
    4, // d
    5, // e
    8, // f
    3, // g
    5, // h
    1, // i
    1, // j
    2, // k
    3, // l
    4, // m
    5, // n
    7, // o
    8, // p
    1, // q
    2, // r
    3, // s
    4, // t
    6, // u
    6, // v
    6, // w
    5, // x
    1, // y
    7, // z
];

/// The fixed vowel set. `y` is always a consonant here.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Value of a letter, or `None` for non-letters.
pub fn letter_value(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(LETTER_VALUES[(lower as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Whether `c` is one of the five vowels (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_whole_alphabet() {
        for c in 'a'..='z' {
            assert!(letter_value(c).is_some(), "{c} has no value");
        }
    }

    #[test]
    fn values_in_one_to_eight() {
        for v in LETTER_VALUES {
            assert!((1..=8).contains(&v), "value {v}");
        }
    }

    #[test]
    fn case_insensitive() {
        for c in 'a'..='z' {
            assert_eq!(letter_value(c), letter_value(c.to_ascii_uppercase()));
        }
    }

    #[test]
    fn non_letters_have_no_value() {
        for c in [' ', '-', '.', '0', '9', '\'', 'é'] {
            assert_eq!(letter_value(c), None, "{c:?}");
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(letter_value('s'), Some(3));
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('m'), Some(4));
        assert_eq!(letter_value('f'), Some(8));
        assert_eq!(letter_value('o'), Some(7));
    }

    #[test]
    fn y_is_consonant() {
        assert!(!is_vowel('y'));
        assert!(is_vowel('E'));
    }
}
