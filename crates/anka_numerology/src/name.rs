//! Name decoder: sums letter values over a name.

use serde::Serialize;

use crate::letter::{is_vowel, letter_value};

/// Which letters of a name contribute to the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LetterFilter {
    /// Every letter (expression / destiny number).
    All,
    /// Vowels only (soul urge number).
    VowelsOnly,
    /// Consonants only (personality number).
    ConsonantsOnly,
}

impl LetterFilter {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::VowelsOnly => "VowelsOnly",
            Self::ConsonantsOnly => "ConsonantsOnly",
        }
    }

    fn admits(self, c: char) -> bool {
        match self {
            Self::All => true,
            Self::VowelsOnly => is_vowel(c),
            Self::ConsonantsOnly => !is_vowel(c),
        }
    }
}

/// Raw (unreduced) letter sum of `name` under `filter`.
///
/// Spaces, punctuation, digits and non-Latin letters carry no value. A name
/// with no scoring letters sums to 0.
pub fn decode_name(name: &str, filter: LetterFilter) -> u32 {
    name.chars()
        .filter(|&c| filter.admits(c))
        .filter_map(letter_value)
        .map(u32::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sam_all() {
        // s=3, a=1, m=4
        assert_eq!(decode_name("SAM", LetterFilter::All), 8);
    }

    #[test]
    fn sam_vowels_and_consonants() {
        assert_eq!(decode_name("Sam", LetterFilter::VowelsOnly), 1);
        assert_eq!(decode_name("Sam", LetterFilter::ConsonantsOnly), 7);
    }

    #[test]
    fn vowels_plus_consonants_is_all() {
        let name = "Maria Elena O'Brien-Smith";
        let all = decode_name(name, LetterFilter::All);
        let v = decode_name(name, LetterFilter::VowelsOnly);
        let c = decode_name(name, LetterFilter::ConsonantsOnly);
        assert_eq!(all, v + c);
    }

    #[test]
    fn separators_ignored() {
        assert_eq!(
            decode_name("s-a m.", LetterFilter::All),
            decode_name("sam", LetterFilter::All)
        );
    }

    #[test]
    fn digits_ignored() {
        assert_eq!(decode_name("sam 42", LetterFilter::All), 8);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(decode_name("", LetterFilter::All), 0);
        assert_eq!(decode_name("  ", LetterFilter::All), 0);
        assert_eq!(decode_name("xyz", LetterFilter::VowelsOnly), 0);
    }
}
