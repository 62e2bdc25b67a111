//! Birth profile: the single input every calculation derives from.

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// ISO calendar date format accepted for dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Declared gender. Only `Male` selects the male Kua coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Whether this gender takes the male branch of the Kua formula.
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that is not recognisably male or female is `Other`.
impl FromStr for Gender {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        })
    }
}

/// Name, date of birth and gender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthProfile {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
}

impl BirthProfile {
    pub fn new(full_name: impl Into<String>, date_of_birth: NaiveDate, gender: Gender) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth,
            gender,
        }
    }

    /// Build a profile from a `YYYY-MM-DD` date string.
    pub fn parse(
        full_name: impl Into<String>,
        date_of_birth: &str,
        gender: Gender,
    ) -> Result<Self, NumerologyError> {
        Ok(Self::new(full_name, parse_date(date_of_birth)?, gender))
    }

    /// Day of month (1..=31).
    pub fn day(&self) -> u32 {
        self.date_of_birth.day()
    }

    /// Month (1..=12).
    pub fn month(&self) -> u32 {
        self.date_of_birth.month()
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.date_of_birth.year()
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, NumerologyError> {
    let trimmed = input.trim();
    let invalid = |reason: String| NumerologyError::InvalidDateFormat {
        input: input.to_string(),
        reason,
    };
    // chrono accepts unpadded fields; require the fixed-width ISO shape.
    let shape_ok = trimmed.len() == 10
        && trimmed
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if !shape_ok {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}

/// Decimal digits of a date as written `YYYY-MM-DD`, separators dropped.
///
/// `1990-05-15` gives `[1, 9, 9, 0, 0, 5, 1, 5]`.
pub fn date_digits(date: NaiveDate) -> Vec<u32> {
    date.format(DATE_FORMAT)
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let p = BirthProfile::parse("Sam", "1990-05-15", Gender::Male).unwrap();
        assert_eq!(p.year(), 1990);
        assert_eq!(p.month(), 5);
        assert_eq!(p.day(), 15);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(parse_date(" 2001-01-09 ").is_ok());
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "1990-5-15", "15/05/1990", "1990-13-01", "1990-02-30", "abcd-ef-gh"] {
            let err = parse_date(bad).unwrap_err();
            assert!(
                matches!(err, NumerologyError::InvalidDateFormat { .. }),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn digits_of_date() {
        let d = parse_date("1990-05-15").unwrap();
        assert_eq!(date_digits(d), vec![1, 9, 9, 0, 0, 5, 1, 5]);
    }

    #[test]
    fn gender_from_str() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("nonbinary".parse::<Gender>().unwrap(), Gender::Other);
        assert_eq!("".parse::<Gender>().unwrap(), Gender::Other);
    }
}
