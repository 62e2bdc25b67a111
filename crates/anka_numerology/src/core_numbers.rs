//! The six headline numbers derived from a birth profile.
//!
//! | Number | Raw sum |
//! |---|---|
//! | Life path | all digits of the date of birth |
//! | Expression | every letter of the full name |
//! | Soul urge | vowels of the full name |
//! | Personality | consonants of the full name |
//! | Maturity | raw life path + raw expression |
//! | Personal year | day + month + current calendar year |
//!
//! Each raw sum is reduced twice, independently: once to its compound form
//! and once to its final form. Karmic debt is read off the compound.

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::karmic::karmic_debt;
use crate::name::{LetterFilter, decode_name};
use crate::profile::{BirthProfile, date_digits};
use crate::reduce::{reduce_to_compound, reduce_to_final};

/// The six core numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CoreNumberKind {
    LifePath,
    Expression,
    SoulUrge,
    Personality,
    Maturity,
    PersonalYear,
}

/// All six kinds in display order.
pub const ALL_CORE_NUMBER_KINDS: [CoreNumberKind; 6] = [
    CoreNumberKind::LifePath,
    CoreNumberKind::Expression,
    CoreNumberKind::SoulUrge,
    CoreNumberKind::Personality,
    CoreNumberKind::Maturity,
    CoreNumberKind::PersonalYear,
];

impl CoreNumberKind {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LifePath => "Life Path",
            Self::Expression => "Expression",
            Self::SoulUrge => "Soul Urge",
            Self::Personality => "Personality",
            Self::Maturity => "Maturity",
            Self::PersonalYear => "Personal Year",
        }
    }

    /// 0-based index (LifePath=0 .. PersonalYear=5).
    pub const fn index(self) -> u8 {
        match self {
            Self::LifePath => 0,
            Self::Expression => 1,
            Self::SoulUrge => 2,
            Self::Personality => 3,
            Self::Maturity => 4,
            Self::PersonalYear => 5,
        }
    }

    /// All six kinds in order.
    pub const fn all() -> &'static [CoreNumberKind; 6] {
        &ALL_CORE_NUMBER_KINDS
    }
}

/// One value per core number kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreSet<T> {
    pub life_path: T,
    pub expression: T,
    pub soul_urge: T,
    pub personality: T,
    pub maturity: T,
    pub personal_year: T,
}

impl<T: Copy> CoreSet<T> {
    /// Value for `kind`.
    pub fn get(&self, kind: CoreNumberKind) -> T {
        match kind {
            CoreNumberKind::LifePath => self.life_path,
            CoreNumberKind::Expression => self.expression,
            CoreNumberKind::SoulUrge => self.soul_urge,
            CoreNumberKind::Personality => self.personality,
            CoreNumberKind::Maturity => self.maturity,
            CoreNumberKind::PersonalYear => self.personal_year,
        }
    }

    /// Apply `f` to every value.
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> CoreSet<U> {
        CoreSet {
            life_path: f(self.life_path),
            expression: f(self.expression),
            soul_urge: f(self.soul_urge),
            personality: f(self.personality),
            maturity: f(self.maturity),
            personal_year: f(self.personal_year),
        }
    }
}

/// Final, compound and karmic-debt views of one core number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberDetail {
    pub kind: CoreNumberKind,
    /// Single digit or master number.
    pub value: u32,
    pub compound: u32,
    pub karmic_debt: Option<u32>,
}

/// Core numbers grouped as three parallel records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNumbers {
    /// Unreduced sums, kept for callers that display the working.
    #[serde(skip)]
    pub raw: CoreSet<u32>,
    pub core: CoreSet<u32>,
    pub compound: CoreSet<u32>,
    pub karmic_debt: CoreSet<Option<u32>>,
}

impl CoreNumbers {
    /// Build all three views from raw sums.
    pub fn from_raw(raw: CoreSet<u32>) -> Self {
        let compound = raw.map(reduce_to_compound);
        Self {
            raw,
            core: raw.map(reduce_to_final),
            compound,
            karmic_debt: compound.map(karmic_debt),
        }
    }

    /// All views of one number.
    pub fn detail(&self, kind: CoreNumberKind) -> NumberDetail {
        NumberDetail {
            kind,
            value: self.core.get(kind),
            compound: self.compound.get(kind),
            karmic_debt: self.karmic_debt.get(kind),
        }
    }

    /// Details for all six numbers in display order.
    pub fn details(&self) -> [NumberDetail; 6] {
        ALL_CORE_NUMBER_KINDS.map(|k| self.detail(k))
    }
}

/// Raw life path sum: every digit of the date of birth.
pub fn life_path_sum(profile: &BirthProfile) -> u32 {
    date_digits(profile.date_of_birth).into_iter().sum()
}

/// Raw personal year sum: day + month + `current_year`.
///
/// Years before 1 CE contribute nothing.
pub fn personal_year_sum(profile: &BirthProfile, current_year: i32) -> u32 {
    profile.day() + profile.month() + u32::try_from(current_year).unwrap_or(0)
}

/// Raw sums for all six numbers.
pub fn core_sums(profile: &BirthProfile, current_year: i32) -> CoreSet<u32> {
    let life_path = life_path_sum(profile);
    let expression = decode_name(&profile.full_name, LetterFilter::All);
    CoreSet {
        life_path,
        expression,
        soul_urge: decode_name(&profile.full_name, LetterFilter::VowelsOnly),
        personality: decode_name(&profile.full_name, LetterFilter::ConsonantsOnly),
        maturity: life_path + expression,
        personal_year: personal_year_sum(profile, current_year),
    }
}

/// Compute the core numbers with an explicit current year.
pub fn core_numbers(profile: &BirthProfile, current_year: i32) -> CoreNumbers {
    CoreNumbers::from_raw(core_sums(profile, current_year))
}

/// Compute the core numbers using the local calendar year.
pub fn core_numbers_now(profile: &BirthProfile) -> CoreNumbers {
    core_numbers(profile, Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;

    fn sam() -> BirthProfile {
        BirthProfile::parse("Sam", "1990-05-15", Gender::Male).unwrap()
    }

    #[test]
    fn kinds_sequential() {
        for (i, k) in ALL_CORE_NUMBER_KINDS.iter().enumerate() {
            assert_eq!(k.index() as usize, i);
        }
    }

    #[test]
    fn sam_raw_sums() {
        let raw = core_sums(&sam(), 2024);
        assert_eq!(raw.life_path, 30);
        assert_eq!(raw.expression, 8);
        assert_eq!(raw.soul_urge, 1);
        assert_eq!(raw.personality, 7);
        assert_eq!(raw.maturity, 38);
        assert_eq!(raw.personal_year, 15 + 5 + 2024);
    }

    #[test]
    fn sam_core() {
        let n = core_numbers(&sam(), 2024);
        assert_eq!(n.core.life_path, 3);
        assert_eq!(n.core.expression, 8);
        assert_eq!(n.core.maturity, 11);
        // 2044 -> 10 -> 1
        assert_eq!(n.core.personal_year, 1);
        assert_eq!(n.compound.life_path, 30);
        assert_eq!(n.compound.maturity, 11);
        assert_eq!(n.compound.personal_year, 10);
    }

    #[test]
    fn karmic_debt_read_from_compound() {
        let raw = CoreSet {
            expression: 16,
            soul_urge: 17,
            ..CoreSet::default()
        };
        let n = CoreNumbers::from_raw(raw);
        assert_eq!(n.karmic_debt.expression, Some(16));
        assert_eq!(n.karmic_debt.soul_urge, None);
        assert_eq!(n.core.expression, 7);
    }

    #[test]
    fn detail_matches_parallel_records() {
        let n = core_numbers(&sam(), 2024);
        for d in n.details() {
            assert_eq!(d.value, n.core.get(d.kind));
            assert_eq!(d.compound, n.compound.get(d.kind));
            assert_eq!(d.karmic_debt, n.karmic_debt.get(d.kind));
        }
    }

    #[test]
    fn empty_name_reduces_to_zero() {
        let p = BirthProfile::parse("", "2000-01-01", Gender::Other).unwrap();
        let n = core_numbers(&p, 2024);
        assert_eq!(n.core.expression, 0);
        assert_eq!(n.core.soul_urge, 0);
        assert_eq!(n.core.personality, 0);
        assert_eq!(n.core.maturity, n.core.life_path);
    }

    #[test]
    fn deterministic() {
        assert_eq!(core_numbers(&sam(), 2030), core_numbers(&sam(), 2030));
    }
}
