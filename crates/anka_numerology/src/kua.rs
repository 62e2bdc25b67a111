//! Kua number from birth year and gender.
//!
//! 1. Sum the last two digits of the year and reduce to one digit `s`.
//! 2. Male: `10 - s` before 2000, `9 - s` from 2000. Female/Other: `5 + s`
//!    before 2000, `6 + s` from 2000.
//! 3. Reduce to one digit (no master numbers).
//! 4. 5 has no trigram: Male becomes 2, Female/Other becomes 8. 0 becomes 9.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::profile::Gender;
use crate::reduce::reduce_to_digit;

/// A Kua number in {1, 2, 3, 4, 6, 7, 8, 9}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct KuaNumber(u32);

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Element {
    Water,
    Earth,
    Wood,
    Metal,
    Fire,
}

impl Element {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Earth => "Earth",
            Self::Wood => "Wood",
            Self::Metal => "Metal",
            Self::Fire => "Fire",
        }
    }
}

/// Compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Short compass label.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

/// East group {1, 3, 4, 9} or West group {2, 6, 7, 8}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KuaGroup {
    East,
    West,
}

impl KuaGroup {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::West => "West",
        }
    }

    /// The four favourable directions shared by the group.
    pub const fn favorable_directions(self) -> [Direction; 4] {
        match self {
            Self::East => [
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::SouthEast,
            ],
            Self::West => [
                Direction::West,
                Direction::NorthWest,
                Direction::SouthWest,
                Direction::NorthEast,
            ],
        }
    }
}

impl KuaNumber {
    /// The number itself.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Element of the trigram.
    pub const fn element(self) -> Element {
        match self.0 {
            1 => Element::Water,
            2 | 8 => Element::Earth,
            3 | 4 => Element::Wood,
            6 | 7 => Element::Metal,
            _ => Element::Fire,
        }
    }

    /// East or West group.
    pub const fn group(self) -> KuaGroup {
        match self.0 {
            1 | 3 | 4 | 9 => KuaGroup::East,
            _ => KuaGroup::West,
        }
    }

    /// The single best ("success") direction.
    pub const fn success_direction(self) -> Direction {
        match self.0 {
            1 => Direction::SouthEast,
            2 => Direction::NorthEast,
            3 => Direction::South,
            4 => Direction::North,
            6 => Direction::West,
            7 => Direction::NorthWest,
            8 => Direction::SouthWest,
            _ => Direction::East,
        }
    }
}

impl Display for KuaNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kua number for a birth year.
pub fn kua_number(year: i32, gender: Gender) -> KuaNumber {
    let last_two = year.rem_euclid(100) as u32;
    let s = reduce_to_digit(last_two / 10 + last_two % 10);
    let before_2000 = year < 2000;
    let k = if gender.is_male() {
        if before_2000 { 10 - s } else { 9 - s }
    } else if before_2000 {
        5 + s
    } else {
        6 + s
    };
    let k = match reduce_to_digit(k) {
        5 if gender.is_male() => 2,
        5 => 8,
        0 => 9,
        other => other,
    };
    KuaNumber(k)
}

/// Kua number for a date of birth.
pub fn kua_from_date(date_of_birth: NaiveDate, gender: Gender) -> KuaNumber {
    kua_number(date_of_birth.year(), gender)
}
