//! Deterministic numerology calculations.
//!
//! This crate provides:
//! - A Chaldean letter-value table and name decoder
//! - Digit reduction (master-preserving, compound, and single-digit forms)
//! - Karmic debt detection
//! - The six core numbers, Mulank and Kua number
//! - Loshu grid population and plane analysis
//!
//! Every function is pure: no I/O, no shared state. The only clock read is
//! [`core_numbers_now`], which supplies the current year to the personal
//! year; [`core_numbers`] takes it explicitly.

pub mod core_numbers;
pub mod error;
pub mod karmic;
pub mod kua;
pub mod letter;
pub mod loshu;
pub mod mulank;
pub mod name;
pub mod profile;
pub mod reduce;

pub use core_numbers::{
    ALL_CORE_NUMBER_KINDS, CoreNumberKind, CoreNumbers, CoreSet, NumberDetail, core_numbers,
    core_numbers_now, core_sums, life_path_sum, personal_year_sum,
};
pub use error::NumerologyError;
pub use karmic::{KARMIC_DEBT_NUMBERS, karmic_debt};
pub use kua::{Direction, Element, KuaGroup, KuaNumber, kua_from_date, kua_number};
pub use letter::{LETTER_VALUES, VOWELS, is_vowel, letter_value};
pub use loshu::{
    ALL_PLANES, LOSHU_LAYOUT, LoshuGrid, Plane, is_plane_complete, loshu_grid, position_of,
};
pub use mulank::{mulank, mulank_from_day};
pub use name::{LetterFilter, decode_name};
pub use profile::{BirthProfile, DATE_FORMAT, Gender, date_digits, parse_date};
pub use reduce::{
    MASTER_NUMBERS, digit_sum, is_master, reduce_to_compound, reduce_to_digit, reduce_to_final,
};
