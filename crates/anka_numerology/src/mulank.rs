//! Mulank (root number): the birth day reduced to one digit.
//!
//! Unlike the core numbers, master numbers are not retained: day 29 gives
//! 29 -> 11 -> 2.

use chrono::{Datelike, NaiveDate};

use crate::error::NumerologyError;
use crate::reduce::reduce_to_digit;

/// Mulank of a birth date. Always in 1..=9.
pub fn mulank(date_of_birth: NaiveDate) -> u32 {
    reduce_to_digit(date_of_birth.day())
}

/// Mulank of a raw day-of-month.
pub fn mulank_from_day(day: u32) -> Result<u32, NumerologyError> {
    if !(1..=31).contains(&day) {
        return Err(NumerologyError::DayOutOfRange(day));
    }
    Ok(reduce_to_digit(day))
}
