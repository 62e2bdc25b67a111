//! Error types for numerology calculations.

use thiserror::Error;

/// Errors from numerology input validation.
///
/// The calculators are total over their typed inputs. These errors only
/// arise at the string and raw-integer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Date-of-birth string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDateFormat { input: String, reason: String },
    /// Day-of-month outside 1..=31.
    #[error("day of month out of range: {0} (expected 1-31)")]
    DayOutOfRange(u32),
}
