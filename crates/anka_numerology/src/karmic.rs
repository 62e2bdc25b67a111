//! Karmic debt detection on compound numbers.

/// Compound totals that carry a karmic debt.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Returns `Some(compound)` when it is a karmic debt total, else `None`.
///
/// Only meaningful on a compound number (see [`crate::reduce_to_compound`]);
/// a final reduced number is never a debt total.
pub const fn karmic_debt(compound: u32) -> Option<u32> {
    match compound {
        13 | 14 | 16 | 19 => Some(compound),
        _ => None,
    }
}
