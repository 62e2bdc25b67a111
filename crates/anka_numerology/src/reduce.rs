//! Digit reduction.
//!
//! Three reductions coexist and are kept as distinct functions:
//!
//! - [`reduce_to_final`]: repeated digit sum, stopping at a master number
//!   (11, 22, 33). Used for the headline core numbers.
//! - [`reduce_to_compound`]: the same walk, but stops one step early: at the
//!   last value whose digit sum is a single digit (or at a master number
//!   reached on the way). This is the "compound" shown alongside a core
//!   number and checked for karmic debt.
//! - [`reduce_to_digit`]: repeated digit sum with no master retention. Used
//!   for Mulank and Kua, which are always a single digit.

/// Master numbers retained by [`reduce_to_final`] and [`reduce_to_compound`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `n` is a master number.
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit or a master number.
///
/// `29 -> 11` (stops), `38 -> 11`, `49 -> 13 -> 4`. Values already in 0..=9
/// or master are returned unchanged.
pub const fn reduce_to_final(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Compound form: the last value before the sum collapses to one digit.
///
/// A value whose digit sum is a master number yields that master number.
/// Values already in 0..=9 or master are returned unchanged.
///
/// `49 -> 13`, `58 -> 13`, `16 -> 16`, `19 -> 10`, `29 -> 11`, `7 -> 7`.
pub const fn reduce_to_compound(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        let sum = digit_sum(n);
        if is_master(sum) {
            return sum;
        }
        if sum <= 9 {
            return n;
        }
        n = sum;
    }
    n
}

/// Reduce fully to a single digit, ignoring master numbers.
///
/// `29 -> 11 -> 2`. Only 0 reduces to 0.
pub const fn reduce_to_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}
