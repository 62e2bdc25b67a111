//! Property-based tests for reduction, Kua and Loshu invariants.

use anka_numerology::{
    BirthProfile, Gender, LetterFilter, LoshuGrid, core_numbers, decode_name, digit_sum,
    is_master, karmic_debt, kua_number, mulank_from_day, reduce_to_compound, reduce_to_digit,
    reduce_to_final,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)]
}

proptest! {
    /// reduce_to_final is idempotent.
    #[test]
    fn prop_final_idempotent(n: u32) {
        let once = reduce_to_final(n);
        prop_assert_eq!(reduce_to_final(once), once);
    }

    /// Final output is a single digit or a master number.
    #[test]
    fn prop_final_range(n: u32) {
        let r = reduce_to_final(n);
        prop_assert!(r <= 9 || is_master(r), "{} -> {}", n, r);
    }

    /// Compound sits on the final reduction path.
    #[test]
    fn prop_compound_then_final(n: u32) {
        prop_assert_eq!(reduce_to_final(reduce_to_compound(n)), reduce_to_final(n));
    }

    /// Compound is one digit-sum step from a single digit, unless it is master.
    #[test]
    fn prop_compound_one_step_from_digit(n: u32) {
        let c = reduce_to_compound(n);
        prop_assert!(
            c <= 9 || is_master(c) || digit_sum(c) <= 9,
            "{} -> {}", n, c
        );
    }

    /// Single-digit reduction never yields a master number.
    #[test]
    fn prop_digit_single(n in 1u32..) {
        let r = reduce_to_digit(n);
        prop_assert!((1..=9).contains(&r));
    }

    /// Mulank is a single digit for every valid day.
    #[test]
    fn prop_mulank_single(day in 1u32..=31) {
        let m = mulank_from_day(day).unwrap();
        prop_assert!((1..=9).contains(&m));
    }

    /// Kua is never 5 and never 0.
    #[test]
    fn prop_kua_never_five(year in -5000i32..5000, g in gender()) {
        let k = kua_number(year, g).value();
        prop_assert!(k != 5 && (1..=9).contains(&k), "{} {:?} -> {}", year, g, k);
    }

    /// Karmic debt is only ever the compound itself.
    #[test]
    fn prop_karmic_debt_identity(n: u32) {
        if let Some(d) = karmic_debt(n) {
            prop_assert_eq!(d, n);
        }
    }

    /// Vowel and consonant sums partition the full sum.
    #[test]
    fn prop_name_partition(name in "[A-Za-z .'-]{0,40}") {
        prop_assert_eq!(
            decode_name(&name, LetterFilter::All),
            decode_name(&name, LetterFilter::VowelsOnly)
                + decode_name(&name, LetterFilter::ConsonantsOnly)
        );
    }

    /// Every digit 1..=9 is either missing or present; overloaded implies present.
    #[test]
    fn prop_loshu_partition(digits in proptest::collection::vec(0u32..12, 0..20)) {
        let g = LoshuGrid::from_digits(digits.iter().copied());
        let present = g.present_numbers();
        for d in 1..=9u32 {
            prop_assert!(present.contains(&d) != g.missing_numbers.contains(&d));
            if g.overloaded_numbers.contains(&d) {
                prop_assert!(g.count(d) >= 2);
            }
        }
        let total: u32 = (1..=9).map(|d| g.count(d)).sum();
        let expected = digits.iter().filter(|d| (1..=9).contains(*d)).count() as u32;
        prop_assert_eq!(total, expected);
    }

    /// Identical input, identical output.
    #[test]
    fn prop_core_deterministic(
        name in "[A-Za-z ]{0,30}",
        days in 0i64..60_000,
        year in 1900i32..2100,
        g in gender(),
    ) {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let dob = base + chrono::Duration::days(days);
        let p = BirthProfile::new(name, dob, g);
        prop_assert_eq!(core_numbers(&p, year), core_numbers(&p, year));
    }
}
