//! Convenience wrapper for the anka numerology engine.
//!
//! Computes every figure for a birth profile in one call, packages the
//! figures as context for a report-generation service, splices the
//! authoritative Loshu grid back into the service's report, and offers a
//! caller-owned interpretation cache.
//!
//! # Quick start
//!
//! ```rust
//! use anka_rs::*;
//!
//! let r = reading_for("John Smith", "1985-07-24", Gender::Male, Some(2025)).unwrap();
//! assert_eq!(r.core_numbers.core.life_path, 9);
//! assert_eq!(r.loshu.missing_numbers, vec![3]);
//!
//! let context = ReportContext::from_reading(&r).to_json().unwrap();
//! assert_eq!(context["kua"], 6);
//! ```

pub mod cache;
pub mod error;
pub mod reading;
pub mod report;

pub use cache::{InterpretationCache, NumberVariant};
pub use error::AnkaError;
pub use reading::{NumerologyReading, reading, reading_for, reading_from_config, reading_now};
pub use report::{ReportContext, splice_loshu_grid, splice_loshu_grid_str};

// Re-export core types so callers don't need to depend on anka_numerology directly.
pub use anka_config::{Config, OutputFormat};
pub use anka_numerology::{
    ALL_CORE_NUMBER_KINDS, ALL_PLANES, BirthProfile, CoreNumberKind, CoreNumbers, CoreSet,
    Gender, KuaNumber, LetterFilter, LoshuGrid, NumberDetail, Plane,
};
