//! One-call computation of every figure for a birth profile.

use anka_config::Config;
use anka_numerology::{
    BirthProfile, CoreNumbers, Gender, KuaNumber, LoshuGrid, core_numbers, kua_from_date,
    loshu_grid, mulank,
};
use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::AnkaError;

/// Everything derived from one birth profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReading {
    pub profile: BirthProfile,
    /// Year the personal year was computed for.
    pub reference_year: i32,
    pub core_numbers: CoreNumbers,
    pub mulank: u32,
    pub kua: KuaNumber,
    pub loshu: LoshuGrid,
}

/// Compute a reading for an explicit reference year.
///
/// Mulank, core numbers and Kua are independent; the grid consumes all three.
/// A master life path has no cell and is dropped by the grid builder.
pub fn reading(profile: &BirthProfile, reference_year: i32) -> NumerologyReading {
    let dob = profile.date_of_birth;
    let core = core_numbers(profile, reference_year);
    let mulank = mulank(dob);
    let kua = kua_from_date(dob, profile.gender);
    let loshu = loshu_grid(dob, mulank, core.core.life_path, kua.value());
    debug!(
        life_path = core.core.life_path,
        mulank,
        kua = kua.value(),
        missing = ?loshu.missing_numbers,
        overloaded = ?loshu.overloaded_numbers,
        "computed reading"
    );
    NumerologyReading {
        profile: profile.clone(),
        reference_year,
        core_numbers: core,
        mulank,
        kua,
        loshu,
    }
}

/// Compute a reading for the current local year.
pub fn reading_now(profile: &BirthProfile) -> NumerologyReading {
    reading(profile, Local::now().year())
}

/// Parse raw birth data and compute a reading.
pub fn reading_for(
    full_name: &str,
    date_of_birth: &str,
    gender: Gender,
    reference_year: Option<i32>,
) -> Result<NumerologyReading, AnkaError> {
    let profile = BirthProfile::parse(full_name, date_of_birth, gender)?;
    Ok(match reference_year {
        Some(year) => reading(&profile, year),
        None => reading_now(&profile),
    })
}

/// Compute a reading for a saved profile (or the default one).
///
/// The reference year comes from `year_override`, then the environment,
/// then the config file, then the clock.
pub fn reading_from_config(
    config: &Config,
    profile_name: Option<&str>,
    year_override: Option<i32>,
) -> Result<NumerologyReading, AnkaError> {
    let (name, profile) = match profile_name {
        Some(name) => (name, config.profile(name)?),
        None => config.default_profile().ok_or(AnkaError::NoProfile)?,
    };
    info!(profile = name, "reading saved profile");
    let year = year_override
        .or_else(|| config.reference_year_from_env())
        .unwrap_or_else(|| Local::now().year());
    Ok(reading(profile, year))
}
