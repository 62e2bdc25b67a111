//! Context bundle for the report-generation service, and grid splicing.
//!
//! The service receives the profile and figures as structured prompt
//! context and returns a nested JSON report. Its `loshuAnalysis.grid` is
//! always overwritten with the locally computed grid.

use anka_numerology::{CoreSet, Gender, LoshuGrid};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::AnkaError;
use crate::reading::NumerologyReading;

/// Profile and figures handed to the report service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub core_numbers: CoreSet<u32>,
    pub compound_numbers: CoreSet<u32>,
    pub karmic_debt: CoreSet<Option<u32>>,
    pub mulank: u32,
    pub kua: u32,
    pub missing_numbers: Vec<u32>,
    pub overloaded_numbers: Vec<u32>,
}

impl ReportContext {
    pub fn from_reading(reading: &NumerologyReading) -> Self {
        let n = &reading.core_numbers;
        Self {
            full_name: reading.profile.full_name.clone(),
            date_of_birth: reading.profile.date_of_birth,
            gender: reading.profile.gender,
            core_numbers: n.core,
            compound_numbers: n.compound,
            karmic_debt: n.karmic_debt,
            mulank: reading.mulank,
            kua: reading.kua.value(),
            missing_numbers: reading.loshu.missing_numbers.clone(),
            overloaded_numbers: reading.loshu.overloaded_numbers.clone(),
        }
    }

    /// JSON value for embedding in a request.
    pub fn to_json(&self) -> Result<Value, AnkaError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Overwrite `loshuAnalysis.grid` in a returned report with `grid`.
///
/// `loshuAnalysis` is created when absent. Fails if the report or an
/// existing `loshuAnalysis` is not a JSON object.
pub fn splice_loshu_grid(report: &mut Value, grid: &LoshuGrid) -> Result<(), AnkaError> {
    let root = report
        .as_object_mut()
        .ok_or(AnkaError::MalformedReport("report is not a JSON object"))?;
    let analysis = root
        .entry("loshuAnalysis")
        .or_insert_with(|| Value::Object(Map::new()));
    let analysis = analysis.as_object_mut().ok_or_else(|| {
        warn!("report loshuAnalysis has unexpected shape");
        AnkaError::MalformedReport("loshuAnalysis is not a JSON object")
    })?;
    let previous = analysis.insert("grid".to_string(), serde_json::to_value(&grid.grid)?);
    debug!(replaced = previous.is_some(), "spliced loshu grid into report");
    Ok(())
}

/// Parse a report document and splice the grid in.
pub fn splice_loshu_grid_str(report: &str, grid: &LoshuGrid) -> Result<Value, AnkaError> {
    let mut value: Value = serde_json::from_str(report)?;
    splice_loshu_grid(&mut value, grid)?;
    Ok(value)
}
