//! Experiment reports
//!
//! The results of [`run_experiments`](crate::run_experiments), ready to be
//! charted by an external tool. Each report section is written to its own
//! JSON document.

use cbox_core::emissions::{EmissionsKind, Scenario};
use cbox_core::errors::{CBoxError, CBoxResult};
use cbox_core::timeseries::{FloatValue, Timeseries};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Modelled and observed atmospheric CO2 over the historical period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalComparison {
    /// Emissions that forced the run
    pub kind: EmissionsKind,
    /// unit: ppm
    pub modelled: Timeseries,
    /// unit: ppm
    pub observed: Timeseries,
    /// Root-mean-square difference over the years present in both series,
    /// `None` when they do not overlap
    /// unit: ppm
    pub rmse: Option<FloatValue>,
}

impl HistoricalComparison {
    pub fn new(kind: EmissionsKind, modelled: Timeseries, observed: Timeseries) -> Self {
        let rmse = root_mean_square_error(&modelled, &observed);
        Self {
            kind,
            modelled,
            observed,
            rmse,
        }
    }
}

/// Root-mean-square difference between two series at their common times.
pub fn root_mean_square_error(a: &Timeseries, b: &Timeseries) -> Option<FloatValue> {
    let (left, right): (Vec<FloatValue>, Vec<FloatValue>) = a
        .time_axis()
        .iter()
        .zip(a.values().iter())
        .filter_map(|(time, value)| b.at_time(*time).map(|other| (*value, other)))
        .unzip();

    let difference = Array1::from(left) - Array1::from(right);
    difference.mapv(|d| d * d).mean().map(FloatValue::sqrt)
}

/// Atmospheric CO2 resulting from one emission scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    /// unit: ppm
    pub concentration: Timeseries,
}

/// Projections for every configured scenario from a common starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// unit: ppm
    pub initial_ppm: FloatValue,
    pub projections: Vec<ScenarioProjection>,
}

impl ProjectionReport {
    pub fn get(&self, scenario: Scenario) -> Option<&ScenarioProjection> {
        self.projections.iter().find(|p| p.scenario == scenario)
    }
}

/// Annual emissions of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEmissions {
    pub scenario: Scenario,
    /// unit: GtC / yr
    pub emissions: Timeseries,
}

/// Measured historical emissions and their components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEmissions {
    /// unit: GtC / yr
    pub total: Timeseries,
    /// unit: GtC / yr
    pub fossil_fuel: Timeseries,
    /// unit: GtC / yr
    pub land_use_change: Timeseries,
}

/// Everything produced by one call to
/// [`run_experiments`](crate::run_experiments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub historical: HistoricalComparison,
    pub projections: ProjectionReport,
    pub scenario_emissions: Vec<ScenarioEmissions>,
    pub historical_emissions: HistoricalEmissions,
}

pub const HISTORICAL_FILE: &str = "carbon.json";
pub const PROJECTION_FILE: &str = "carbon_predict.json";
pub const SCENARIO_EMISSIONS_FILE: &str = "carbon_emission_scenarios.json";
pub const HISTORICAL_EMISSIONS_FILE: &str = "carbon_emission_actual.json";

impl ExperimentReport {
    /// Write each report section as a JSON document in `dir`.
    ///
    /// The directory is created if needed. Returns the written paths.
    pub fn write_json<P: AsRef<Path>>(&self, dir: P) -> CBoxResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let paths = vec![
            write_document(dir, HISTORICAL_FILE, &self.historical)?,
            write_document(dir, PROJECTION_FILE, &self.projections)?,
            write_document(dir, SCENARIO_EMISSIONS_FILE, &self.scenario_emissions)?,
            write_document(dir, HISTORICAL_EMISSIONS_FILE, &self.historical_emissions)?,
        ];

        Ok(paths)
    }
}

fn write_document<T: Serialize>(dir: &Path, name: &str, value: &T) -> CBoxResult<PathBuf> {
    let path = dir.join(name);
    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, value)
        .map_err(|err| CBoxError::Serialization(err.to_string()))?;

    log::info!("Wrote {:?}", path);
    Ok(path)
}
