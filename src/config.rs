//! Run configuration
//!
//! Describes which experiments [`run_experiments`](crate::run_experiments)
//! performs. Every field has a default, so an empty TOML document is a valid
//! configuration that reproduces the standard experiments:
//!
//! ```toml
//! [historical]
//! initial_ppm = 315.97
//! years = 55
//! kind = "Total"
//!
//! [projection]
//! initial_ppm = 330.35
//! years = 110
//! scenarios = ["A1", "A1T", "A1G", "A2", "B1", "B2"]
//! ```

use cbox_core::emissions::{EmissionsKind, Scenario};
use cbox_core::errors::{CBoxError, CBoxResult};
use cbox_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for every experiment in one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub historical: HistoricalConfig,
    pub projection: ProjectionConfig,
}

/// Hindcast driven by measured emissions from 1959.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalConfig {
    /// Atmospheric CO2 in 1959
    /// unit: ppm
    pub initial_ppm: FloatValue,
    /// Number of years to simulate
    pub years: usize,
    /// Which part of the historical emissions forces the run
    pub kind: EmissionsKind,
}

impl Default for HistoricalConfig {
    fn default() -> Self {
        Self {
            initial_ppm: 315.97,
            years: 55,
            kind: EmissionsKind::Total,
        }
    }
}

/// Projections driven by emission scenarios from 1990.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Atmospheric CO2 in 1990
    /// unit: ppm
    pub initial_ppm: FloatValue,
    /// Number of years to simulate
    pub years: usize,
    /// Scenarios to run, in output order
    pub scenarios: Vec<Scenario>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            initial_ppm: 330.35,
            years: 110,
            scenarios: Scenario::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    /// Load a [`RunConfig`] from a TOML file and validate it.
    pub fn from_file<P: AsRef<Path>>(file: P) -> CBoxResult<Self> {
        let file = file.as_ref();
        let contents = fs::read_to_string(file)?;
        let config: RunConfig = contents.parse()?;
        log::debug!("Loaded configuration from {:?}", file);
        Ok(config)
    }

    /// Check the configuration before any run starts.
    pub fn validate(&self) -> CBoxResult<()> {
        check_concentration(self.historical.initial_ppm, "historical")?;
        check_years(self.historical.years, "historical")?;

        check_concentration(self.projection.initial_ppm, "projection")?;
        check_years(self.projection.years, "projection")?;
        if self.projection.scenarios.is_empty() {
            return Err(CBoxError::Config(
                "projection requires at least one scenario".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::str::FromStr for RunConfig {
    type Err = CBoxError;

    /// Parse and validate a TOML document.
    fn from_str(s: &str) -> CBoxResult<Self> {
        let config: RunConfig =
            toml::from_str(s).map_err(|err| CBoxError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn check_concentration(ppm: FloatValue, section: &str) -> CBoxResult<()> {
    if ppm.is_finite() && ppm > 0.0 {
        Ok(())
    } else {
        Err(CBoxError::Config(format!(
            "{} initial_ppm must be positive, got {}",
            section, ppm
        )))
    }
}

fn check_years(years: usize, section: &str) -> CBoxResult<()> {
    if years > 0 {
        Ok(())
    } else {
        Err(CBoxError::Config(format!("{} years must be positive", section)))
    }
}
