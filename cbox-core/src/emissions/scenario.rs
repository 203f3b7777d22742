//! Projected emission scenarios
//!
//! IPCC SRES marker scenarios, given as total anthropogenic emissions for
//! each decade from 1990 to 2100.

use crate::errors::{CBoxError, CBoxResult};
use crate::interpolate::subdivide_intervals;
use crate::timeseries::{FloatValue, Timeseries};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First year of every scenario.
pub const SCENARIO_START_YEAR: i32 = 1990;

/// Number of decadal values per scenario (1990, 2000, ..., 2100).
pub const DECADES_PER_SCENARIO: usize = 12;

const YEARS_PER_DECADE: usize = 10;

/// Number of annual values produced for every scenario (1990-2099).
pub const SCENARIO_LENGTH: usize = (DECADES_PER_SCENARIO - 1) * YEARS_PER_DECADE;

/// A named emission projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    A1,
    A1T,
    A1G,
    A2,
    B1,
    B2,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::A1,
        Scenario::A1T,
        Scenario::A1G,
        Scenario::A2,
        Scenario::B1,
        Scenario::B2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::A1 => "A1",
            Scenario::A1T => "A1T",
            Scenario::A1G => "A1G",
            Scenario::A2 => "A2",
            Scenario::B1 => "B1",
            Scenario::B2 => "B2",
        }
    }

    /// Emissions at each decade from 1990 to 2100
    /// unit: GtC / yr
    pub fn decadal_emissions(&self) -> [FloatValue; DECADES_PER_SCENARIO] {
        match self {
            Scenario::A1 => [
                7.10, 7.97, 10.88, 12.64, 14.48, 15.35, 16.38, 16.00, 15.73, 15.18, 14.30, 13.49,
            ],
            Scenario::A1G => [
                7.10, 7.97, 9.73, 12.73, 16.19, 19.97, 23.90, 25.69, 27.28, 28.68, 28.42, 28.24,
            ],
            Scenario::A1T => [
                7.10, 7.97, 9.38, 10.26, 12.38, 12.65, 12.26, 11.38, 9.87, 8.02, 6.26, 4.32,
            ],
            Scenario::A2 => [
                7.10, 7.97, 9.58, 12.25, 14.72, 16.07, 17.43, 19.16, 20.89, 23.22, 26.15, 29.09,
            ],
            Scenario::B1 => [
                7.10, 7.97, 9.28, 10.63, 11.11, 11.72, 11.29, 9.74, 8.18, 6.70, 5.32, 4.23,
            ],
            Scenario::B2 => [
                7.10, 7.97, 8.78, 9.05, 9.90, 10.69, 11.01, 11.49, 11.62, 12.15, 12.79, 13.32,
            ],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = CBoxError;

    fn from_str(s: &str) -> CBoxResult<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CBoxError::InvalidArgument(format!(
                    "unknown emission scenario '{}', expected one of A1, A1T, A1G, A2, B1, B2",
                    s
                ))
            })
    }
}

/// Annual emissions (GtC / yr) for 1990-2099.
///
/// Each decade is subdivided into ten linearly interpolated years. The 2100
/// value only anchors the last interval and is not part of the output.
pub fn build_annual_emissions(scenario: Scenario) -> Vec<FloatValue> {
    subdivide_intervals(&scenario.decadal_emissions(), YEARS_PER_DECADE)
}

/// Scenario emissions on an annual time axis starting in 1990.
pub fn scenario_timeseries(scenario: Scenario) -> Timeseries {
    Timeseries::annual(SCENARIO_START_YEAR, build_annual_emissions(scenario))
}
