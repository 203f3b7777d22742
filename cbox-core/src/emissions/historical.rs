//! Historical anthropogenic emissions
//!
//! Annual global carbon emissions for 1959-2017 from the Global Carbon
//! Project carbon budget (<http://www.globalcarbonproject.org/carbonbudget>).

use crate::errors::{CBoxError, CBoxResult};
use crate::timeseries::{FloatValue, Timeseries};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First year of the historical record.
pub const HISTORICAL_START_YEAR: i32 = 1959;

/// Number of years in the historical record (1959-2017).
pub const HISTORICAL_LENGTH: usize = 59;

/// Fossil fuel and industry emissions
/// unit: GtC / yr
const FOSSIL_FUEL_EMISSIONS: [FloatValue; HISTORICAL_LENGTH] = [
    2.45, 2.57, 2.58, 2.69, 2.83, 2.99, 3.13, 3.29, 3.39, 3.57, 3.78, 4.05, 4.21, 4.37, 4.61,
    4.62, 4.59, 4.86, 5.01, 5.07, 5.35, 5.29, 5.13, 5.08, 5.06, 5.24, 5.40, 5.57, 5.71, 5.92,
    6.05, 6.05, 6.12, 6.06, 6.05, 6.15, 6.28, 6.42, 6.53, 6.55, 6.53, 6.70, 6.86, 6.96, 7.33,
    7.69, 7.98, 8.27, 8.43, 8.70, 8.60, 9.02, 9.38, 9.53, 9.61, 9.69, 9.68, 9.74, 9.87,
];

/// Land-use change emissions
/// unit: GtC / yr
const LAND_USE_CHANGE_EMISSIONS: [FloatValue; HISTORICAL_LENGTH] = [
    1.81, 1.67, 1.61, 1.57, 1.51, 1.46, 1.42, 1.38, 1.35, 1.35, 1.36, 1.32, 1.28, 1.25, 1.22,
    1.18, 1.15, 1.13, 1.11, 1.07, 1.04, 1.09, 1.10, 1.11, 1.15, 1.19, 1.20, 1.24, 1.28, 1.30,
    1.32, 1.32, 1.33, 1.35, 1.35, 1.34, 1.33, 1.31, 1.78, 1.23, 1.20, 1.32, 1.18, 1.34, 1.39,
    1.34, 1.21, 1.25, 1.07, 1.13, 1.57, 1.42, 1.36, 1.60, 1.54, 1.60, 1.62, 1.30, 1.39,
];

/// Which component of the historical emissions to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmissionsKind {
    /// Fossil fuel plus land-use change
    #[default]
    Total,
    #[serde(alias = "FF")]
    FossilFuel,
    #[serde(alias = "LUC")]
    LandUseChange,
}

impl EmissionsKind {
    pub const ALL: [EmissionsKind; 3] = [
        EmissionsKind::Total,
        EmissionsKind::FossilFuel,
        EmissionsKind::LandUseChange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EmissionsKind::Total => "Total",
            EmissionsKind::FossilFuel => "FossilFuel",
            EmissionsKind::LandUseChange => "LandUseChange",
        }
    }
}

impl fmt::Display for EmissionsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmissionsKind {
    type Err = CBoxError;

    fn from_str(s: &str) -> CBoxResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "total" => Ok(EmissionsKind::Total),
            "ff" | "fossilfuel" | "fossil-fuel" => Ok(EmissionsKind::FossilFuel),
            "luc" | "landusechange" | "land-use-change" => Ok(EmissionsKind::LandUseChange),
            _ => Err(CBoxError::InvalidArgument(format!(
                "unknown emissions kind '{}', expected one of Total, FF, LUC",
                s
            ))),
        }
    }
}

/// Historical annual emissions (GtC / yr) for 1959-2017.
///
/// The total is the element-wise sum of the fossil fuel and land-use change
/// series.
pub fn historical_emissions(kind: EmissionsKind) -> Vec<FloatValue> {
    match kind {
        EmissionsKind::Total => FOSSIL_FUEL_EMISSIONS
            .iter()
            .zip(LAND_USE_CHANGE_EMISSIONS.iter())
            .map(|(fossil, land_use)| fossil + land_use)
            .collect(),
        EmissionsKind::FossilFuel => FOSSIL_FUEL_EMISSIONS.to_vec(),
        EmissionsKind::LandUseChange => LAND_USE_CHANGE_EMISSIONS.to_vec(),
    }
}

/// Historical emissions on an annual time axis starting in 1959.
pub fn historical_timeseries(kind: EmissionsKind) -> Timeseries {
    Timeseries::annual(HISTORICAL_START_YEAR, historical_emissions(kind))
}
