//! Physical constants shared by the carbon box components.

use cbox_core::timeseries::FloatValue;

/// Mass of atmospheric carbon corresponding to 1 ppm of CO2
/// unit: GtC / ppm
pub const GTC_PER_PPM: FloatValue = 2.123;
