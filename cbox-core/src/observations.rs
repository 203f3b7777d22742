//! Observed atmospheric CO2
//!
//! Annual mean concentrations measured at the NOAA Mauna Loa observatory,
//! used to judge how well a historical model run tracks reality.

use crate::timeseries::{FloatValue, Timeseries};

/// First year of the observed record.
pub const OBSERVED_START_YEAR: i32 = 1959;

/// Number of observed years (1959-2014).
pub const OBSERVED_LENGTH: usize = 56;

/// Mauna Loa annual mean CO2
/// unit: ppm
const MAUNA_LOA_CO2: [FloatValue; OBSERVED_LENGTH] = [
    315.97, 316.91, 317.64, 318.45, 318.99, 319.62, 320.04, 321.38, 322.16, 323.04, 324.62,
    325.68, 326.32, 327.45, 329.68, 330.18, 331.08, 332.05, 333.78, 335.41, 336.78, 338.68,
    340.10, 341.44, 343.03, 344.58, 346.04, 347.39, 349.16, 351.56, 353.07, 354.35, 355.57,
    356.38, 357.07, 358.82, 360.80, 362.59, 363.71, 366.65, 368.33, 369.52, 371.13, 373.22,
    375.77, 377.49, 379.80, 381.90, 383.76, 385.59, 387.37, 389.85, 391.63, 393.82, 396.48,
    398.55,
];

/// Observed CO2 concentrations (ppm) for 1959-2014.
pub fn observed_concentrations() -> Vec<FloatValue> {
    MAUNA_LOA_CO2.to_vec()
}

/// Observed CO2 concentrations on an annual time axis starting in 1959.
pub fn observed_timeseries() -> Timeseries {
    Timeseries::annual(OBSERVED_START_YEAR, observed_concentrations())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_record() {
        let ts = observed_timeseries();
        assert_eq!(ts.len(), OBSERVED_LENGTH);
        assert_eq!(ts.at_time(1959.0), Some(315.97));
        assert_eq!(ts.end(), Some(2014.0));
    }

    #[test]
    fn observed_record_increases() {
        let observed = observed_concentrations();
        assert!(observed.windows(2).all(|pair| pair[1] > pair[0]));
    }
}
