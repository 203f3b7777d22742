//! Reservoir model parameters
//!
//! Flux coefficients and initial reservoir contents for the three-box carbon
//! model. The defaults are the only values the model is run with.

use crate::constants::GTC_PER_PPM;
use cbox_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the three-reservoir carbon model.
///
/// # Flux laws
///
/// ```text
///                     uptake = k_atm * A
///     [ATMOSPHERE] -----------------------> [SURFACE OCEAN]
///        |    ^    <-----------------------
///        |    |      degassing = k_deg * O^p_deg
///        |    |
///        |    | respiration = k_resp * B
///        |    |
///        v    |
///     [BIOSPHERE]
///
///     photosynthesis = k_photo * A^p_photo
/// ```
///
/// Ocean degassing and photosynthesis are strongly non-proportional to the
/// reservoir content, which is what makes the system buffer added carbon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservoirParameters {
    /// Conversion between atmospheric carbon mass and concentration
    /// unit: GtC / ppm
    /// default: 2.123
    pub gtc_per_ppm: FloatValue,

    /// Linear coefficient of atmosphere to ocean uptake
    /// unit: 1 / yr
    /// default: 0.15
    pub ocean_uptake_coefficient: FloatValue,

    /// Coefficient of ocean degassing
    /// unit: GtC^(1 - p) / yr
    /// default: 1e-25
    pub degassing_coefficient: FloatValue,

    /// Exponent of surface ocean content in ocean degassing
    /// unit: dimensionless
    /// default: 9.0
    pub degassing_exponent: FloatValue,

    /// Coefficient of photosynthesis
    /// unit: GtC^(1 - p) / yr
    /// default: 16.4
    pub photosynthesis_coefficient: FloatValue,

    /// Exponent of atmospheric content in photosynthesis
    /// unit: dimensionless
    /// default: 0.2
    pub photosynthesis_exponent: FloatValue,

    /// Linear coefficient of biosphere respiration
    /// unit: 1 / yr
    /// default: 0.019
    pub respiration_coefficient: FloatValue,

    /// Surface ocean carbon content at the start of every run
    /// unit: GtC
    /// default: 1000.0
    pub surface_ocean_initial: FloatValue,

    /// Terrestrial biosphere carbon content at the start of every run
    /// unit: GtC
    /// default: 3000.0
    pub terrestrial_biosphere_initial: FloatValue,
}

impl Default for ReservoirParameters {
    fn default() -> Self {
        Self {
            gtc_per_ppm: GTC_PER_PPM,

            // Flux coefficients
            ocean_uptake_coefficient: 0.15,
            degassing_coefficient: 1e-25,
            degassing_exponent: 9.0,
            photosynthesis_coefficient: 16.4,
            photosynthesis_exponent: 0.2,
            respiration_coefficient: 0.019,

            // Initial reservoir contents
            surface_ocean_initial: 1000.0,
            terrestrial_biosphere_initial: 3000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_conversion_matches_constant() {
        let params = ReservoirParameters::default();
        assert_eq!(params.gtc_per_ppm, GTC_PER_PPM);
    }

    #[test]
    fn initial_ocean_fluxes_nearly_balanced() {
        let params = ReservoirParameters::default();
        let atmosphere = 315.97 * params.gtc_per_ppm;

        let uptake = params.ocean_uptake_coefficient * atmosphere;
        let degassing = params.degassing_coefficient
            * params
                .surface_ocean_initial
                .powf(params.degassing_exponent);

        // Roughly 100 GtC / yr in each direction
        assert!((uptake - degassing).abs() < 1.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params: ReservoirParameters =
            serde_json::from_str(r#"{"respiration_coefficient": 0.02}"#).unwrap();

        assert_eq!(params.respiration_coefficient, 0.02);
        assert_eq!(params.surface_ocean_initial, 1000.0);
    }
}
