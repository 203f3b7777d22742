//! Three-Reservoir Carbon Box Model
//!
//! Advances the carbon content of the atmosphere, surface ocean and
//! terrestrial biosphere one year at a time in response to anthropogenic
//! emissions.
//!
//! # What This Component Does
//!
//! 1. Converts the initial atmospheric concentration (ppm) to carbon mass (GtC)
//! 2. Computes four fluxes from the reservoir contents:
//!    - ocean uptake (atmosphere to ocean), linear in the atmosphere
//!    - ocean degassing (ocean to atmosphere), a power law in the ocean
//!    - photosynthesis (atmosphere to biosphere), a power law in the atmosphere
//!    - respiration (biosphere to atmosphere), linear in the biosphere
//! 3. Applies an explicit Euler update to every reservoir
//! 4. Reports the atmospheric trajectory back in ppm
//!
//! # Flux Lag
//!
//! After each update the fluxes are recomputed for the next step from a mix
//! of old and new contents. Ocean uptake and photosynthesis use the
//! atmosphere *before* the update while degassing and respiration use the
//! ocean and biosphere *after* it. The atmospheric fluxes therefore trail the
//! atmosphere by one step. This ordering determines the trajectory and is
//! reproduced exactly.
//!
//! # Conservation
//!
//! Every flux is removed from one reservoir and added to another within the
//! same step, so total carbon changes by exactly the emissions of each step.
//!
//! # Physical Bounds
//!
//! Contents are not clamped. Pathological forcing can drive a reservoir
//! negative; this is logged once per run and otherwise left alone.

use crate::parameters::ReservoirParameters;
use cbox_core::errors::{CBoxError, CBoxResult};
use cbox_core::timeseries::FloatValue;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Length of one integration step
/// unit: yr
pub const TIME_STEP: FloatValue = 1.0;

/// Carbon content of each reservoir
/// unit: GtC
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReservoirState {
    pub atmosphere: FloatValue,
    pub surface_ocean: FloatValue,
    pub terrestrial_biosphere: FloatValue,
}

impl ReservoirState {
    /// Total carbon across all three reservoirs (GtC).
    pub fn total(&self) -> FloatValue {
        self.atmosphere + self.surface_ocean + self.terrestrial_biosphere
    }

    /// Whether every reservoir holds a non-negative amount of carbon.
    pub fn is_physical(&self) -> bool {
        self.atmosphere >= 0.0 && self.surface_ocean >= 0.0 && self.terrestrial_biosphere >= 0.0
    }
}

/// Carbon transfer rates between reservoirs
/// unit: GtC / yr
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fluxes {
    /// Atmosphere to surface ocean
    pub ocean_uptake: FloatValue,
    /// Surface ocean to atmosphere
    pub ocean_degassing: FloatValue,
    /// Atmosphere to terrestrial biosphere
    pub photosynthesis: FloatValue,
    /// Terrestrial biosphere to atmosphere
    pub respiration: FloatValue,
}

impl Fluxes {
    /// Net flux into the atmosphere including anthropogenic emissions.
    pub fn net_to_atmosphere(&self, emissions: FloatValue) -> FloatValue {
        self.respiration + self.ocean_degassing + emissions
            - self.photosynthesis
            - self.ocean_uptake
    }

    /// Net flux into the surface ocean.
    pub fn net_to_ocean(&self) -> FloatValue {
        self.ocean_uptake - self.ocean_degassing
    }

    /// Net flux into the terrestrial biosphere.
    pub fn net_to_biosphere(&self) -> FloatValue {
        self.photosynthesis - self.respiration
    }
}

/// Three-reservoir carbon box model.
///
/// Owns the flux laws. Every call to [`ReservoirIntegrator::start`] hands out
/// an independent [`BoxModelRun`], so one integrator can drive any number of
/// runs, also from several threads.
///
/// The flux laws are:
///
/// $$ F_{uptake} = k_{atm} A $$
/// $$ F_{degas} = k_{deg} O^{p_{deg}} $$
/// $$ F_{photo} = k_{photo} A^{p_{photo}} $$
/// $$ F_{resp} = k_{resp} B $$
///
/// and each step applies
///
/// $$ A_{n+1} = A_n + (F_{resp} + F_{degas} + E_n - F_{photo} - F_{uptake}) \Delta t $$
/// $$ O_{n+1} = O_n + (F_{uptake} - F_{degas}) \Delta t $$
/// $$ B_{n+1} = B_n + (F_{photo} - F_{resp}) \Delta t $$
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservoirIntegrator {
    parameters: ReservoirParameters,
}

impl ReservoirIntegrator {
    /// Create a new integrator with the default parameters.
    pub fn new() -> Self {
        Self::from_parameters(ReservoirParameters::default())
    }

    /// Create a new integrator from parameters.
    pub fn from_parameters(parameters: ReservoirParameters) -> Self {
        Self { parameters }
    }

    /// Get the parameters.
    pub fn parameters(&self) -> &ReservoirParameters {
        &self.parameters
    }

    fn ocean_uptake(&self, atmosphere: FloatValue) -> FloatValue {
        atmosphere * self.parameters.ocean_uptake_coefficient
    }

    fn ocean_degassing(&self, surface_ocean: FloatValue) -> FloatValue {
        self.parameters.degassing_coefficient
            * surface_ocean.powf(self.parameters.degassing_exponent)
    }

    fn photosynthesis(&self, atmosphere: FloatValue) -> FloatValue {
        self.parameters.photosynthesis_coefficient
            * atmosphere.powf(self.parameters.photosynthesis_exponent)
    }

    fn respiration(&self, terrestrial_biosphere: FloatValue) -> FloatValue {
        self.parameters.respiration_coefficient * terrestrial_biosphere
    }

    /// Evaluate all four flux laws.
    ///
    /// `atmosphere` drives uptake and photosynthesis, the other two contents
    /// drive degassing and respiration. Callers decide which step each
    /// content is taken from.
    pub fn calculate_fluxes(
        &self,
        atmosphere: FloatValue,
        surface_ocean: FloatValue,
        terrestrial_biosphere: FloatValue,
    ) -> Fluxes {
        Fluxes {
            ocean_uptake: self.ocean_uptake(atmosphere),
            ocean_degassing: self.ocean_degassing(surface_ocean),
            photosynthesis: self.photosynthesis(atmosphere),
            respiration: self.respiration(terrestrial_biosphere),
        }
    }

    /// Reservoir contents at the start of a run.
    ///
    /// # Errors
    ///
    /// [`CBoxError::InvalidArgument`] if `initial_ppm` is not a positive,
    /// finite concentration.
    pub fn initial_state(&self, initial_ppm: FloatValue) -> CBoxResult<ReservoirState> {
        if !(initial_ppm.is_finite() && initial_ppm > 0.0) {
            return Err(CBoxError::InvalidArgument(format!(
                "initial concentration must be positive, got {} ppm",
                initial_ppm
            )));
        }

        Ok(ReservoirState {
            atmosphere: initial_ppm * self.parameters.gtc_per_ppm,
            surface_ocean: self.parameters.surface_ocean_initial,
            terrestrial_biosphere: self.parameters.terrestrial_biosphere_initial,
        })
    }

    /// Begin a run at the given atmospheric concentration (ppm).
    pub fn start(&self, initial_ppm: FloatValue) -> CBoxResult<BoxModelRun> {
        let state = self.initial_state(initial_ppm)?;
        let fluxes = self.calculate_fluxes(
            state.atmosphere,
            state.surface_ocean,
            state.terrestrial_biosphere,
        );

        Ok(BoxModelRun {
            integrator: self.clone(),
            state,
            fluxes,
            atmosphere: vec![state.atmosphere],
            reported_unphysical: false,
        })
    }

    /// Integrate for `years` steps and return the atmospheric trajectory.
    ///
    /// The result holds `years + 1` concentrations in ppm, starting with
    /// `initial_ppm`. `emissions[i]` (GtC / yr) forces step `i`; entries past
    /// `years` are ignored.
    ///
    /// # Errors
    ///
    /// - [`CBoxError::InvalidArgument`] for a non-positive concentration or
    ///   zero years
    /// - [`CBoxError::InsufficientData`] if fewer than `years` emissions are
    ///   supplied
    pub fn integrate(
        &self,
        initial_ppm: FloatValue,
        years: usize,
        emissions: &[FloatValue],
    ) -> CBoxResult<Vec<FloatValue>> {
        if years == 0 {
            return Err(CBoxError::InvalidArgument(
                "number of years must be positive".to_string(),
            ));
        }

        let mut run = self.start(initial_ppm)?;
        run.advance_years(years, emissions)?;

        debug!(
            "Integrated {} years from {} ppm to {:.3} ppm",
            years,
            initial_ppm,
            run.atmosphere_ppm()
        );

        Ok(run.into_trajectory())
    }

    /// Run with zero emissions until the atmosphere stops changing.
    ///
    /// Returns the run once two successive concentrations differ by less than
    /// `tolerance` ppm. The returned run can be advanced further.
    ///
    /// # Errors
    ///
    /// [`CBoxError::InvalidArgument`] if `tolerance` is not positive or the
    /// run has not settled within `max_years`.
    pub fn find_steady_state(
        &self,
        initial_ppm: FloatValue,
        tolerance: FloatValue,
        max_years: usize,
    ) -> CBoxResult<BoxModelRun> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(CBoxError::InvalidArgument(format!(
                "steady state tolerance must be positive, got {}",
                tolerance
            )));
        }

        let mut run = self.start(initial_ppm)?;
        for _ in 0..max_years {
            let before = run.atmosphere_ppm();
            run.step(0.0);
            let after = run.atmosphere_ppm();

            if (after - before).abs() < tolerance {
                debug!(
                    "Reached steady state of {:.6} ppm after {} years",
                    after,
                    run.years()
                );
                return Ok(run);
            }
        }

        Err(CBoxError::InvalidArgument(format!(
            "no steady state within {} ppm after {} years",
            tolerance, max_years
        )))
    }
}

/// A single simulation in progress.
///
/// Holds the reservoir contents, the fluxes that will drive the next step and
/// the atmosphere after every completed step. Advancing a run N years and
/// then M years gives the same trajectory as advancing it N + M years at
/// once.
#[derive(Debug, Clone)]
pub struct BoxModelRun {
    integrator: ReservoirIntegrator,
    state: ReservoirState,
    fluxes: Fluxes,
    /// Atmospheric content after each step, starting with the initial value
    /// unit: GtC
    atmosphere: Vec<FloatValue>,
    reported_unphysical: bool,
}

impl BoxModelRun {
    /// Advance one step using `emissions` (GtC / yr).
    pub fn step(&mut self, emissions: FloatValue) {
        let previous = self.state;
        let fluxes = self.fluxes;

        let next = ReservoirState {
            atmosphere: previous.atmosphere + fluxes.net_to_atmosphere(emissions) * TIME_STEP,
            surface_ocean: previous.surface_ocean + fluxes.net_to_ocean() * TIME_STEP,
            terrestrial_biosphere: previous.terrestrial_biosphere
                + fluxes.net_to_biosphere() * TIME_STEP,
        };

        // Atmospheric fluxes come from the pre-update atmosphere
        self.fluxes = self.integrator.calculate_fluxes(
            previous.atmosphere,
            next.surface_ocean,
            next.terrestrial_biosphere,
        );
        self.state = next;
        self.atmosphere.push(next.atmosphere);

        if !self.reported_unphysical && !next.is_physical() {
            warn!(
                "Reservoir content went negative after {} years: {:?}",
                self.years(),
                next
            );
            self.reported_unphysical = true;
        }
    }

    /// Advance one step per supplied emission value.
    pub fn advance(&mut self, emissions: &[FloatValue]) {
        for value in emissions {
            self.step(*value);
        }
    }

    /// Advance exactly `years` steps using the first `years` emissions.
    ///
    /// # Errors
    ///
    /// [`CBoxError::InsufficientData`] if fewer than `years` emissions are
    /// supplied. The run is left untouched in that case.
    pub fn advance_years(&mut self, years: usize, emissions: &[FloatValue]) -> CBoxResult<()> {
        if emissions.len() < years {
            return Err(CBoxError::InsufficientData {
                required: years,
                available: emissions.len(),
            });
        }
        self.advance(&emissions[..years]);
        Ok(())
    }

    /// Number of completed steps.
    pub fn years(&self) -> usize {
        self.atmosphere.len() - 1
    }

    /// Current reservoir contents.
    pub fn state(&self) -> &ReservoirState {
        &self.state
    }

    /// Fluxes that will drive the next step.
    pub fn fluxes(&self) -> &Fluxes {
        &self.fluxes
    }

    /// Current atmospheric concentration (ppm).
    pub fn atmosphere_ppm(&self) -> FloatValue {
        self.state.atmosphere / self.integrator.parameters.gtc_per_ppm
    }

    /// Atmospheric concentration (ppm) after every step so far, starting with
    /// the initial value.
    pub fn trajectory(&self) -> Vec<FloatValue> {
        let gtc_per_ppm = self.integrator.parameters.gtc_per_ppm;
        self.atmosphere.iter().map(|gtc| gtc / gtc_per_ppm).collect()
    }

    /// Consume the run, returning its trajectory in ppm.
    pub fn into_trajectory(self) -> Vec<FloatValue> {
        self.trajectory()
    }
}

/// Integrate the default three-reservoir model.
///
/// Returns `years + 1` atmospheric concentrations (ppm). See
/// [`ReservoirIntegrator::integrate`].
pub fn integrate_reservoirs(
    initial_ppm: FloatValue,
    years: usize,
    emissions: &[FloatValue],
) -> CBoxResult<Vec<FloatValue>> {
    ReservoirIntegrator::new().integrate(initial_ppm, years, emissions)
}
