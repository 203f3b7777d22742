//! Conservation and consistency tests for the reservoir model.
//!
//! These tests verify that:
//! - Carbon is only added to the system by emissions
//! - Splitting a run into pieces does not change the result
//! - An equilibrated system stays put without emissions

use approx::assert_relative_eq;
use cbox_components::{integrate_reservoirs, ReservoirIntegrator};
use cbox_core::emissions::{build_annual_emissions, historical_emissions, EmissionsKind, Scenario};
use cbox_core::errors::CBoxError;

mod carbon_mass_conservation {
    use super::*;

    /// Total carbon after a run equals the initial total plus all emissions.
    #[test]
    fn test_total_carbon_budget_closes() {
        let component = ReservoirIntegrator::new();
        let emissions = historical_emissions(EmissionsKind::Total);

        let mut run = component.start(315.97).unwrap();
        let total_initial = run.state().total();

        run.advance(&emissions);

        let emitted: f64 = emissions.iter().sum();
        assert_relative_eq!(
            run.state().total(),
            total_initial + emitted,
            epsilon = 1e-8
        );
    }

    /// Emissions end up spread over all three reservoirs.
    #[test]
    fn test_sinks_take_up_emissions() {
        let component = ReservoirIntegrator::new();
        let emissions = build_annual_emissions(Scenario::A2);

        let mut run = component.start(330.35).unwrap();
        let initial = *run.state();
        run.advance(&emissions);
        let last = *run.state();

        let emitted: f64 = emissions.iter().sum();
        let airborne = last.atmosphere - initial.atmosphere;
        assert!(
            airborne > 0.0 && airborne < emitted,
            "Airborne increase {:.1} GtC should be a fraction of {:.1} GtC emitted",
            airborne,
            emitted
        );
        assert!(last.surface_ocean > initial.surface_ocean);
    }
}

mod step_composition {
    use super::*;

    /// Running N years then M years equals running N + M years.
    #[test]
    fn test_split_runs_match_for_every_split() {
        let component = ReservoirIntegrator::new();
        let emissions = build_annual_emissions(Scenario::A1);
        let direct = component.integrate(330.35, 60, &emissions).unwrap();

        for split in [1, 7, 30, 59] {
            let mut run = component.start(330.35).unwrap();
            run.advance_years(split, &emissions).unwrap();
            run.advance_years(60 - split, &emissions[split..]).unwrap();

            assert_eq!(run.trajectory(), direct, "Mismatch splitting at {}", split);
        }
    }

    /// A prefix of a long run equals a short run.
    #[test]
    fn test_prefix_of_longer_run() {
        let emissions = historical_emissions(EmissionsKind::Total);
        let long = integrate_reservoirs(315.97, 55, &emissions).unwrap();
        let short = integrate_reservoirs(315.97, 20, &emissions).unwrap();

        assert_eq!(&long[..21], &short[..]);
    }
}

mod steady_state {
    use super::*;

    #[test]
    fn test_equilibrium_without_emissions() {
        let component = ReservoirIntegrator::new();
        let mut run = component.find_steady_state(330.35, 1e-10, 5000).unwrap();
        let equilibrium = run.atmosphere_ppm();

        run.advance(&vec![0.0; 500]);

        assert_relative_eq!(run.atmosphere_ppm(), equilibrium, epsilon = 1e-8);
    }
}

mod documented_errors {
    use super::*;

    #[test]
    fn test_short_emissions() {
        let result = integrate_reservoirs(315.97, 10, &[2.0; 5]);
        assert!(matches!(
            result,
            Err(CBoxError::InsufficientData {
                required: 10,
                available: 5
            })
        ));
    }

    #[test]
    fn test_negative_concentration() {
        let result = integrate_reservoirs(-315.97, 10, &[2.0; 10]);
        assert!(matches!(result, Err(CBoxError::InvalidArgument(_))));
    }
}
