//! Standard experiments
//!
//! Nothing runs on load: callers invoke [`run_experiments`] explicitly with
//! a [`RunConfig`].

use crate::config::{HistoricalConfig, ProjectionConfig, RunConfig};
use crate::report::{
    ExperimentReport, HistoricalComparison, HistoricalEmissions, ProjectionReport,
    ScenarioEmissions, ScenarioProjection,
};
use cbox_components::ReservoirIntegrator;
use cbox_core::emissions::{
    build_annual_emissions, historical_emissions, historical_timeseries, scenario_timeseries,
    EmissionsKind, Scenario, HISTORICAL_START_YEAR, SCENARIO_START_YEAR,
};
use cbox_core::errors::CBoxResult;
use cbox_core::observations::observed_timeseries;
use cbox_core::timeseries::{FloatValue, Timeseries};
use log::info;

/// Run the historical hindcast, every scenario projection and collect the
/// emission tables.
pub fn run_experiments(config: &RunConfig) -> CBoxResult<ExperimentReport> {
    config.validate()?;
    let integrator = ReservoirIntegrator::new();

    let historical = run_historical(&integrator, &config.historical)?;
    let projections = run_projections(&integrator, &config.projection)?;

    let scenario_emissions = config
        .projection
        .scenarios
        .iter()
        .map(|scenario| ScenarioEmissions {
            scenario: *scenario,
            emissions: scenario_timeseries(*scenario),
        })
        .collect();

    let historical_emissions = HistoricalEmissions {
        total: historical_timeseries(EmissionsKind::Total),
        fossil_fuel: historical_timeseries(EmissionsKind::FossilFuel),
        land_use_change: historical_timeseries(EmissionsKind::LandUseChange),
    };

    Ok(ExperimentReport {
        historical,
        projections,
        scenario_emissions,
        historical_emissions,
    })
}

/// Hindcast from 1959 compared against the Mauna Loa record.
pub fn run_historical(
    integrator: &ReservoirIntegrator,
    config: &HistoricalConfig,
) -> CBoxResult<HistoricalComparison> {
    info!(
        "Running historical experiment: {} ppm, {} years, {} emissions",
        config.initial_ppm, config.years, config.kind
    );

    let emissions = historical_emissions(config.kind);
    let trajectory = integrator.integrate(config.initial_ppm, config.years, &emissions)?;
    let modelled = Timeseries::annual(HISTORICAL_START_YEAR, trajectory);

    let comparison = HistoricalComparison::new(config.kind, modelled, observed_timeseries());
    if let Some(rmse) = comparison.rmse {
        info!("Historical RMSE against observations: {:.3} ppm", rmse);
    }

    Ok(comparison)
}

/// Project every configured scenario from 1990.
pub fn run_projections(
    integrator: &ReservoirIntegrator,
    config: &ProjectionConfig,
) -> CBoxResult<ProjectionReport> {
    let projections = config
        .scenarios
        .iter()
        .map(|scenario| {
            let concentration =
                project_scenario(integrator, *scenario, config.initial_ppm, config.years)?;
            Ok(ScenarioProjection {
                scenario: *scenario,
                concentration,
            })
        })
        .collect::<CBoxResult<Vec<_>>>()?;

    Ok(ProjectionReport {
        initial_ppm: config.initial_ppm,
        projections,
    })
}

/// Atmospheric CO2 (ppm) for one scenario on an axis starting in 1990.
pub fn project_scenario(
    integrator: &ReservoirIntegrator,
    scenario: Scenario,
    initial_ppm: FloatValue,
    years: usize,
) -> CBoxResult<Timeseries> {
    let emissions = build_annual_emissions(scenario);
    let trajectory = integrator.integrate(initial_ppm, years, &emissions)?;

    info!(
        "Scenario {}: {} ppm in {}",
        scenario,
        trajectory[years],
        SCENARIO_START_YEAR + years as i32
    );

    Ok(Timeseries::annual(SCENARIO_START_YEAR, trajectory))
}
