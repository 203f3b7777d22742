//! End-to-end tests of the standard experiments and their JSON reports.

use approx::assert_relative_eq;
use cbox::emissions::Scenario;
use cbox::errors::CBoxError;
use cbox::report::{
    ExperimentReport, HISTORICAL_EMISSIONS_FILE, HISTORICAL_FILE, PROJECTION_FILE,
    SCENARIO_EMISSIONS_FILE,
};
use cbox::{integrate_reservoirs, run_experiments, RunConfig};
use std::fs;

#[test]
fn default_experiments() {
    let report = run_experiments(&RunConfig::default()).unwrap();

    let historical = &report.historical;
    assert_eq!(historical.modelled.len(), 56);
    assert_eq!(historical.modelled.start(), Some(1959.0));
    assert_eq!(historical.modelled.end(), Some(2014.0));
    assert_relative_eq!(
        historical.modelled.values()[55],
        408.41143633719753,
        epsilon = 1e-6
    );

    let rmse = historical.rmse.unwrap();
    assert!(
        rmse > 0.0 && rmse < 10.0,
        "Hindcast should track observations, RMSE {:.2} ppm",
        rmse
    );

    assert_eq!(report.projections.projections.len(), 6);
    assert_eq!(report.scenario_emissions.len(), 6);
    for projection in &report.projections.projections {
        assert_eq!(projection.concentration.len(), 111);
        assert_eq!(projection.concentration.end(), Some(2100.0));
    }

    assert_eq!(report.historical_emissions.total.len(), 59);
}

#[test]
fn scenario_ordering_of_2100_concentrations() {
    let report = run_experiments(&RunConfig::default()).unwrap();
    let in_2100 = |scenario| {
        report
            .projections
            .get(scenario)
            .and_then(|p| p.concentration.at_time(2100.0))
            .unwrap()
    };

    // A1G has the highest emissions and B1 the lowest
    assert!(in_2100(Scenario::A1G) > in_2100(Scenario::A2));
    assert!(in_2100(Scenario::A2) > in_2100(Scenario::A1));
    assert!(in_2100(Scenario::B1) < in_2100(Scenario::A1T));
    assert_relative_eq!(in_2100(Scenario::A1), 746.706028973211, epsilon = 1e-6);
}

#[test]
fn projections_match_direct_integration() {
    let config: RunConfig = "[projection]\nscenarios = [\"B2\"]\nyears = 30"
        .parse()
        .unwrap();
    let report = run_experiments(&config).unwrap();

    let emissions = cbox::build_annual_emissions(Scenario::B2);
    let direct = integrate_reservoirs(330.35, 30, &emissions).unwrap();

    let projection = report.projections.get(Scenario::B2).unwrap();
    assert_eq!(projection.concentration.values().to_vec(), direct);
}

#[test]
fn rejects_invalid_config() {
    let mut config = RunConfig::default();
    config.projection.scenarios.clear();

    assert!(matches!(
        run_experiments(&config),
        Err(CBoxError::Config(_))
    ));
}

#[test]
fn writes_one_document_per_chart() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_experiments(&RunConfig::default()).unwrap();

    let paths = report.write_json(dir.path()).unwrap();
    assert_eq!(paths.len(), 4);

    for name in [
        HISTORICAL_FILE,
        PROJECTION_FILE,
        SCENARIO_EMISSIONS_FILE,
        HISTORICAL_EMISSIONS_FILE,
    ] {
        assert!(dir.path().join(name).exists(), "{} not written", name);
    }

    let contents = fs::read_to_string(dir.path().join(PROJECTION_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["initial_ppm"], 330.35);
    assert_eq!(json["projections"][0]["scenario"], "A1");
    assert_eq!(
        json["projections"][0]["concentration"]["values"]
            .as_array()
            .unwrap()
            .len(),
        111
    );
}

#[test]
fn report_survives_serialization() {
    let report = run_experiments(&RunConfig::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let parsed: ExperimentReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);
}

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    fs::write(&path, "[historical]\nyears = 10\nkind = \"LUC\"\n").unwrap();

    let config = RunConfig::from_file(&path).unwrap();
    assert_eq!(config.historical.years, 10);

    let report = run_experiments(&config).unwrap();
    assert_eq!(report.historical.modelled.len(), 11);
}

#[test]
fn missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = RunConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(CBoxError::Io(_))));
}
