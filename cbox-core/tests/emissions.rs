//! Properties of the emission forcing provided to the box model.

use cbox_core::emissions::{
    build_annual_emissions, historical_emissions, historical_timeseries, scenario_timeseries,
    EmissionsKind, Scenario, HISTORICAL_LENGTH, SCENARIO_LENGTH,
};
use cbox_core::errors::CBoxError;

#[test]
fn historical_total_matches_components_elementwise() {
    let total = historical_emissions(EmissionsKind::Total);
    let fossil = historical_emissions(EmissionsKind::FossilFuel);
    let land_use = historical_emissions(EmissionsKind::LandUseChange);

    assert_eq!(total.len(), HISTORICAL_LENGTH);
    for ((t, f), l) in total.iter().zip(&fossil).zip(&land_use) {
        assert_eq!(*t, f + l);
    }
}

#[test]
fn historical_selector_from_text() {
    let kind: EmissionsKind = "FF".parse().unwrap();
    assert_eq!(
        historical_emissions(kind),
        historical_emissions(EmissionsKind::FossilFuel)
    );

    let err = "coal".parse::<EmissionsKind>().unwrap_err();
    assert!(matches!(err, CBoxError::InvalidArgument(_)));
}

#[test]
fn scenario_a1_decade_values() {
    let a1 = build_annual_emissions("A1".parse().unwrap());

    assert_eq!(a1.len(), 110);
    assert_eq!(a1[0], 7.10);
    assert_eq!(a1[10], 7.97);
}

#[test]
fn every_scenario_is_annual_and_non_negative() {
    for scenario in Scenario::ALL {
        let emissions = build_annual_emissions(scenario);
        assert_eq!(emissions.len(), SCENARIO_LENGTH);
        assert!(emissions.iter().all(|value| *value >= 0.0));
    }
}

#[test]
fn unknown_scenario_is_invalid_argument() {
    let err = "Z9".parse::<Scenario>().unwrap_err();
    assert!(matches!(err, CBoxError::InvalidArgument(_)));
}

#[test]
fn timeseries_axes_cover_source_years() {
    let historical = historical_timeseries(EmissionsKind::Total);
    assert_eq!(historical.start(), Some(1959.0));
    assert_eq!(historical.end(), Some(2017.0));

    let projection = scenario_timeseries(Scenario::A2);
    assert_eq!(projection.start(), Some(1990.0));
    assert_eq!(projection.end(), Some(2099.0));
}
