//! Emission forcing for the carbon box model
//!
//! Two sources of annual anthropogenic carbon emissions (GtC / yr):
//!
//! - [`historical_emissions`]: the measured record for 1959-2017, split into
//!   fossil fuel and land-use change
//! - [`build_annual_emissions`]: IPCC SRES projections for 1990-2099, expanded
//!   from decadal values by linear interpolation
//!
//! Both selectors are closed enums. Parsing them from text is the only place
//! an unknown name can appear, and it fails with
//! [`CBoxError::InvalidArgument`](crate::errors::CBoxError::InvalidArgument).

mod historical;
mod scenario;

pub use historical::{
    historical_emissions, historical_timeseries, EmissionsKind, HISTORICAL_LENGTH,
    HISTORICAL_START_YEAR,
};
pub use scenario::{
    build_annual_emissions, scenario_timeseries, Scenario, DECADES_PER_SCENARIO,
    SCENARIO_LENGTH, SCENARIO_START_YEAR,
};
