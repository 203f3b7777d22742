//! # cbox
//!
//! A three-reservoir carbon box model of atmospheric CO2.
//!
//! The model crates are re-exported here together with the standard
//! experiments: a hindcast of 1959-2014 against the Mauna Loa record and
//! projections for the IPCC SRES emission scenarios.
//!
//! ```no_run
//! use cbox::{run_experiments, RunConfig};
//!
//! let report = run_experiments(&RunConfig::default())?;
//! report.write_json("output")?;
//! # Ok::<(), cbox::errors::CBoxError>(())
//! ```

pub mod config;
pub mod experiments;
pub mod report;

pub use cbox_components as components;
pub use cbox_core::{emissions, errors, interpolate, observations, timeseries};

pub use cbox_components::integrate_reservoirs;
pub use cbox_core::emissions::{build_annual_emissions, historical_emissions};
pub use config::RunConfig;
pub use experiments::run_experiments;
pub use report::ExperimentReport;
