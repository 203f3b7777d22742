//! Core types for the cbox carbon box model
//!
//! - [`emissions`]: historical and projected anthropogenic emissions
//! - [`interpolate`]: piecewise-linear subdivision of coarse projections
//! - [`observations`]: the observed Mauna Loa CO2 record
//! - [`timeseries`]: values on an annual time axis

pub mod emissions;
pub mod errors;
pub mod interpolate;
pub mod observations;
pub mod timeseries;
