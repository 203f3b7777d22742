//! Carbon box model components
//!
//! The model tracks carbon in three reservoirs (atmosphere, surface ocean and
//! terrestrial biosphere) coupled by nonlinear fluxes, following
//! Rodhe & Björkström (1979), "Some consequences of non-proportionality
//! between fluxes and reservoir contents in natural systems", Tellus 31.

pub mod components;
pub mod constants;
pub mod parameters;

pub use components::{
    integrate_reservoirs, BoxModelRun, Fluxes, ReservoirIntegrator, ReservoirState,
};
