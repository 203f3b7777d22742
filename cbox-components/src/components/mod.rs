mod reservoirs;

pub use reservoirs::{
    integrate_reservoirs, BoxModelRun, Fluxes, ReservoirIntegrator, ReservoirState, TIME_STEP,
};
