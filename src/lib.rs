//! Daily UK power-balance simulator: hydrogen and medium-term storage,
//! gas CCS, interconnector imports, direct air capture and curtailment.

pub mod config;
pub mod costs;
pub mod io;
pub mod runner;
/// Day loop, dispatch policy, result checks and summary metrics.
pub mod sim;
pub mod supply;
pub mod units;

#[cfg(feature = "api")]
pub mod api;
