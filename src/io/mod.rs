//! File interfaces: net-supply and interconnector CSV input, per-day result output.

pub mod export;
pub mod import;
