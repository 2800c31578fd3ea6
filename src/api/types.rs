//! API response and query types.
//!
//! Record field names follow the CSV export header so both outputs read
//! the same.

use serde::{Deserialize, Serialize};

use crate::costs::CostBreakdown;
use crate::sim::{DailyResult, ScenarioParameters, SummaryMetrics};

/// `GET /summary` body.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Scenario parameters; unbounded caps serialise as `null`.
    pub parameters: ScenarioParameters,
    pub feasible: bool,
    pub infeasible_day: Option<usize>,
    pub summary: Option<SummaryMetrics>,
    pub costs: Option<CostBreakdown>,
    pub energy_cost_gbp_per_mwh: Option<f64>,
    /// Last simulated day, if the run was feasible and non-empty.
    pub latest_day: Option<ResultRecord>,
}

/// One simulated day, named like the CSV export columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub day: usize,
    pub net_supply_twh: f64,
    pub medium_storage_level_twh: f64,
    pub hydrogen_storage_level_twh: f64,
    pub dac_energy_twh: f64,
    pub curtailed_energy_twh: f64,
    pub energy_into_medium_storage_twh: f64,
    pub energy_into_hydrogen_storage_twh: f64,
    pub gas_ccs_energy_twh: f64,
    pub interconnect_energy_twh: f64,
}

impl ResultRecord {
    pub fn new(r: &DailyResult, net_supply: f64) -> Self {
        Self {
            day: r.day,
            net_supply_twh: net_supply,
            medium_storage_level_twh: r.medium_storage_level,
            hydrogen_storage_level_twh: r.hydrogen_storage_level,
            dac_energy_twh: r.dac_energy,
            curtailed_energy_twh: r.curtailed_energy,
            energy_into_medium_storage_twh: r.energy_into_medium_storage,
            energy_into_hydrogen_storage_twh: r.energy_into_hydrogen_storage,
            gas_ccs_energy_twh: r.gas_ccs_energy,
            interconnect_energy_twh: r.interconnect_energy,
        }
    }
}

/// Optional day range for the results endpoint.
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    /// First day (inclusive).
    pub from: Option<usize>,
    /// Last day (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
