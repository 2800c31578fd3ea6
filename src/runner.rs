//! End-to-end run of one configured scenario: load inputs, simulate, summarise, price.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::ScenarioConfig;
use crate::costs::CostBreakdown;
use crate::io::import::{LoadError, read_interconnect_imports, read_net_supply};
use crate::sim::{
    ParameterError, ScenarioParameters, SimulationError, SimulationOutcome, SummaryMetrics,
    analyze, simulate,
};
use crate::supply::{NetSupplySeries, SupplyError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid scenario parameters: {0}")]
    Parameters(#[from] ParameterError),

    #[error("cannot load {what}: {source}")]
    Load {
        what: &'static str,
        #[source]
        source: LoadError,
    },

    #[error("cannot build net supply: {0}")]
    Supply(#[from] SupplyError),

    #[error("cannot simulate: {0}")]
    Simulation(#[from] SimulationError),

    #[error("supply.path is required for the csv source")]
    MissingSupplyPath,
}

/// Everything one scenario run produced.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub params: ScenarioParameters,
    pub net_supply: NetSupplySeries,
    pub outcome: SimulationOutcome,
    /// Present only for feasible runs.
    pub summary: Option<SummaryMetrics>,
    /// Present only for feasible runs.
    pub costs: Option<CostBreakdown>,
    /// Cost per MWh of demand, present only for feasible runs.
    pub energy_cost_gbp_per_mwh: Option<f64>,
}

/// Loads or generates the net-supply series a scenario asks for.
///
/// # Arguments
///
/// * `cfg` - Validated scenario configuration
/// * `csv_override` - Net-supply table to use instead of the configured source
///
/// # Errors
///
/// Returns [`RunError`] if the table cannot be read or the synthetic
/// settings are invalid.
pub fn load_net_supply(
    cfg: &ScenarioConfig,
    csv_override: Option<&Path>,
) -> Result<NetSupplySeries, RunError> {
    let csv_path = match (csv_override, cfg.supply.source.as_str()) {
        (Some(path), _) => Some(path),
        (None, "csv") => Some(
            cfg.supply
                .path
                .as_deref()
                .ok_or(RunError::MissingSupplyPath)?,
        ),
        (None, _) => None,
    };

    let mut series = match csv_path {
        Some(path) => read_net_supply(path, cfg.system.renewable_capacity_gw).map_err(|source| {
            RunError::Load {
                what: "net supply",
                source,
            }
        })?,
        None => cfg.synthetic_supply().generate(cfg.supply.days)?,
    };
    if series.len() > cfg.supply.days {
        series.truncate(cfg.supply.days);
    }
    Ok(series)
}

/// Builds parameters for a scenario, attaching interconnector imports when configured.
///
/// # Errors
///
/// Returns [`RunError`] for non-physical parameters or an unreadable imports file.
pub fn load_parameters(cfg: &ScenarioConfig) -> Result<ScenarioParameters, RunError> {
    let params = cfg.to_parameters()?;
    match &cfg.interconnect.path {
        Some(path) => {
            let imports = read_interconnect_imports(path, &cfg.interconnect.column).map_err(
                |source| RunError::Load {
                    what: "interconnector imports",
                    source,
                },
            )?;
            Ok(params.with_interconnect_imports(imports))
        }
        None => Ok(params),
    }
}

/// Simulates a configured scenario on a given series and summarises the outcome.
///
/// # Errors
///
/// Returns [`RunError`] if the inputs are rejected before the day loop.
pub fn run_with_series(
    cfg: &ScenarioConfig,
    params: ScenarioParameters,
    net_supply: NetSupplySeries,
) -> Result<ScenarioRun, RunError> {
    let outcome = simulate(net_supply.as_slice(), &params)?;
    let summary = analyze(&outcome, &params, cfg.analysis.dac_twh_per_mt_co2());

    match outcome.infeasible_day() {
        Some(day) => warn!(day, "scenario is infeasible"),
        None => info!(days = net_supply.len(), "scenario is feasible"),
    }

    let costs = summary
        .as_ref()
        .map(|s| cfg.costs.breakdown(&params, s));
    let energy_cost_gbp_per_mwh = summary
        .as_ref()
        .map(|s| cfg.costs.energy_cost(&params, s));

    Ok(ScenarioRun {
        params,
        net_supply,
        outcome,
        summary,
        costs,
        energy_cost_gbp_per_mwh,
    })
}

/// Runs a configured scenario end to end.
///
/// # Errors
///
/// Returns [`RunError`] if any input cannot be loaded or is rejected.
pub fn run_scenario(
    cfg: &ScenarioConfig,
    csv_override: Option<&Path>,
) -> Result<ScenarioRun, RunError> {
    let params = load_parameters(cfg)?;
    let net_supply = load_net_supply(cfg, csv_override)?;
    run_with_series(cfg, params, net_supply)
}
