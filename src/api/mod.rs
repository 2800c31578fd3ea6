//! REST API over a finished scenario run.
//!
//! Provides two GET endpoints:
//! - `/summary`: parameters, summary metrics, costs and the last day
//! - `/results`: per-day records with optional day-range filtering

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::costs::CostBreakdown;
use crate::runner::ScenarioRun;
use crate::sim::{DailyResult, ScenarioParameters, SummaryMetrics};

pub use types::{ErrorResponse, ResultRecord, ResultsQuery, SummaryResponse};

/// Immutable application state shared across all request handlers.
///
/// Built once after the run completes and wrapped in `Arc`; handlers
/// only read it.
pub struct AppState {
    /// Parameters the run was simulated under.
    pub params: ScenarioParameters,
    /// Annual summary; `None` for an infeasible run.
    pub summary: Option<SummaryMetrics>,
    /// Yearly cost breakdown; `None` for an infeasible run.
    pub costs: Option<CostBreakdown>,
    /// Cost per MWh of demand; `None` for an infeasible run.
    pub energy_cost_gbp_per_mwh: Option<f64>,
    /// First uncovered day of an infeasible run.
    pub infeasible_day: Option<usize>,
    /// Per-day records; empty for an infeasible run.
    pub results: Vec<DailyResult>,
    /// Net supply the run was simulated on (TWh/day).
    pub net_supply: Vec<f64>,
}

impl AppState {
    /// Takes ownership of a finished run.
    pub fn from_run(run: ScenarioRun) -> Self {
        let infeasible_day = run.outcome.infeasible_day();
        let results = run.outcome.results().map(<[_]>::to_vec).unwrap_or_default();
        Self {
            params: run.params,
            summary: run.summary,
            costs: run.costs,
            energy_cost_gbp_per_mwh: run.energy_cost_gbp_per_mwh,
            infeasible_day,
            results,
            net_supply: run.net_supply.as_slice().to_vec(),
        }
    }

    fn record(&self, r: &DailyResult) -> ResultRecord {
        let net = self.net_supply.get(r.day).copied().unwrap_or(0.0);
        ResultRecord::new(r, net)
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summary", get(handlers::get_summary))
        .route("/results", get(handlers::get_results))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
