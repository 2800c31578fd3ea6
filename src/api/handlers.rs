//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, ResultRecord, ResultsQuery, SummaryResponse};

/// Returns parameters, summary, costs and the last simulated day.
///
/// `GET /summary` → 200 + `SummaryResponse` JSON
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        parameters: state.params.clone(),
        feasible: state.infeasible_day.is_none(),
        infeasible_day: state.infeasible_day,
        summary: state.summary.clone(),
        costs: state.costs,
        energy_cost_gbp_per_mwh: state.energy_cost_gbp_per_mwh,
        latest_day: state.results.last().map(|r| state.record(r)),
    })
}

/// Returns per-day records, optionally filtered by day range.
///
/// `GET /results` → 200 + `Vec<ResultRecord>` JSON
/// `GET /results?from=N&to=M` → filtered range (inclusive)
/// `GET /results?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResultsQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let records: Vec<ResultRecord> = state
        .results
        .iter()
        .filter(|r| r.day >= from && r.day <= to)
        .map(|r| state.record(r))
        .collect();

    Ok(Json(records))
}
