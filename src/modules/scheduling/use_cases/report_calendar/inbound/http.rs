use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::bookings::core::calendar::BusyTime;
use crate::modules::scheduling::use_cases::report_calendar::views::{bookings_view, summary_view};
use crate::modules::scheduling::use_cases::run_simulation::report::{
    ClientSnapshot, SimulationReport,
};
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clipped: bool,
}

async fn find_report(state: &AppState, run_id: Uuid) -> Result<Arc<SimulationReport>, Response> {
    match state.results.load(run_id).await {
        Ok(Some(report)) => Ok(report),
        Ok(None) => Err(StatusCode::NOT_FOUND.into_response()),
        Err(e) => {
            error!(error = %e, %run_id, "loading simulation report failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

fn find_client<'a>(
    report: &'a SimulationReport,
    name: &str,
) -> Result<&'a ClientSnapshot, Response> {
    report
        .clients
        .get(name)
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())
}

pub async fn bookings(
    State(state): State<AppState>,
    Path((run_id, name)): Path<(Uuid, String)>,
    Query(range): Query<RangeParams>,
) -> Response {
    let report = match find_report(&state, run_id).await {
        Ok(report) => report,
        Err(response) => return response,
    };
    match find_client(&report, &name) {
        Ok(client) => Json(bookings_view(&client.calendar, range.start, range.end)).into_response(),
        Err(response) => response,
    }
}

pub async fn summary(
    State(state): State<AppState>,
    Path((run_id, name)): Path<(Uuid, String)>,
    Query(range): Query<RangeParams>,
) -> Response {
    let report = match find_report(&state, run_id).await {
        Ok(report) => report,
        Err(response) => return response,
    };
    let mode = if range.clipped {
        BusyTime::Clipped
    } else {
        BusyTime::Unclipped
    };
    match find_client(&report, &name) {
        Ok(client) => {
            Json(summary_view(&client.calendar, range.start, range.end, mode)).into_response()
        }
        Err(response) => response,
    }
}
