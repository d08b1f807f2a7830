use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::modules::bookings::core::client::ClientPolicy;
use crate::modules::passes::core::filter::PassFilter;
use crate::modules::scheduling::core::policy::{PriorityMap, SchedulerKind};
use crate::modules::scheduling::use_cases::run_simulation::command::RunSimulation;
use crate::modules::scheduling::use_cases::run_simulation::handler::SimulationError;
use crate::shell::state::AppState;

/// Missing fields fall back to the configured defaults. Unknown fields are refused.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSimulationBody {
    pub scheduler: Option<SchedulerKind>,
    pub seed: Option<u64>,
    pub client_policy: Option<ClientPolicy>,
    pub priority: Option<PriorityMap>,
    pub partitioned: Option<bool>,
    pub filter: Option<PassFilter>,
}

impl RunSimulationBody {
    pub fn into_command(self, defaults: &RunSimulation) -> RunSimulation {
        RunSimulation {
            scheduler: self.scheduler.unwrap_or(defaults.scheduler),
            seed: self.seed.unwrap_or(defaults.seed),
            client_policy: self.client_policy.unwrap_or(defaults.client_policy),
            priority: self.priority.unwrap_or_else(|| defaults.priority.clone()),
            partitioned: self.partitioned.unwrap_or(defaults.partitioned),
            filter: self.filter.unwrap_or_else(|| defaults.filter.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunSimulationResponse {
    pub run_id: Uuid,
    pub scheduler: SchedulerKind,
    pub submitted: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RunSimulationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = body.into_command(&state.defaults);
    match state.run_simulation.handle(command).await {
        Ok(report) => (
            StatusCode::CREATED,
            Json(RunSimulationResponse {
                run_id: report.run_id,
                scheduler: report.scheduler,
                submitted: report.summary.submitted,
                accepted: report.summary.accepted,
                rejected: report.summary.rejected,
            }),
        )
            .into_response(),
        Err(SimulationError::Scheduling(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "simulation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
