use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::scheduling::use_cases::report_calendar::inbound::http as report_http;
use crate::modules::scheduling::use_cases::run_simulation::inbound::http as simulation_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/simulations", post(simulation_http::handle))
        .route(
            "/simulations/{run_id}/clients/{name}/bookings",
            get(report_http::bookings),
        )
        .route(
            "/simulations/{run_id}/clients/{name}/summary",
            get(report_http::summary),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
