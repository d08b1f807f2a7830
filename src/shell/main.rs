use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use scheduling_bazaar::modules::passes::adapters::outbound::{
    json_file_pass_source::JsonFilePassSource,
    text_loaders::{load_satellite_catalog, load_stations},
};
use scheduling_bazaar::modules::scheduling::use_cases::run_simulation::report::SimulationReport;
use scheduling_bazaar::shared::infrastructure::result_store::in_memory::InMemoryResultStore;
use scheduling_bazaar::shell::config::{AppConfig, load_priority};
use scheduling_bazaar::shell::http::router;
use scheduling_bazaar::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let stations = load_stations(&config.stations_file).await?;
    let satellites = load_satellite_catalog(&config.tle_file).await?;
    let priority = load_priority(config.priority_file.as_deref()).await?;
    tracing::info!(
        stations = stations.len(),
        satellites = satellites.len(),
        passes_file = %config.passes_file.display(),
        "catalogs loaded"
    );

    let passes = Arc::new(JsonFilePassSource::new(&config.passes_file));
    let results = Arc::new(InMemoryResultStore::<SimulationReport>::with_capacity(
        config.result_capacity,
    ));
    let state = AppState::with_results(
        passes,
        results,
        stations,
        satellites,
        config.defaults(priority),
    );
    let app = router(state);

    tracing::info!("Simulation endpoint: http://{}/simulations", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
