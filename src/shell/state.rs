use crate::modules::bookings::core::client::ClientProfile;
use crate::modules::passes::core::ports::PassSource;
use crate::modules::passes::core::satellite::SatelliteCatalog;
use crate::modules::scheduling::use_cases::run_simulation::command::RunSimulation;
use crate::modules::scheduling::use_cases::run_simulation::handler::RunSimulationHandler;
use crate::modules::scheduling::use_cases::run_simulation::report::SimulationReport;
use crate::shared::infrastructure::result_store::ResultStore;
use crate::shared::infrastructure::result_store::in_memory::InMemoryResultStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub run_simulation: Arc<RunSimulationHandler>,
    pub results: Arc<dyn ResultStore<SimulationReport>>,
    pub defaults: RunSimulation,
}

impl AppState {
    /// Wires the handler over `passes` with a default in-memory result store.
    pub fn new(
        passes: Arc<dyn PassSource>,
        stations: Vec<ClientProfile>,
        satellites: SatelliteCatalog,
        defaults: RunSimulation,
    ) -> Self {
        let results = Arc::new(InMemoryResultStore::<SimulationReport>::new());
        Self::with_results(passes, results, stations, satellites, defaults)
    }

    pub fn with_results(
        passes: Arc<dyn PassSource>,
        results: Arc<dyn ResultStore<SimulationReport>>,
        stations: Vec<ClientProfile>,
        satellites: SatelliteCatalog,
        defaults: RunSimulation,
    ) -> Self {
        let run_simulation = Arc::new(RunSimulationHandler::new(
            passes,
            results.clone(),
            stations,
            Arc::new(satellites),
        ));
        Self {
            run_simulation,
            results,
            defaults,
        }
    }
}
