// Runs one scheduling simulation end to end.
//
// Flow
// - Load candidate passes from the pass source through the command's filter.
// - Build one fresh client per known station with the requested client policy.
// - Plan with the selected scheduler, then dispatch sequentially or per station. Planning and
//   dispatch run on the blocking pool so a long run never holds a runtime worker.
// - Snapshot the calendars into a report and store it under a new run id.
//
// A scheduling failure is returned as is and nothing is stored for the run.

use crate::modules::bookings::core::client::ClientProfile;
use crate::modules::passes::core::ports::{PassSource, PassSourceError};
use crate::modules::passes::core::satellite::SatelliteCatalog;
use crate::modules::scheduling::core::errors::SchedulingError;
use crate::modules::scheduling::use_cases::dispatch::{ClientMap, dispatch};
use crate::modules::scheduling::use_cases::dispatch_partitioned::dispatch_partitioned;
use crate::modules::scheduling::use_cases::run_simulation::command::RunSimulation;
use crate::modules::scheduling::use_cases::run_simulation::report::{SimulationReport, snapshot};
use crate::shared::infrastructure::result_store::{ResultStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{self, JoinError};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Source(#[from] PassSourceError),

    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("simulation task failed: {0}")]
    Interrupted(#[from] JoinError),
}

pub struct RunSimulationHandler {
    passes: Arc<dyn PassSource>,
    results: Arc<dyn ResultStore<SimulationReport>>,
    stations: Vec<ClientProfile>,
    satellites: Arc<SatelliteCatalog>,
}

impl RunSimulationHandler {
    pub fn new(
        passes: Arc<dyn PassSource>,
        results: Arc<dyn ResultStore<SimulationReport>>,
        stations: Vec<ClientProfile>,
        satellites: Arc<SatelliteCatalog>,
    ) -> Self {
        Self {
            passes,
            results,
            stations,
            satellites,
        }
    }

    pub async fn handle(
        &self,
        command: RunSimulation,
    ) -> Result<SimulationReport, SimulationError> {
        let passes = self.passes.load(&command.filter).await?;
        let candidates = passes.len();

        let clients: ClientMap = self
            .stations
            .iter()
            .map(|profile| {
                let client = command.client_policy.build(profile.clone());
                (profile.name.clone(), client)
            })
            .collect();

        let mut policy = command.scheduler.build(command.seed, &command.priority);
        let (scheduler, plan) = task::spawn_blocking(move || {
            let plan = policy.plan(&passes);
            (policy.name(), plan)
        })
        .await?;
        let planned = plan.len();
        info!(
            scheduler,
            candidates,
            planned,
            partitioned = command.partitioned,
            "simulation started"
        );

        let satellites = Arc::clone(&self.satellites);
        let (clients, result) = if command.partitioned {
            dispatch_partitioned(plan, clients, satellites).await
        } else {
            task::spawn_blocking(move || {
                let mut clients = clients;
                let result = dispatch(&plan, &mut clients, &satellites);
                (clients, result)
            })
            .await?
        };
        let summary = result?;

        let run_id = Uuid::now_v7();
        let report = SimulationReport {
            run_id,
            scheduler: command.scheduler,
            candidates,
            planned,
            summary,
            clients: snapshot(&clients),
        };
        self.results.save(run_id, report.clone()).await?;
        info!(
            %run_id,
            submitted = summary.submitted,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "simulation finished"
        );
        Ok(report)
    }
}
