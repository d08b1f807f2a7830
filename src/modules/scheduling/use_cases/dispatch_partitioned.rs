// Partitioned dispatch: one blocking worker per ground station.
//
// Responsibilities
// - Split the plan per station keeping plan order, after any pruning done by the policy.
// - Every station is checked against the clients before a worker starts, so an unknown station
//   aborts with nothing submitted.
// - Each worker owns its client for the duration of the run and gives it back when joined,
//   also when the client panics. Nothing mutable is shared; the satellite catalog is read
//   through an Arc.
// - A failing worker does not stop the others. The reported error is the one from the first
//   failing station in name order, carrying the totals of all workers.

use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::passes::core::satellite::SatelliteCatalog;
use crate::modules::scheduling::core::errors::SchedulingError;
use crate::modules::scheduling::use_cases::dispatch::{
    ClientMap, DispatchSummary, dispatch_to_client,
};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|reason| reason.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker panicked".to_string())
}

pub async fn dispatch_partitioned(
    plan: Vec<PassRecord>,
    mut clients: ClientMap,
    satellites: Arc<SatelliteCatalog>,
) -> (ClientMap, Result<DispatchSummary, SchedulingError>) {
    if let Some(pass) = plan
        .iter()
        .find(|pass| !clients.contains_key(&pass.ground_station))
    {
        let error = SchedulingError::UnknownGroundStation {
            station: pass.ground_station.clone(),
            submitted: 0,
            accepted: 0,
        };
        return (clients, Err(error));
    }

    let mut partitions: BTreeMap<String, Vec<PassRecord>> = BTreeMap::new();
    for pass in plan {
        partitions
            .entry(pass.ground_station.clone())
            .or_default()
            .push(pass);
    }
    info!(workers = partitions.len(), "dispatching partitioned plan");

    let mut workers = JoinSet::new();
    let mut stations = HashMap::new();
    for (station, passes) in partitions {
        let Some(mut client) = clients.remove(&station) else {
            continue;
        };
        let satellites = Arc::clone(&satellites);
        let name = station.clone();
        let handle = workers.spawn_blocking(move || {
            let result = catch_unwind(AssertUnwindSafe(|| {
                dispatch_to_client(&passes, client.as_mut(), &satellites)
            }))
            .unwrap_or_else(|payload| {
                Err(SchedulingError::Worker {
                    station: name.clone(),
                    reason: panic_reason(&*payload),
                    submitted: 0,
                    accepted: 0,
                })
            });
            (name, client, result)
        });
        stations.insert(handle.id(), station);
    }

    let mut total = DispatchSummary::default();
    let mut failures: BTreeMap<String, SchedulingError> = BTreeMap::new();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok((station, client, result)) => {
                match result {
                    Ok(summary) => total.merge(summary),
                    Err(error) => {
                        let (submitted, accepted) = error.progress();
                        total.merge(DispatchSummary {
                            submitted,
                            accepted,
                            rejected: submitted - accepted,
                        });
                        warn!(station = %station, %error, "partition worker stopped");
                        failures.insert(station.clone(), error);
                    }
                }
                clients.insert(station, client);
            }
            Err(join_error) => {
                let station = stations.remove(&join_error.id()).unwrap_or_default();
                warn!(station = %station, %join_error, "partition worker lost");
                let error = SchedulingError::Worker {
                    reason: join_error.to_string(),
                    station: station.clone(),
                    submitted: 0,
                    accepted: 0,
                };
                failures.insert(station, error);
            }
        }
    }

    let result = match failures.into_values().next() {
        None => Ok(total),
        Some(error) => Err(error.with_progress(total.submitted, total.accepted)),
    };
    (clients, result)
}
