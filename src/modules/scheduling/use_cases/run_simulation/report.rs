use crate::modules::bookings::core::calendar::Calendar;
use crate::modules::bookings::core::client::ClientProfile;
use crate::modules::scheduling::core::policy::SchedulerKind;
use crate::modules::scheduling::use_cases::dispatch::{ClientMap, DispatchSummary};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ClientSnapshot {
    pub profile: ClientProfile,
    pub calendar: Calendar,
}

/// Outcome of one simulation run: counters plus every client's final calendar.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub scheduler: SchedulerKind,
    pub candidates: usize,
    pub planned: usize,
    pub summary: DispatchSummary,
    pub clients: BTreeMap<String, ClientSnapshot>,
}

pub fn snapshot(clients: &ClientMap) -> BTreeMap<String, ClientSnapshot> {
    clients
        .iter()
        .map(|(name, client)| {
            (
                name.clone(),
                ClientSnapshot {
                    profile: client.profile().clone(),
                    calendar: client.calendar().clone(),
                },
            )
        })
        .collect()
}
