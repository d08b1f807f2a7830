use crate::modules::bookings::core::client::ClientPolicy;
use crate::modules::passes::core::filter::PassFilter;
use crate::modules::scheduling::core::policy::{PriorityMap, SchedulerKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSimulation {
    pub scheduler: SchedulerKind,
    pub seed: u64,
    pub client_policy: ClientPolicy,
    pub priority: PriorityMap,
    pub partitioned: bool,
    pub filter: PassFilter,
}
