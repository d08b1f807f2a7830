// Sequential dispatch of a plan.
//
// Responsibilities
// - Exactly one request per planned pass, to the client named by the pass's ground station,
//   in plan order.
// - A missing client or satellite aborts the run. Bookings already made stay in place and the
//   error reports how many passes had been submitted and accepted.

use crate::modules::bookings::core::client::Client;
use crate::modules::bookings::core::offer::Offer;
use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::passes::core::satellite::SatelliteCatalog;
use crate::modules::scheduling::core::errors::SchedulingError;
use crate::modules::scheduling::core::policy::SchedulingPolicy;
use crate::modules::scheduling::use_cases::build_request::build_request;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Clients keyed by ground station name.
pub type ClientMap = BTreeMap<String, Box<dyn Client>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub submitted: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl DispatchSummary {
    fn record(&mut self, offer: &Offer) {
        self.submitted += 1;
        if offer.is_accepted() {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }

    pub fn merge(&mut self, other: DispatchSummary) {
        self.submitted += other.submitted;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
    }
}

fn offer_pass(
    pass: &PassRecord,
    client: &mut dyn Client,
    satellites: &SatelliteCatalog,
    summary: &mut DispatchSummary,
) -> Result<(), SchedulingError> {
    let satellite =
        satellites
            .get(&pass.satellite)
            .ok_or_else(|| SchedulingError::UnknownSatellite {
                satellite: pass.satellite.clone(),
                submitted: summary.submitted,
                accepted: summary.accepted,
            })?;
    let offer = client.request(build_request(pass, satellite));
    debug!(
        station = %pass.ground_station,
        satellite = %pass.satellite,
        start = %pass.interval.start(),
        accepted = offer.is_accepted(),
        "offer"
    );
    summary.record(&offer);
    Ok(())
}

pub fn dispatch(
    plan: &[PassRecord],
    clients: &mut ClientMap,
    satellites: &SatelliteCatalog,
) -> Result<DispatchSummary, SchedulingError> {
    let mut summary = DispatchSummary::default();
    for pass in plan {
        let client = clients.get_mut(&pass.ground_station).ok_or_else(|| {
            SchedulingError::UnknownGroundStation {
                station: pass.ground_station.clone(),
                submitted: summary.submitted,
                accepted: summary.accepted,
            }
        })?;
        offer_pass(pass, client.as_mut(), satellites, &mut summary)?;
    }
    Ok(summary)
}

/// Dispatches a plan whose passes all belong to `client`'s station.
pub fn dispatch_to_client(
    plan: &[PassRecord],
    client: &mut dyn Client,
    satellites: &SatelliteCatalog,
) -> Result<DispatchSummary, SchedulingError> {
    let mut summary = DispatchSummary::default();
    for pass in plan {
        if pass.ground_station != client.name() {
            return Err(SchedulingError::UnknownGroundStation {
                station: pass.ground_station.clone(),
                submitted: summary.submitted,
                accepted: summary.accepted,
            });
        }
        offer_pass(pass, client, satellites, &mut summary)?;
    }
    Ok(summary)
}

/// Plans with `policy` and dispatches the plan sequentially.
pub fn schedule(
    policy: &mut dyn SchedulingPolicy,
    passes: &[PassRecord],
    clients: &mut ClientMap,
    satellites: &SatelliteCatalog,
) -> Result<DispatchSummary, SchedulingError> {
    let plan = policy.plan(passes);
    info!(
        scheduler = policy.name(),
        candidates = passes.len(),
        planned = plan.len(),
        "dispatching plan"
    );
    dispatch(&plan, clients, satellites)
}
