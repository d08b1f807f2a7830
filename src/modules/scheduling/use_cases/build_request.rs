use crate::modules::bookings::core::request::{Bounty, Job, Request};
use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::passes::core::satellite::Satellite;
use uuid::Uuid;

/// Currency of simulated bounties (SatNOGS credits).
pub const SIMULATION_CURRENCY: &str = "SNC";

/// Turns a planned pass into the request sent to its station. Simulated jobs carry no
/// frequency, mode or transmitter, and offer one SNC per second of pass.
pub fn build_request(pass: &PassRecord, satellite: &Satellite) -> Request {
    let [tle0, tle1, tle2] = satellite.tle.clone();
    Request {
        job: Job {
            id: Uuid::now_v7(),
            start: pass.interval.start(),
            end: pass.interval.end(),
            ground_station: pass.ground_station.clone(),
            tle0,
            tle1,
            tle2,
            frequency: None,
            mode: None,
            transmitter: None,
        },
        bounty: vec![Bounty::new(SIMULATION_CURRENCY, pass.duration_seconds())],
    }
}
