// Earliest-start sweep.
//
// For each ground station, in name order, a cursor starts at the station's earliest pass
// start. The next pass offered is the one starting earliest at or after the cursor (ties by
// earliest end, then input order) and the cursor moves to its end. Offering the plan to clients
// that only accept free time books exactly what the first-come order books.

use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::scheduling::core::policy::SchedulingPolicy;
use std::collections::BTreeMap;

pub struct EndStartScheduler;

impl SchedulingPolicy for EndStartScheduler {
    fn name(&self) -> &'static str {
        "end_start"
    }

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord> {
        let mut per_station: BTreeMap<&str, Vec<&PassRecord>> = BTreeMap::new();
        for pass in passes {
            per_station
                .entry(pass.ground_station.as_str())
                .or_default()
                .push(pass);
        }

        let mut plan = Vec::new();
        for (_, mut station_passes) in per_station {
            station_passes.sort_by_key(|pass| (pass.interval.start(), pass.interval.end()));
            let mut cursor = None;
            for pass in station_passes {
                if cursor.is_none_or(|at| pass.interval.start() >= at) {
                    cursor = Some(pass.interval.end());
                    plan.push(pass.clone());
                }
            }
        }
        plan
    }
}
