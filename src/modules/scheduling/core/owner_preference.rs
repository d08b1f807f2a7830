// Owner-preference pruning.
//
// Purpose
// - Let station owners rank satellites. On a prioritized station, a pass of a ranked satellite
//   evicts every pass overlapping it before anything is offered, so lower-ranked passes never
//   reach the client.
//
// Plan
// - Passes on stations without a ranking first, by start.
// - Then each ranked station's surviving passes by start, stations in name order.

use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::scheduling::core::policy::{PriorityMap, SchedulingPolicy};
use crate::shared::core::interval_set::{EntryId, IntervalSet};
use std::collections::BTreeMap;
use tracing::debug;

pub struct OwnerPreferenceScheduler {
    priority: PriorityMap,
}

impl OwnerPreferenceScheduler {
    pub fn new(priority: PriorityMap) -> Self {
        Self { priority }
    }
}

#[derive(Default)]
struct WorkingSet {
    passes: IntervalSet<PassRecord>,
    by_satellite: BTreeMap<String, Vec<EntryId>>,
}

impl SchedulingPolicy for OwnerPreferenceScheduler {
    fn name(&self) -> &'static str {
        "owner_preference"
    }

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord> {
        let mut working: BTreeMap<&str, WorkingSet> = self
            .priority
            .keys()
            .map(|station| (station.as_str(), WorkingSet::default()))
            .collect();
        let mut others = Vec::new();

        for pass in passes {
            match working.get_mut(pass.ground_station.as_str()) {
                Some(set) => {
                    let id = set.passes.insert(pass.interval, pass.clone());
                    set.by_satellite
                        .entry(pass.satellite.clone())
                        .or_default()
                        .push(id);
                }
                None => others.push(pass.clone()),
            }
        }

        for (station, set) in working.iter_mut() {
            let ranking = self
                .priority
                .get(*station)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            for satellite in ranking {
                let Some(ids) = set.by_satellite.get(satellite) else {
                    continue;
                };
                for id in ids {
                    // An earlier trigger may already have evicted this pass.
                    let Some(interval) = set.passes.get(*id).map(|entry| entry.interval) else {
                        continue;
                    };
                    let evicted = set.passes.remove_overlapping(&interval, Some(*id));
                    if !evicted.is_empty() {
                        debug!(
                            station = %station,
                            satellite = %satellite,
                            evicted = evicted.len(),
                            "pruned passes overlapping a preferred satellite"
                        );
                    }
                }
            }
        }

        others.sort_by_key(|pass| pass.interval.start());
        let mut plan = others;
        for set in working.into_values() {
            plan.extend(set.passes.iter().map(|entry| entry.value.clone()));
        }
        plan
    }
}
