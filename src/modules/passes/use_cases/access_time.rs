// Access-time analysis over a set of passes.
//
// - Total access is the sum of raw pass durations.
// - Daily access covers every day from the midnight of the earliest start to the midnight of
//   the latest end. A pass counts in full toward each day it touches.

use crate::modules::passes::core::pass_record::PassRecord;
use crate::shared::core::interval_set::IntervalSet;
use crate::shared::core::primitives::day_windows;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessTime {
    pub total_seconds: f64,
    pub daily_seconds: Vec<f64>,
}

pub fn access_time(passes: &[PassRecord]) -> AccessTime {
    let index: IntervalSet<()> = passes.iter().map(|pass| (pass.interval, ())).collect();
    let (Some(first), Some(last)) = (index.begin(), index.end()) else {
        return AccessTime::default();
    };

    let daily_seconds = day_windows(first, last)
        .into_iter()
        .map(|(day, next)| {
            index
                .range_query(Some(day), Some(next))
                .into_iter()
                .map(|entry| entry.interval.duration_seconds())
                .sum()
        })
        .collect();

    AccessTime {
        total_seconds: passes.iter().map(PassRecord::duration_seconds).sum(),
        daily_seconds,
    }
}
