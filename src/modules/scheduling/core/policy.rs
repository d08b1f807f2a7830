// Scheduling policies.
//
// Purpose
// - A policy turns the candidate passes into the ordered list of passes to offer. It never
//   talks to clients; `dispatch` submits the plan.
//
// Responsibilities
// - Pure ordering and pruning. Only the random policy carries state (its generator), which is
//   why `plan` takes `&mut self`.

use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::scheduling::core::end_start::EndStartScheduler;
use crate::modules::scheduling::core::orderings::{
    DurationScheduler, FirstScheduler, LastScheduler, RandomScheduler,
};
use crate::modules::scheduling::core::owner_preference::OwnerPreferenceScheduler;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ground station name to satellite ids, highest priority first.
pub type PriorityMap = BTreeMap<String, Vec<String>>;

pub trait SchedulingPolicy: Send {
    fn name(&self) -> &'static str;

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerKind {
    Random,
    #[default]
    First,
    Last,
    Duration,
    EndStart,
    OwnerPreference,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scheduler {0:?}")]
pub struct UnknownScheduler(pub String);

impl SchedulerKind {
    pub const ALL: [SchedulerKind; 6] = [
        SchedulerKind::Random,
        SchedulerKind::First,
        SchedulerKind::Last,
        SchedulerKind::Duration,
        SchedulerKind::EndStart,
        SchedulerKind::OwnerPreference,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchedulerKind::Random => "random",
            SchedulerKind::First => "first",
            SchedulerKind::Last => "last",
            SchedulerKind::Duration => "duration",
            SchedulerKind::EndStart => "end_start",
            SchedulerKind::OwnerPreference => "owner_preference",
        }
    }

    /// `seed` only affects the random policy, `priority` only the owner-preference one.
    pub fn build(self, seed: u64, priority: &PriorityMap) -> Box<dyn SchedulingPolicy> {
        match self {
            SchedulerKind::Random => Box::new(RandomScheduler::new(seed)),
            SchedulerKind::First => Box::new(FirstScheduler),
            SchedulerKind::Last => Box::new(LastScheduler),
            SchedulerKind::Duration => Box::new(DurationScheduler),
            SchedulerKind::EndStart => Box::new(EndStartScheduler),
            SchedulerKind::OwnerPreference => {
                Box::new(OwnerPreferenceScheduler::new(priority.clone()))
            }
        }
    }
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerKind {
    type Err = UnknownScheduler;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SchedulerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownScheduler(value.to_string()))
    }
}
