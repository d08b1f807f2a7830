// Order-only schedulers: every candidate pass is offered, only the order changes.

use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::scheduling::core::policy::SchedulingPolicy;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;

/// Uniformly shuffled order; the same seed yields the same order.
pub struct RandomScheduler {
    rng: ChaCha8Rng,
}

impl RandomScheduler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl SchedulingPolicy for RandomScheduler {
    fn name(&self) -> &'static str {
        "random"
    }

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord> {
        let mut plan = passes.to_vec();
        plan.shuffle(&mut self.rng);
        plan
    }
}

/// Ascending start, ties by ascending end.
pub struct FirstScheduler;

impl SchedulingPolicy for FirstScheduler {
    fn name(&self) -> &'static str {
        "first"
    }

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord> {
        let mut plan = passes.to_vec();
        plan.sort_by_key(|pass| (pass.interval.start(), pass.interval.end()));
        plan
    }
}

/// Descending end.
pub struct LastScheduler;

impl SchedulingPolicy for LastScheduler {
    fn name(&self) -> &'static str {
        "last"
    }

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord> {
        let mut plan = passes.to_vec();
        plan.sort_by_key(|pass| Reverse(pass.interval.end()));
        plan
    }
}

/// Longest pass first.
pub struct DurationScheduler;

impl SchedulingPolicy for DurationScheduler {
    fn name(&self) -> &'static str {
        "duration"
    }

    fn plan(&mut self, passes: &[PassRecord]) -> Vec<PassRecord> {
        let mut plan = passes.to_vec();
        plan.sort_by_key(|pass| Reverse(pass.interval.duration()));
        plan
    }
}
