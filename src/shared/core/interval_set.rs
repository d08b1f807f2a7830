// Interval-indexed container.
//
// Purpose
// - Store (TimeInterval, value) entries and answer half-open overlap and range queries.
//
// Responsibilities
// - Entries are kept in a BTreeMap ordered by (start, id). The set remembers the longest
//   interval it has ever held, so an overlap search only walks the starts that fall in
//   (query.start - longest, query.end). Passes and bookings are short, which keeps that
//   walk at O(log n + k).
// - No uniqueness or overlap check on insert. Overlap prevention belongs to client policies.

use crate::shared::core::primitives::TimeInterval;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound::Excluded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: EntryId,
    pub interval: TimeInterval,
    pub value: T,
}

#[derive(Debug, Clone)]
pub struct IntervalSet<T> {
    entries: BTreeMap<(DateTime<Utc>, EntryId), Entry<T>>,
    starts: HashMap<EntryId, DateTime<Utc>>,
    // Never shrinks on removal; an upper bound is enough for the search window.
    longest: TimeDelta,
    next_id: u64,
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            starts: HashMap::new(),
            longest: TimeDelta::zero(),
            next_id: 0,
        }
    }
}

impl<T> IntervalSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, interval: TimeInterval, value: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.longest = self.longest.max(interval.duration());
        self.starts.insert(id, interval.start());
        self.entries
            .insert((interval.start(), id), Entry { id, interval, value });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.starts.contains_key(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry<T>> {
        let start = self.starts.get(&id)?;
        self.entries.get(&(*start, id))
    }

    pub fn remove(&mut self, id: EntryId) -> Option<Entry<T>> {
        let start = self.starts.remove(&id)?;
        self.entries.remove(&(start, id))
    }

    /// Entries in ascending start order; equal starts keep insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.values()
    }

    /// Earliest start of any entry.
    pub fn begin(&self) -> Option<DateTime<Utc>> {
        self.entries.keys().next().map(|(start, _)| *start)
    }

    /// Latest end of any entry.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        let (last_start, _) = self.entries.keys().next_back()?;
        // Whatever ends last must start within `longest` of the last start.
        let floor = last_start
            .checked_sub_signed(self.longest)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.entries
            .range((floor, EntryId(0))..)
            .map(|(_, entry)| entry.interval.end())
            .max()
    }

    pub fn overlaps(&self, interval: &TimeInterval) -> Vec<&Entry<T>> {
        self.search(interval.start(), interval.end())
    }

    /// Overlap query whose missing bounds default to the span of the set.
    pub fn range_query(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Vec<&Entry<T>> {
        let (Some(start), Some(end)) = (start.or_else(|| self.begin()), end.or_else(|| self.end()))
        else {
            return Vec::new();
        };
        self.search(start, end)
    }

    /// Removes every entry overlapping `interval` except `keep`.
    pub fn remove_overlapping(
        &mut self,
        interval: &TimeInterval,
        keep: Option<EntryId>,
    ) -> Vec<Entry<T>> {
        let doomed: Vec<EntryId> = self
            .overlaps(interval)
            .into_iter()
            .map(|entry| entry.id)
            .filter(|id| Some(*id) != keep)
            .collect();
        doomed.into_iter().filter_map(|id| self.remove(id)).collect()
    }

    fn search(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Entry<T>> {
        if start >= end || self.entries.is_empty() {
            return Vec::new();
        }
        let floor = start
            .checked_sub_signed(self.longest)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.entries
            .range((
                Excluded((floor, EntryId(u64::MAX))),
                Excluded((end, EntryId(0))),
            ))
            .map(|(_, entry)| entry)
            .filter(|entry| entry.interval.overlaps_range(start, end))
            .collect()
    }
}

impl<T> FromIterator<(TimeInterval, T)> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = (TimeInterval, T)>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        for (interval, value) in iter {
            set.insert(interval, value);
        }
        set
    }
}
