// Client calendar: the authoritative set of accepted bookings.
//
// Purpose
// - Interval-indexed storage of BookingRecords plus the aggregations reports rely on.
//
// Busy time
// - Comparative studies were produced by summing the full duration of every booking that
//   overlaps the query window, even when it only partially overlaps. That remains the default
//   (`BusyTime::Unclipped`). `BusyTime::Clipped` counts only the part inside the window.

use crate::modules::bookings::core::booking::BookingRecord;
use crate::shared::core::interval_set::{EntryId, IntervalSet};
use crate::shared::core::primitives::{TimeInterval, day_windows, seconds_between};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyTime {
    #[default]
    Unclipped,
    Clipped,
}

#[derive(Debug, Clone, Default)]
pub struct Calendar {
    bookings: IntervalSet<BookingRecord>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, booking: BookingRecord) -> EntryId {
        let interval = booking.interval;
        self.bookings.insert(interval, booking)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Bookings in ascending start order.
    pub fn iter(&self) -> impl Iterator<Item = &BookingRecord> {
        self.bookings.iter().map(|entry| &entry.value)
    }

    pub fn begin(&self) -> Option<DateTime<Utc>> {
        self.bookings.begin()
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.bookings.end()
    }

    pub fn overlaps(&self, interval: &TimeInterval) -> Vec<&BookingRecord> {
        self.bookings
            .overlaps(interval)
            .into_iter()
            .map(|entry| &entry.value)
            .collect()
    }

    pub fn range_query(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Vec<&BookingRecord> {
        self.bookings
            .range_query(start, end)
            .into_iter()
            .map(|entry| &entry.value)
            .collect()
    }

    pub fn total_busy_seconds(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> f64 {
        self.busy_seconds(start, end, BusyTime::Unclipped)
    }

    pub fn busy_seconds(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        mode: BusyTime,
    ) -> f64 {
        let (Some(start), Some(end)) = (start.or_else(|| self.begin()), end.or_else(|| self.end()))
        else {
            return 0.0;
        };
        self.range_query(Some(start), Some(end))
            .into_iter()
            .map(|booking| match mode {
                BusyTime::Unclipped => booking.interval.duration_seconds(),
                BusyTime::Clipped => seconds_between(
                    booking.interval.start().max(start),
                    booking.interval.end().min(end),
                ),
            })
            .sum()
    }

    /// Un-clipped busy seconds for every day from the first booking's midnight to the
    /// last booking's midnight.
    pub fn daily_busy_seconds(&self) -> Vec<f64> {
        let (Some(first), Some(last)) = (self.begin(), self.end()) else {
            return Vec::new();
        };
        day_windows(first, last)
            .into_iter()
            .map(|(day, next)| self.total_busy_seconds(Some(day), Some(next)))
            .collect()
    }

    pub fn value_by_currency(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> BTreeMap<String, f64> {
        let mut value = BTreeMap::new();
        for booking in self.range_query(start, end) {
            for unit in &booking.request.bounty {
                *value.entry(unit.currency.clone()).or_insert(0.0) += unit.amount;
            }
        }
        value
    }

    pub fn calendar_value(&self) -> BTreeMap<String, f64> {
        self.value_by_currency(None, None)
    }
}
