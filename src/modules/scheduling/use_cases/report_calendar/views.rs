// Read models over a stored simulation report.

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::calendar::{BusyTime, Calendar};
use crate::modules::bookings::core::request::Bounty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingView {
    pub job_id: Uuid,
    pub ground_station: String,
    pub satellite: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub bounty: Vec<Bounty>,
}

impl From<&BookingRecord> for BookingView {
    fn from(booking: &BookingRecord) -> Self {
        Self {
            job_id: booking.request.job.id,
            ground_station: booking.request.job.ground_station.clone(),
            satellite: booking.request.job.satellite().to_string(),
            start: booking.interval.start(),
            end: booking.interval.end(),
            bounty: booking.request.bounty.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSummary {
    pub bookings: usize,
    pub busy_seconds: f64,
    pub value: BTreeMap<String, f64>,
    pub daily_busy_seconds: Vec<f64>,
}

/// Bookings overlapping the window in ascending start order. Missing bounds default to the
/// span of the calendar.
pub fn bookings_view(
    calendar: &Calendar,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<BookingView> {
    calendar
        .range_query(start, end)
        .into_iter()
        .map(BookingView::from)
        .collect()
}

pub fn summary_view(
    calendar: &Calendar,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    mode: BusyTime,
) -> CalendarSummary {
    CalendarSummary {
        bookings: calendar.range_query(start, end).len(),
        busy_seconds: calendar.busy_seconds(start, end, mode),
        value: calendar.value_by_currency(start, end),
        daily_busy_seconds: calendar.daily_busy_seconds(),
    }
}
