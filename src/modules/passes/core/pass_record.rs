// Predicted contact opportunity between a ground station and a satellite.
//
// Purpose
// - Immutable input of every scheduler. Produced outside this crate by pass prediction.
//
// Storage shape
// - Records serialize as `PassRow`, the column layout of the pre-computed passes table:
//   start, end, duration, rise_az, set_az, tca, max_el, gs, sat.
// - Duplicate predictions may coexist; nothing here enforces uniqueness.

use crate::shared::core::primitives::{DomainError, TimeInterval};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PassRow", into = "PassRow")]
pub struct PassRecord {
    pub interval: TimeInterval,
    pub ground_station: String,
    pub satellite: String,
    pub rise_azimuth: f64,
    pub set_azimuth: f64,
    pub tca: DateTime<Utc>,
    pub max_elevation: f64,
}

impl PassRecord {
    pub fn duration_seconds(&self) -> f64 {
        self.interval.duration_seconds()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassRow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration: f64,
    pub rise_az: f64,
    pub set_az: f64,
    pub tca: DateTime<Utc>,
    pub max_el: f64,
    pub gs: String,
    pub sat: String,
}

impl TryFrom<PassRow> for PassRecord {
    type Error = DomainError;

    fn try_from(row: PassRow) -> Result<Self, Self::Error> {
        Ok(Self {
            interval: TimeInterval::new(row.start, row.end)?,
            ground_station: row.gs,
            satellite: row.sat,
            rise_azimuth: row.rise_az,
            set_azimuth: row.set_az,
            tca: row.tca,
            max_elevation: row.max_el,
        })
    }
}

impl From<PassRecord> for PassRow {
    fn from(pass: PassRecord) -> Self {
        Self {
            start: pass.interval.start(),
            end: pass.interval.end(),
            duration: pass.interval.duration_seconds(),
            rise_az: pass.rise_azimuth,
            set_az: pass.set_azimuth,
            tca: pass.tca,
            max_el: pass.max_elevation,
            gs: pass.ground_station,
            sat: pass.satellite,
        }
    }
}
