// Job request sent to a client.
//
// Purpose
// - Carry the job a client is asked to perform and the bounty offered for it.
//
// Notes
// - The job id is assigned when the request is built, never when the pass is predicted.
// - Start and end are validated lazily through `interval()` so a malformed request can
//   still be represented and rejected by a client.

use crate::shared::core::primitives::{DomainError, TimeInterval};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounty {
    pub currency: String,
    pub amount: f64,
}

impl Bounty {
    pub fn new(currency: impl Into<String>, amount: f64) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub ground_station: String,
    pub tle0: String,
    pub tle1: String,
    pub tle2: String,
    pub frequency: Option<u64>,
    pub mode: Option<String>,
    pub transmitter: Option<String>,
}

impl Job {
    pub fn interval(&self) -> Result<TimeInterval, DomainError> {
        TimeInterval::new(self.start, self.end)
    }

    /// Satellite name as carried by the first TLE line.
    pub fn satellite(&self) -> &str {
        self.tle0.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub job: Job,
    pub bounty: Vec<Bounty>,
}

impl Request {
    pub fn interval(&self) -> Result<TimeInterval, DomainError> {
        self.job.interval()
    }
}
