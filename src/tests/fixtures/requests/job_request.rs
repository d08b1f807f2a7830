// Shared test fixture for job requests.
// The canonical request is the XW-2D pass over KB9JHU, loaded from json/job_request.json.

use crate::modules::bookings::core::request::{Bounty, Job, Request};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use uuid::Uuid;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequestDto {
    pub job: JobDto,
    pub bounty: Vec<BountyDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobDto {
    pub id: String,
    pub start: String,
    pub end: String,
    pub ground_station: String,
    pub tle0: String,
    pub tle1: String,
    pub tle2: String,
    pub frequency: u64,
    pub mode: String,
    pub transmitter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BountyDto {
    pub currency: String,
    pub amount: f64,
}

pub fn load_job_request_dto() -> JobRequestDto {
    let json_str =
        fs::read_to_string("./src/tests/fixtures/requests/json/job_request.json").unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn instant(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

pub struct RequestBuilder {
    inner: Request,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RequestBuilder {
    pub fn new() -> Self {
        let dto = load_job_request_dto();

        Self {
            inner: Request {
                job: Job {
                    id: dto.job.id.parse().unwrap(),
                    start: instant(&dto.job.start),
                    end: instant(&dto.job.end),
                    ground_station: dto.job.ground_station,
                    tle0: dto.job.tle0,
                    tle1: dto.job.tle1,
                    tle2: dto.job.tle2,
                    frequency: Some(dto.job.frequency),
                    mode: Some(dto.job.mode),
                    transmitter: Some(dto.job.transmitter),
                },
                bounty: dto
                    .bounty
                    .into_iter()
                    .map(|b| Bounty::new(b.currency, b.amount))
                    .collect(),
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.job.id = v;
        self
    }

    pub fn start(self, v: &str) -> Self {
        self.start_at(instant(v))
    }

    pub fn end(self, v: &str) -> Self {
        self.end_at(instant(v))
    }

    pub fn start_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.job.start = v;
        self
    }

    pub fn end_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.job.end = v;
        self
    }

    pub fn ground_station(mut self, v: impl Into<String>) -> Self {
        self.inner.job.ground_station = v.into();
        self
    }

    pub fn tle0(mut self, v: &str) -> Self {
        self.inner.job.tle0 = v.to_string();
        self
    }

    pub fn bounty(mut self, v: Vec<Bounty>) -> Self {
        self.inner.bounty = v;
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

#[cfg(test)]
mod job_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let dto = load_job_request_dto();
        let built = RequestBuilder::default().build();

        assert_eq!(built.job.id.to_string(), dto.job.id);
        assert_eq!(built.job.start, instant("2017-07-12T20:42:06Z"));
        assert_eq!(built.job.end, instant("2017-07-12T20:51:30Z"));
        assert_eq!(built.job.ground_station, "KB9JHU");
        assert_eq!(built.job.satellite(), "XW-2D");
        assert_eq!(built.job.frequency, Some(145_855_000));
        assert_eq!(built.job.mode.as_deref(), Some("CW"));
        assert_eq!(built.bounty, vec![Bounty::new("SNC", 10.0)]);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let id = Uuid::now_v7();
        let custom = RequestBuilder::new()
            .id(id)
            .start("2017-07-12T21:00:00Z")
            .end("2017-07-12T21:10:00Z")
            .ground_station("VU")
            .tle0("ISS (ZARYA)")
            .bounty(vec![Bounty::new("USD", 2.5)])
            .build();

        assert_eq!(custom.job.id, id);
        assert_eq!(custom.job.start, instant("2017-07-12T21:00:00Z"));
        assert_eq!(custom.job.end, instant("2017-07-12T21:10:00Z"));
        assert_eq!(custom.job.ground_station, "VU");
        assert_eq!(custom.job.tle0, "ISS (ZARYA)");
        assert_eq!(custom.bounty, vec![Bounty::new("USD", 2.5)]);
    }
}
