use crate::modules::bookings::core::request::Request;
use crate::shared::core::primitives::TimeInterval;
use serde::{Deserialize, Serialize};

/// Calendar entry created when a client accepts a request. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub interval: TimeInterval,
    pub request: Request,
}

impl BookingRecord {
    pub fn new(interval: TimeInterval, request: Request) -> Self {
        Self { interval, request }
    }
}
