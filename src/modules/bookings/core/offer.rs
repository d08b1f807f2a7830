// Offer returned by a client in response to a request.
//
// Versioning
// - The serialized shape keeps the `status` tag ("accept" / "reject") so stored offers stay
//   readable by reporting tools.

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::request::{Bounty, Job};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("time overlap")]
    TimeOverlap,

    #[error("malformed interval: {0}")]
    MalformedInterval(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Offer {
    #[serde(rename = "accept")]
    Accepted { job: Job, fee: Vec<Bounty> },

    #[serde(rename = "reject")]
    Rejected {
        reason: RejectReason,
        conflicting_bookings: Vec<BookingRecord>,
    },
}

impl Offer {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Offer::Accepted { .. })
    }
}
