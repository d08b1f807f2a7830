// Ground-station clients.
//
// Purpose
// - A client owns exactly one calendar and answers requests one at a time.
//
// Responsibilities
// - `request` is the only externally visible operation. It decides with the pure decider,
//   then settles the decision on the calendar, so a booking is never partially applied.

use crate::modules::bookings::core::calendar::Calendar;
use crate::modules::bookings::core::decider::decide::decide_request;
use crate::modules::bookings::core::offer::Offer;
use crate::modules::bookings::core::request::Request;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub location: Location,
}

impl ClientProfile {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            name: name.into(),
            location: Location { lat, lon, alt },
        }
    }
}

pub trait Client: Send + Debug {
    fn profile(&self) -> &ClientProfile;

    fn calendar(&self) -> &Calendar;

    fn request(&mut self, request: Request) -> Offer;

    fn name(&self) -> &str {
        &self.profile().name
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientPolicy {
    AcceptAll,
    #[default]
    AcceptIfFree,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown client policy {0:?}, expected accept_all or accept_if_free")]
pub struct UnknownClientPolicy(pub String);

impl FromStr for ClientPolicy {
    type Err = UnknownClientPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "accept_all" => Ok(ClientPolicy::AcceptAll),
            "accept_if_free" => Ok(ClientPolicy::AcceptIfFree),
            other => Err(UnknownClientPolicy(other.to_string())),
        }
    }
}

impl ClientPolicy {
    pub fn build(self, profile: ClientProfile) -> Box<dyn Client> {
        match self {
            ClientPolicy::AcceptAll => Box::new(AcceptAllClient::new(profile)),
            ClientPolicy::AcceptIfFree => Box::new(AcceptIfFreeClient::new(profile)),
        }
    }
}

/// Books every request, overlapping or not. Upper-bound baseline for comparisons.
#[derive(Debug, Clone)]
pub struct AcceptAllClient {
    profile: ClientProfile,
    calendar: Calendar,
}

impl AcceptAllClient {
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            calendar: Calendar::new(),
        }
    }
}

impl Client for AcceptAllClient {
    fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    fn request(&mut self, request: Request) -> Offer {
        decide_request(ClientPolicy::AcceptAll, &self.calendar, request).settle(&mut self.calendar)
    }
}

/// Books a request only if it overlaps nothing already booked.
#[derive(Debug, Clone)]
pub struct AcceptIfFreeClient {
    profile: ClientProfile,
    calendar: Calendar,
}

impl AcceptIfFreeClient {
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            profile,
            calendar: Calendar::new(),
        }
    }
}

impl Client for AcceptIfFreeClient {
    fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    fn request(&mut self, request: Request) -> Offer {
        decide_request(ClientPolicy::AcceptIfFree, &self.calendar, request)
            .settle(&mut self.calendar)
    }
}
