// Shared test fixtures for passes, satellites and clients.
// Minute offsets are counted from 2017-07-12T00:00:00Z.

use crate::modules::bookings::core::client::{ClientPolicy, ClientProfile};
use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::passes::core::satellite::{Satellite, SatelliteCatalog};
use crate::modules::scheduling::use_cases::dispatch::ClientMap;
use crate::shared::core::primitives::TimeInterval;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 7, 12, 0, 0, 0).unwrap() + TimeDelta::minutes(minute)
}

pub fn make_pass(station: &str, satellite: &str, start_minute: i64, end_minute: i64) -> PassRecord {
    make_pass_between(station, satellite, at_minute(start_minute), at_minute(end_minute))
}

pub fn make_pass_between(
    station: &str,
    satellite: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> PassRecord {
    PassRecord {
        interval: TimeInterval::new(start, end).unwrap(),
        ground_station: station.to_string(),
        satellite: satellite.to_string(),
        rise_azimuth: 12.5,
        set_azimuth: 187.25,
        tca: start + (end - start) / 2,
        max_elevation: 42.0,
    }
}

pub fn make_satellite(name: &str) -> Satellite {
    Satellite::from_tle([
        name.to_string(),
        "1 40907U 15049J   17192.53573606  .00000798  00000-0  46540-4 0  9991".to_string(),
        "2 40907  97.4515 197.2956 0016027 124.7938 235.4805 15.14668467 99926".to_string(),
    ])
}

pub fn make_catalog(names: &[&str]) -> SatelliteCatalog {
    names.iter().map(|name| make_satellite(name)).collect()
}

pub fn make_profile(name: &str) -> ClientProfile {
    ClientProfile::new(name, 41.4639, -87.0439, 245.0)
}

pub fn make_profiles(names: &[&str]) -> Vec<ClientProfile> {
    names.iter().map(|name| make_profile(name)).collect()
}

pub fn make_clients(policy: ClientPolicy, names: &[&str]) -> ClientMap {
    names
        .iter()
        .map(|name| (name.to_string(), policy.build(make_profile(name))))
        .collect()
}

/// Deterministic crowd of passes over several stations and satellites with heavy overlap.
pub fn crowded_passes(stations: &[&str], satellites: &[&str]) -> Vec<PassRecord> {
    let mut passes = Vec::new();
    for (s, station) in stations.iter().enumerate() {
        for (k, satellite) in satellites.iter().enumerate() {
            for n in 0..12i64 {
                let start = (n * 41 + (s as i64) * 7 + (k as i64) * 11) % 600;
                let length = 4 + (n * 5 + k as i64 * 3) % 14;
                passes.push(make_pass(station, satellite, start, start + length));
            }
        }
    }
    passes
}
