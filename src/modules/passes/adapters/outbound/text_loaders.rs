// Plain-text catalog loaders.
//
// - TLE files: consecutive groups of three lines (name, line 1, line 2).
// - Station files: consecutive groups of four lines (name, latitude, longitude, altitude).
// - Lines are right-trimmed. An incomplete trailing group is ignored.

use crate::modules::bookings::core::client::ClientProfile;
use crate::modules::passes::core::satellite::{Satellite, SatelliteCatalog};
use anyhow::Context;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StationParseError {
    #[error("station {station:?}: {field} {value:?} is not a number")]
    InvalidNumber {
        station: String,
        field: &'static str,
        value: String,
    },
}

fn groups(text: &str, size: usize) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    lines.chunks_exact(size).map(|chunk| chunk.to_vec()).collect()
}

pub fn parse_tles(text: &str) -> Vec<Satellite> {
    groups(text, 3)
        .into_iter()
        .map(|tle| {
            Satellite::from_tle([tle[0].to_string(), tle[1].to_string(), tle[2].to_string()])
        })
        .collect()
}

pub fn parse_stations(text: &str) -> Result<Vec<ClientProfile>, StationParseError> {
    groups(text, 4)
        .into_iter()
        .map(|station| {
            let name = station[0].to_string();
            let number = |field: &'static str, value: &str| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| StationParseError::InvalidNumber {
                        station: name.clone(),
                        field,
                        value: value.to_string(),
                    })
            };
            let lat = number("latitude", station[1])?;
            let lon = number("longitude", station[2])?;
            let alt = number("altitude", station[3])?;
            Ok(ClientProfile::new(name.clone(), lat, lon, alt))
        })
        .collect()
}

pub async fn load_satellite_catalog(path: impl AsRef<Path>) -> anyhow::Result<SatelliteCatalog> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading TLE file {}", path.display()))?;
    Ok(parse_tles(&text).into_iter().collect())
}

pub async fn load_stations(path: impl AsRef<Path>) -> anyhow::Result<Vec<ClientProfile>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading station file {}", path.display()))?;
    parse_stations(&text).with_context(|| format!("parsing station file {}", path.display()))
}
