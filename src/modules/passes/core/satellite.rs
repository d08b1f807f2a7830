use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satellite {
    pub name: String,
    pub norad_id: Option<String>,
    pub tle: [String; 3],
}

impl Satellite {
    /// Builds a satellite from its three TLE lines; the name is line 0 trimmed and the
    /// NORAD catalog number is columns 2..7 of line 1.
    pub fn from_tle(tle: [String; 3]) -> Self {
        let name = tle[0].trim().to_string();
        let norad_id = tle[1]
            .get(2..7)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self {
            name,
            norad_id,
            tle,
        }
    }
}

/// Read-only satellite lookup keyed by satellite id (its name).
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalog {
    satellites: HashMap<String, Satellite>,
}

impl SatelliteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, satellite: Satellite) {
        self.satellites.insert(satellite.name.clone(), satellite);
    }

    pub fn get(&self, id: &str) -> Option<&Satellite> {
        self.satellites.get(id)
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}

impl FromIterator<Satellite> for SatelliteCatalog {
    fn from_iter<I: IntoIterator<Item = Satellite>>(iter: I) -> Self {
        let mut catalog = SatelliteCatalog::new();
        for satellite in iter {
            catalog.insert(satellite);
        }
        catalog
    }
}
