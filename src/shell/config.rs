// Service configuration from the environment.
//
// Variables (all optional)
// - BAZAAR_BIND            listen address, default 0.0.0.0:8080
// - BAZAAR_STATIONS_FILE   station list, 4 lines per station, default data/stations.txt
// - BAZAAR_TLE_FILE        satellite TLEs, 3 lines per satellite, default data/amateur.tle
// - BAZAAR_PASSES_FILE     pre-computed passes as a JSON array, default data/passes.json
// - BAZAAR_PRIORITY_FILE   JSON object station -> [satellite], no default
// - BAZAAR_SCHEDULER       default scheduler, default first
// - BAZAAR_SEED            default random seed, default 0
// - BAZAAR_CLIENT_POLICY   accept_all | accept_if_free, default accept_if_free
// - BAZAAR_PARTITIONED     true | false, default false
// - BAZAAR_RESULT_CAPACITY simulation reports kept in memory, oldest evicted first, default 256

use crate::modules::bookings::core::client::ClientPolicy;
use crate::modules::scheduling::core::policy::{PriorityMap, SchedulerKind};
use crate::modules::scheduling::use_cases::run_simulation::command::RunSimulation;
use crate::shared::infrastructure::result_store::in_memory::DEFAULT_CAPACITY;
use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{key}={value:?} is invalid: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub stations_file: PathBuf,
    pub tle_file: PathBuf,
    pub passes_file: PathBuf,
    pub priority_file: Option<PathBuf>,
    pub scheduler: SchedulerKind,
    pub seed: u64,
    pub client_policy: ClientPolicy,
    pub partitioned: bool,
    pub result_capacity: usize,
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError {
                key,
                reason: e.to_string(),
                value,
            }),
        },
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };
        Ok(Self {
            bind: parse(&lookup, "BAZAAR_BIND", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            stations_file: path("BAZAAR_STATIONS_FILE", "data/stations.txt"),
            tle_file: path("BAZAAR_TLE_FILE", "data/amateur.tle"),
            passes_file: path("BAZAAR_PASSES_FILE", "data/passes.json"),
            priority_file: lookup("BAZAAR_PRIORITY_FILE").map(PathBuf::from),
            scheduler: parse(&lookup, "BAZAAR_SCHEDULER", SchedulerKind::default())?,
            seed: parse(&lookup, "BAZAAR_SEED", 0)?,
            client_policy: parse(&lookup, "BAZAAR_CLIENT_POLICY", ClientPolicy::default())?,
            partitioned: parse(&lookup, "BAZAAR_PARTITIONED", false)?,
            result_capacity: parse(&lookup, "BAZAAR_RESULT_CAPACITY", DEFAULT_CAPACITY)?,
        })
    }

    /// Simulation settings used when a request leaves a field out.
    pub fn defaults(&self, priority: PriorityMap) -> RunSimulation {
        RunSimulation {
            scheduler: self.scheduler,
            seed: self.seed,
            client_policy: self.client_policy,
            priority,
            partitioned: self.partitioned,
            ..RunSimulation::default()
        }
    }
}

pub async fn load_priority(path: Option<&Path>) -> anyhow::Result<PriorityMap> {
    let Some(path) = path else {
        return Ok(PriorityMap::new());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading priority file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing priority file {}", path.display()))
}
