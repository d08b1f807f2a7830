use thiserror::Error;

/// Failures that abort a scheduling run. Both lookups report how far the run got, since
/// bookings made before the failure stay on the clients' calendars.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("no client for station {station:?} (submitted {submitted}, accepted {accepted})")]
    UnknownGroundStation {
        station: String,
        submitted: usize,
        accepted: usize,
    },

    #[error("unknown satellite {satellite:?} (submitted {submitted}, accepted {accepted})")]
    UnknownSatellite {
        satellite: String,
        submitted: usize,
        accepted: usize,
    },

    #[error("worker for {station:?} failed: {reason} (submitted {submitted}, accepted {accepted})")]
    Worker {
        station: String,
        reason: String,
        submitted: usize,
        accepted: usize,
    },
}

impl SchedulingError {
    /// Progress carried by the error as `(submitted, accepted)`.
    pub fn progress(&self) -> (usize, usize) {
        match self {
            SchedulingError::UnknownGroundStation {
                submitted,
                accepted,
                ..
            }
            | SchedulingError::UnknownSatellite {
                submitted,
                accepted,
                ..
            }
            | SchedulingError::Worker {
                submitted,
                accepted,
                ..
            } => (*submitted, *accepted),
        }
    }

    /// Same error with its progress counters replaced.
    pub fn with_progress(self, submitted: usize, accepted: usize) -> Self {
        match self {
            SchedulingError::UnknownGroundStation { station, .. } => {
                SchedulingError::UnknownGroundStation {
                    station,
                    submitted,
                    accepted,
                }
            }
            SchedulingError::UnknownSatellite { satellite, .. } => {
                SchedulingError::UnknownSatellite {
                    satellite,
                    submitted,
                    accepted,
                }
            }
            SchedulingError::Worker { station, reason, .. } => SchedulingError::Worker {
                station,
                reason,
                submitted,
                accepted,
            },
        }
    }
}
