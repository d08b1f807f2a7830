// Composition root for the scheduling bazaar service.
//
// Responsibilities:
// - Read config from environment.
// - Load stations, satellites and the passes file location.
// - Wire the pass source and result store into the simulation handler.
// - Expose the simulation and report endpoints over HTTP.

pub mod config;
pub mod http;
pub mod state;
