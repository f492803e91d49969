//! Core library for the `loadrunner` binary.
//!
//! A minimal concurrent load generator: a fixed number of workers hammer one
//! health-check endpoint with GET requests while a reporter prints cumulative
//! throughput once per second. The binary is the user-facing interface; the
//! library layer exists so integration tests can drive the same worker and
//! reporter loops the binary runs.

pub mod client;
pub mod executor;
pub mod models;
pub mod reporter;
