//! Observability: in-memory operation counters for the config store.
//!
//! This module does not access storage internals directly; the config
//! store reports into it at its operation boundaries.

pub mod metrics;

pub use metrics::{OpsSnapshot, snapshot, reset};
