//! Arrival-to-assignment processing loop.
//!
//! [`ProcessOrchestrator::run_once`] drains the arrival source, orders the
//! batch by `(department, team, arrival time, employee id)` and decides
//! each event sequentially, committing every seat to the inventory
//! before the next decision reads it.

mod config;
mod runner;

pub use config::RuntimeConfig;
pub use runner::ProcessOrchestrator;
