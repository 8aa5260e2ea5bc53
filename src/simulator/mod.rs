//! Monte Carlo driver for prisoner scenarios.
//!
//! Runs many independent scenarios in parallel and aggregates the
//! pass/fail outcomes into a success-rate report. Each trial owns its
//! scenario and its RNG; nothing is shared across trials.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_first_prisoner, run_scenario, run_simulation};
