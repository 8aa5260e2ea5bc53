//! 100 prisoners problem simulator.
//!
//! Models the classic puzzle: each of `n` prisoners must find their own
//! number among `n` closed boxes while opening at most `n / 2` of them,
//! and the group survives only if every prisoner succeeds. The crate
//! exposes the scenario state machine, the box-picking strategies, and a
//! Monte Carlo simulator that estimates success rates over many
//! independent trials.

pub mod room;
pub mod scenario;
pub mod scene;
pub mod simulator;
pub mod strategy;

pub use scenario::Scenario;
pub use scene::{OpenOutcome, Scene};
pub use strategy::StrategyKind;
