//! Simulation configuration.

use crate::strategy::StrategyKind;

/// Configuration for a batch of simulated scenarios.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of boxes, equal to the number of prisoners
    pub size: usize,

    /// Number of independent scenarios to run
    pub num_trials: u32,

    /// Box-picking strategy applied to every prisoner
    pub strategy: StrategyKind,

    /// Run only the first prisoner's scene instead of the whole group
    pub single_prisoner: bool,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-trial)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 100,
            num_trials: 100_000,
            strategy: StrategyKind::Loop,
            single_prisoner: false,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small batch for fast local checks.
    pub fn quick_check() -> Self {
        Self {
            num_trials: 1_000,
            ..Default::default()
        }
    }
}
