//! Trial runner and parallel aggregator.
//!
//! Every trial builds its own scenario and its own RNG, so trials share
//! nothing and can fan out across a rayon worker pool. With a configured
//! seed each trial gets a generator seeded from `seed + trial index`,
//! which keeps batches reproducible regardless of worker scheduling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::config::SimConfig;
use super::report::SimReport;
use crate::scenario::Scenario;
use crate::strategy::StrategyKind;

/// Run the whole batch of trials and return an aggregated report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    // Per-trial diagnostics stay readable only when trials run in order,
    // so verbose mode drops down to a sequential loop.
    let successes = if config.verbosity >= 2 {
        run_sequential(config)
    } else {
        run_parallel(config)
    };

    SimReport::from_counts(config, successes)
}

fn run_parallel(config: &SimConfig) -> u32 {
    (0..config.num_trials)
        .into_par_iter()
        .filter(|&trial_idx| run_trial(config, trial_idx))
        .count() as u32
}

fn run_sequential(config: &SimConfig) -> u32 {
    let mut successes = 0u32;

    for trial_idx in 0..config.num_trials {
        let succeeded = run_trial(config, trial_idx);
        if succeeded {
            successes += 1;
        }

        println!(
            "Trial {}/{} - {}",
            trial_idx + 1,
            config.num_trials,
            if succeeded { "success" } else { "failure" }
        );
    }

    successes
}

fn run_trial(config: &SimConfig, trial_idx: u32) -> bool {
    let mut rng = trial_rng(config, trial_idx);
    let mut scenario = Scenario::new(config.size, &mut rng);

    if config.single_prisoner {
        run_first_prisoner(&mut scenario, config.strategy, &mut rng)
    } else {
        run_scenario(&mut scenario, config.strategy, &mut rng)
    }
}

fn trial_rng(config: &SimConfig, trial_idx: u32) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial_idx as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Drive every prisoner's scene in order; the group succeeds only if all
/// of them do. Stops at the first failed scene.
pub fn run_scenario(scenario: &mut Scenario, strategy: StrategyKind, rng: &mut impl Rng) -> bool {
    while let Some(mut scene) = scenario.next_scene() {
        strategy.run(&mut scene, rng);

        if !scene.is_success() {
            return false;
        }
    }

    true
}

/// Drive only the first prisoner's scene and report that single outcome.
pub fn run_first_prisoner(
    scenario: &mut Scenario,
    strategy: StrategyKind,
    rng: &mut impl Rng,
) -> bool {
    match scenario.next_scene() {
        Some(mut scene) => {
            strategy.run(&mut scene, rng);
            scene.is_success()
        }
        None => false,
    }
}
