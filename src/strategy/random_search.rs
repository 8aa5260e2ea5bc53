//! The random strategy: open boxes in a locally shuffled order.
//!
//! Hopeless for the group (each prisoner succeeds with probability 1/2
//! independently, so 100 prisoners succeed together about once in 2^100
//! runs) but the natural baseline to compare the loop strategy against.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::scene::{OpenOutcome, Scene};

/// Drive one scene by drawing box ids from a pre-shuffled candidate pool.
pub fn run(scene: &mut Scene, rng: &mut impl Rng) {
    let prisoner = scene.prisoner();

    let mut candidates: Vec<usize> = (1..=scene.size()).collect();
    candidates.shuffle(rng);

    // Each id leaves the pool exactly once; drawing one twice would mean
    // the pool bookkeeping is broken.
    let mut drawn = vec![false; scene.size() + 1];

    while let Some(box_id) = candidates.pop() {
        debug_assert!(!drawn[box_id], "box {} drawn twice from the pool", box_id);
        drawn[box_id] = true;

        match scene.try_open_box(box_id) {
            OpenOutcome::Opened(slip) if slip == prisoner => return,
            OpenOutcome::Opened(_) => {}
            // An open box costs nothing; move on to the next candidate.
            OpenOutcome::AlreadyOpen => continue,
            OpenOutcome::OutOfGuesses => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_scene_terminates() {
        let mut rng = StdRng::seed_from_u64(21);

        for size in [1, 2, 5, 20, 100] {
            let mut scenario = Scenario::new(size, &mut rng);
            while let Some(mut scene) = scenario.next_scene() {
                run(&mut scene, &mut rng);
                assert!(scene.is_done());
            }
        }
    }

    #[test]
    fn test_size_two_single_prisoner_rate_is_about_half() {
        // One try, two boxes: a coin flip.
        let mut rng = StdRng::seed_from_u64(22);
        let trials = 4_000;

        let successes = (0..trials)
            .filter(|_| {
                let mut scenario = Scenario::new(2, &mut rng);
                let mut scene = scenario.next_scene().unwrap();
                run(&mut scene, &mut rng);
                scene.is_success()
            })
            .count();

        let rate = successes as f64 / trials as f64;
        assert!((rate - 0.5).abs() < 0.05, "rate {} too far from 0.5", rate);
    }

    #[test]
    fn test_scene_always_ends_with_budget_spent() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..50 {
            let mut scenario = Scenario::new(9, &mut rng);
            while let Some(mut scene) = scenario.next_scene() {
                run(&mut scene, &mut rng);
                assert_eq!(scene.tries_left(), 0);
                assert!(scene.is_done());
            }
        }
    }
}
