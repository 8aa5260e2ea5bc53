//! The loop strategy: start at your own box number and follow the slips.
//!
//! Opening box `b` reveals slip `s`; the next box to open is `s`. Under a
//! permutation this walks exactly one cycle, so the chain reaches the
//! prisoner's own slip if and only if that cycle is short enough to fit
//! the try budget. This is the classical near-optimal strategy with a
//! whole-group success rate of about 31% at 100 boxes.

use crate::scene::{OpenOutcome, Scene};

/// Drive one scene with the loop strategy.
pub fn run(scene: &mut Scene) {
    let mut box_id = scene.prisoner();

    loop {
        match scene.try_open_box(box_id) {
            // Chain to the box named by the slip just revealed. When the
            // slip was the prisoner's own, the scene is now done and the
            // next call returns OutOfGuesses.
            OpenOutcome::Opened(slip) => box_id = slip,
            OpenOutcome::OutOfGuesses => return,
            OpenOutcome::AlreadyOpen => {
                // A cycle never revisits a box before closing on the
                // prisoner's own slip. Hitting this means the room is not
                // a permutation and the simulation is broken.
                unreachable!("loop strategy revisited box {}", box_id)
            }
        }
    }
}
