//! A full scenario: one slip arrangement, one scene per prisoner.

use rand::Rng;

use crate::room::RoomTemplate;
use crate::scene::Scene;

/// A single whole-group trial.
///
/// Prisoners `1..=size` walk in one at a time, in ascending order, each
/// into a fresh copy of the same room. The scenario is single-pass: once
/// every prisoner has had their scene it stays drained.
#[derive(Debug)]
pub struct Scenario {
    template: RoomTemplate,
    next_prisoner: usize,
}

impl Scenario {
    /// Create a scenario with `size` boxes and prisoners, shuffling the
    /// slip arrangement with the given RNG.
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize, rng: &mut impl Rng) -> Self {
        Self {
            template: RoomTemplate::new(size, rng),
            next_prisoner: 1,
        }
    }

    /// Number of boxes (equal to the number of prisoners).
    pub fn size(&self) -> usize {
        self.template.size()
    }

    /// Whether any prisoner still has to take their turn.
    pub fn has_prisoners_left(&self) -> bool {
        self.next_prisoner <= self.size()
    }

    /// Hand the next prisoner their scene, or `None` once everyone has
    /// gone. Repeated calls on a drained scenario keep returning `None`.
    pub fn next_scene(&mut self) -> Option<Scene> {
        if !self.has_prisoners_left() {
            return None;
        }

        let prisoner = self.next_prisoner;
        self.next_prisoner += 1;

        Some(Scene::new(self.template.create(), prisoner))
    }
}

impl Iterator for Scenario {
    type Item = Scene;

    fn next(&mut self) -> Option<Scene> {
        self.next_scene()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.size() + 1 - self.next_prisoner;
        (left, Some(left))
    }
}
