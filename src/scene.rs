//! One prisoner's attempt: a room copy plus a bounded try budget.

use crate::room::Room;

/// Result of a single box-opening attempt.
///
/// Strategies branch on this instead of unwinding: running out of guesses
/// and hitting an open box are routine signals, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The box was closed; it is now open and revealed this slip.
    Opened(usize),
    /// The box was already opened earlier in this scene.
    AlreadyOpen,
    /// The try budget is spent; the scene is over.
    OutOfGuesses,
}

/// A single prisoner's search through their own copy of the room.
///
/// The budget is `size / 2` tries. Opening the box that holds the
/// prisoner's own slip ends the scene successfully on the spot; burning
/// the whole budget on other slips ends it as a failure. Once done, a
/// scene never changes again.
#[derive(Debug)]
pub struct Scene {
    room: Room,
    prisoner: usize,
    tries_left: usize,
    failed: bool,
}

impl Scene {
    pub(crate) fn new(room: Room, prisoner: usize) -> Self {
        let tries_left = room.size() / 2;
        Self {
            room,
            prisoner,
            tries_left,
            failed: false,
        }
    }

    /// Number of boxes in the room.
    pub fn size(&self) -> usize {
        self.room.size()
    }

    /// The slip number this prisoner is looking for.
    pub fn prisoner(&self) -> usize {
        self.prisoner
    }

    /// Tries remaining before the scene ends.
    pub fn tries_left(&self) -> usize {
        self.tries_left
    }

    /// Whether the scene has ended, by success or by exhaustion.
    pub fn is_done(&self) -> bool {
        self.tries_left == 0
    }

    /// Whether the prisoner found their own slip.
    ///
    /// Only meaningful once `is_done` is true; a running scene reports
    /// `false`.
    pub fn is_success(&self) -> bool {
        self.is_done() && !self.failed
    }

    /// Attempt to open a box (1-based id).
    ///
    /// Returns `OutOfGuesses` when the scene is already done and
    /// `AlreadyOpen` when the box has been opened before, leaving the
    /// scene untouched in both cases. Otherwise opens the box and returns
    /// `Opened(slip)` so the caller can chain its next choice off the
    /// revealed value.
    ///
    /// Panics on an out-of-range id.
    pub fn try_open_box(&mut self, box_id: usize) -> OpenOutcome {
        if self.is_done() {
            return OpenOutcome::OutOfGuesses;
        }

        if self.room.box_is_open(box_id) {
            return OpenOutcome::AlreadyOpen;
        }

        let slip = self.room.open_box(box_id);

        if slip == self.prisoner {
            // Early exit: finding your own slip ends the turn no matter
            // how many tries were left.
            self.tries_left = 0;
        } else {
            self.tries_left -= 1;
            if self.tries_left == 0 {
                self.failed = true;
            }
        }

        OpenOutcome::Opened(slip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomTemplate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Reveal the full slip assignment of a template via a throwaway room.
    /// `mapping[box_id - 1]` is the slip inside that box.
    fn mapping_of(template: &RoomTemplate) -> Vec<usize> {
        let mut probe = template.create();
        (1..=probe.size()).map(|id| probe.open_box(id)).collect()
    }

    /// Box id holding the given slip.
    fn box_holding(mapping: &[usize], slip: usize) -> usize {
        mapping.iter().position(|&s| s == slip).unwrap() + 1
    }

    fn template(size: usize, seed: u64) -> RoomTemplate {
        let mut rng = StdRng::seed_from_u64(seed);
        RoomTemplate::new(size, &mut rng)
    }

    #[test]
    fn test_budget_starts_at_half_the_size() {
        for (size, budget) in [(1, 0), (2, 1), (9, 4), (10, 5), (100, 50)] {
            let t = template(size, 1);
            let scene = Scene::new(t.create(), 1);
            assert_eq!(scene.tries_left(), budget, "size {}", size);
        }
    }

    #[test]
    fn test_finding_own_slip_ends_scene_successfully() {
        let t = template(10, 2);
        let mapping = mapping_of(&t);

        let prisoner = 3;
        let mut scene = Scene::new(t.create(), prisoner);
        assert_eq!(scene.tries_left(), 5);

        let own_box = box_holding(&mapping, prisoner);
        assert_eq!(scene.try_open_box(own_box), OpenOutcome::Opened(prisoner));

        // Budget is forced to zero on the spot, not decremented.
        assert_eq!(scene.tries_left(), 0);
        assert!(scene.is_done());
        assert!(scene.is_success());
    }

    #[test]
    fn test_wrong_slips_burn_the_budget() {
        let t = template(10, 3);
        let mapping = mapping_of(&t);

        let prisoner = 1;
        let mut scene = Scene::new(t.create(), prisoner);

        let wrong_boxes: Vec<usize> = (1..=10)
            .filter(|&id| mapping[id - 1] != prisoner)
            .take(5)
            .collect();

        let mut previous = scene.tries_left();
        for &id in &wrong_boxes {
            match scene.try_open_box(id) {
                OpenOutcome::Opened(slip) => assert_ne!(slip, prisoner),
                other => panic!("unexpected outcome {:?}", other),
            }
            assert_eq!(scene.tries_left(), previous - 1);
            previous = scene.tries_left();
        }

        assert!(scene.is_done());
        assert!(!scene.is_success());
    }

    #[test]
    fn test_reopening_a_box_is_reported_not_counted() {
        let t = template(10, 4);
        let mapping = mapping_of(&t);

        let prisoner = 2;
        let mut scene = Scene::new(t.create(), prisoner);

        let wrong_box = (1..=10).find(|&id| mapping[id - 1] != prisoner).unwrap();
        assert!(matches!(
            scene.try_open_box(wrong_box),
            OpenOutcome::Opened(_)
        ));

        let before = scene.tries_left();
        assert_eq!(scene.try_open_box(wrong_box), OpenOutcome::AlreadyOpen);
        assert_eq!(scene.tries_left(), before, "AlreadyOpen must not cost a try");
    }

    #[test]
    fn test_done_scene_is_terminal() {
        let t = template(4, 5);
        let mapping = mapping_of(&t);

        let prisoner = 4;
        let mut scene = Scene::new(t.create(), prisoner);

        // Budget of 2: open two wrong boxes to exhaust it.
        let wrong_boxes: Vec<usize> = (1..=4)
            .filter(|&id| mapping[id - 1] != prisoner)
            .take(2)
            .collect();
        for &id in &wrong_boxes {
            scene.try_open_box(id);
        }
        assert!(scene.is_done());
        assert!(!scene.is_success());

        // Every further attempt keeps signaling OutOfGuesses, even on the
        // box that actually holds the prisoner's slip.
        let own_box = box_holding(&mapping, prisoner);
        for _ in 0..3 {
            assert_eq!(scene.try_open_box(own_box), OpenOutcome::OutOfGuesses);
            assert!(!scene.is_success());
            assert_eq!(scene.tries_left(), 0);
        }
    }

    #[test]
    fn test_single_box_scene_has_no_budget() {
        // size 1 gives a zero-try budget: the scene is born done and,
        // having failed nothing, counts as a success.
        let t = template(1, 6);
        let mut scene = Scene::new(t.create(), 1);

        assert!(scene.is_done());
        assert!(scene.is_success());
        assert_eq!(scene.try_open_box(1), OpenOutcome::OutOfGuesses);
    }
}
