//! Room modeling: the shared slip arrangement and its per-prisoner copies.
//!
//! A `RoomTemplate` fixes the slip-in-box assignment for one scenario.
//! Every prisoner then gets their own `Room` copy, so one prisoner's
//! opened boxes are never visible to another.

use rand::seq::SliceRandom;
use rand::Rng;

/// A single numbered box holding one slip.
#[derive(Debug, Clone)]
struct SlipBox {
    slip: usize,
    is_open: bool,
}

/// Immutable slip arrangement, built once per scenario.
///
/// The slips form a uniform random permutation of `1..=size`: every slip
/// value sits in exactly one box.
#[derive(Debug)]
pub struct RoomTemplate {
    boxes: Vec<SlipBox>,
}

impl RoomTemplate {
    /// Build a template with `size` boxes and a freshly shuffled slip
    /// assignment.
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize, rng: &mut impl Rng) -> Self {
        assert!(size >= 1, "room size must be at least 1, got {}", size);

        let mut slips: Vec<usize> = (1..=size).collect();
        slips.shuffle(rng);

        let boxes = slips
            .into_iter()
            .map(|slip| SlipBox {
                slip,
                is_open: false,
            })
            .collect();

        Self { boxes }
    }

    /// Number of boxes (equal to the number of prisoners).
    pub fn size(&self) -> usize {
        self.boxes.len()
    }

    /// Create an independent room copy with every box closed.
    pub fn create(&self) -> Room {
        Room {
            boxes: self.boxes.clone(),
        }
    }
}

/// One prisoner's private view of the room, with open/closed state.
///
/// Mutations never leak back to the template or to sibling rooms.
#[derive(Debug)]
pub struct Room {
    boxes: Vec<SlipBox>,
}

impl Room {
    /// Number of boxes in the room.
    pub fn size(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the box with the given 1-based id has been opened.
    ///
    /// Panics on an out-of-range id.
    pub fn box_is_open(&self, box_id: usize) -> bool {
        self.get(box_id).is_open
    }

    /// Open a box and return the slip value inside.
    ///
    /// Opening is idempotent at this layer: an already-open box stays open
    /// and still yields its slip. Re-open policy is enforced by the scene.
    /// Panics on an out-of-range id.
    pub fn open_box(&mut self, box_id: usize) -> usize {
        let size = self.size();
        let b = &mut self.boxes[checked_index(box_id, size)];
        b.is_open = true;
        b.slip
    }

    fn get(&self, box_id: usize) -> &SlipBox {
        &self.boxes[checked_index(box_id, self.size())]
    }
}

/// Convert a 1-based box id to a vector index, panicking when out of range.
fn checked_index(box_id: usize, size: usize) -> usize {
    assert!(
        (1..=size).contains(&box_id),
        "box id {} out of range 1..={}",
        box_id,
        size
    );
    box_id - 1
}
