use crate::error::Result;
use crate::math::{normalized, Vector2};
use crate::room::{RoomId, RoomStore};

/// One repulsion pass over the active rooms.
///
/// Any two rooms whose centers are closer than
/// `tightness * max_room_size + gap` are each pushed `speed` units directly
/// away from the other. Every pushed room is flagged as fleeing for this
/// pass. The pass is `O(n^2)` in the number of active rooms.
#[derive(Debug, Clone, Copy)]
pub struct SeparateRooms {
    tightness: f64,
    gap: f64,
    speed: f64,
    max_room_size: f64,
}

impl SeparateRooms {
    /// Creates a new `SeparateRooms` operation.
    #[must_use]
    pub fn new(tightness: f64, gap: f64, speed: f64, max_room_size: f64) -> Self {
        Self {
            tightness,
            gap,
            speed,
            max_room_size,
        }
    }

    /// Center distance below which two rooms repel each other.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.tightness * self.max_room_size + self.gap
    }

    /// Runs one pass and returns the number of repelled pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if an active room is missing from the store.
    pub fn execute(&self, store: &mut RoomStore) -> Result<usize> {
        let ids: Vec<RoomId> = store.active().to_vec();
        for &id in &ids {
            store.room_mut(id)?.set_fleeing(false);
        }

        let threshold = self.threshold();
        let mut pushes = 0;
        for (i, &first) in ids.iter().enumerate() {
            for &second in &ids[i + 1..] {
                let from = store.room(first)?.center();
                let to = store.room(second)?.center();
                let offset = to - from;
                if offset.norm() >= threshold {
                    continue;
                }

                // Stacked centers have no direction; push them apart along X.
                let dir = normalized(&offset).unwrap_or_else(|| Vector2::new(1.0, 0.0));
                let step = dir * self.speed;

                let room = store.room_mut(first)?;
                room.set_center(from - step);
                room.set_fleeing(true);

                let room = store.room_mut(second)?;
                room.set_center(to + step);
                room.set_fleeing(true);

                pushes += 1;
            }
        }
        Ok(pushes)
    }
}

/// Returns `true` if any two active rooms overlap.
///
/// # Errors
///
/// Returns an error if an active room is missing from the store.
pub fn rooms_overlapping(store: &RoomStore) -> Result<bool> {
    let rects = store
        .active()
        .iter()
        .map(|&id| store.room(id).map(|room| *room.rect()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for (i, a) in rects.iter().enumerate() {
        if rects[i + 1..].iter().any(|b| a.overlaps(b)) {
            return Ok(true);
        }
    }
    Ok(false)
}
