use crate::error::Result;
use crate::hallway::Hallway;
use crate::room::{RoomId, RoomStore};

/// Moves every deleted room that a hallway passes through back into the
/// active pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReinsertRooms;

impl ReinsertRooms {
    /// Creates a new `ReinsertRooms` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Tests each hallway against each still-deleted room rectangle and
    /// restores the rooms it touches. Returns the restored ids in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a deleted room is missing from the store.
    pub fn execute(&self, store: &mut RoomStore, hallways: &[Hallway]) -> Result<Vec<RoomId>> {
        let mut restored = Vec::new();
        for hallway in hallways {
            let mut hits = Vec::new();
            for (id, room) in store.deleted_rooms() {
                if room.rect().intersects_segment(&hallway.start, &hallway.end) {
                    hits.push(id);
                }
            }
            for id in hits {
                store.restore(id)?;
                restored.push(id);
            }
        }
        Ok(restored)
    }
}
