use rand::Rng;

use crate::room::{PlacementBounds, Room, RoomId, RoomStore};

/// Spawns a batch of randomly sized and positioned rooms.
#[derive(Debug, Clone, Copy)]
pub struct PlaceRooms {
    bounds: PlacementBounds,
    count: u32,
}

impl PlaceRooms {
    /// Creates a new `PlaceRooms` operation.
    #[must_use]
    pub fn new(bounds: PlacementBounds, count: u32) -> Self {
        Self { bounds, count }
    }

    /// Adds `count` fresh rooms to the active pool, numbered from 0, and sorts
    /// the pool by ascending area.
    pub fn execute(&self, store: &mut RoomStore, rng: &mut impl Rng) -> Vec<RoomId> {
        let ids = (0..self.count)
            .map(|index| store.add_room(Room::initialize(&self.bounds, index, rng)))
            .collect();
        store.sort_active_by_area();
        ids
    }
}
