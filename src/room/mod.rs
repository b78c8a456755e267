pub mod entity;

pub use entity::{Colour, PlacementBounds, Room, RoomId, RoomKind};

use crate::error::RoomError;
use slotmap::SlotMap;

/// Central arena that owns every room of a generation pass.
///
/// Rooms are addressed by [`RoomId`]. The `active` and `deleted` pools hold
/// ids only, so moving a room between them never copies or drops it, and a
/// room is always in exactly one pool.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: SlotMap<RoomId, Room>,
    active: Vec<RoomId>,
    deleted: Vec<RoomId>,
}

impl RoomStore {
    /// Creates a new, empty room store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a room into the active pool and returns its ID.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = self.rooms.insert(room);
        self.active.push(id);
        id
    }

    /// Returns a reference to the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the store.
    pub fn room(&self, id: RoomId) -> Result<&Room, RoomError> {
        self.rooms.get(id).ok_or(RoomError::NotFound(id))
    }

    /// Returns a mutable reference to the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the store.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, RoomError> {
        self.rooms.get_mut(id).ok_or(RoomError::NotFound(id))
    }

    /// IDs of the rooms currently in the active pool, in pool order.
    #[must_use]
    pub fn active(&self) -> &[RoomId] {
        &self.active
    }

    /// IDs of the rooms currently in the deleted pool, in pool order.
    #[must_use]
    pub fn deleted(&self) -> &[RoomId] {
        &self.deleted
    }

    /// Iterates over the active rooms in pool order.
    pub fn active_rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.active
            .iter()
            .filter_map(|&id| self.rooms.get(id).map(|room| (id, room)))
    }

    /// Iterates over the deleted rooms in pool order.
    pub fn deleted_rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.deleted
            .iter()
            .filter_map(|&id| self.rooms.get(id).map(|room| (id, room)))
    }

    /// Total number of rooms across both pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Moves the room at the end of the active pool into the deleted pool.
    ///
    /// Returns the moved room's ID, or `None` if the active pool is empty.
    pub fn delete_last_active(&mut self) -> Option<RoomId> {
        let id = self.active.pop()?;
        self.deleted.push(id);
        Some(id)
    }

    /// Moves a room from the deleted pool back to the end of the active pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the deleted pool.
    pub fn restore(&mut self, id: RoomId) -> Result<(), RoomError> {
        let pos = self
            .deleted
            .iter()
            .position(|&d| d == id)
            .ok_or(RoomError::NotInPool(id, "deleted"))?;
        self.deleted.remove(pos);
        self.active.push(id);
        Ok(())
    }

    /// Stable-sorts the active pool by ascending room area.
    pub fn sort_active_by_area(&mut self) {
        let rooms = &self.rooms;
        self.active.sort_by(|&a, &b| {
            let area_a = rooms.get(a).map_or(0.0, Room::area);
            let area_b = rooms.get(b).map_or(0.0, Room::area);
            area_a.total_cmp(&area_b)
        });
    }
}
