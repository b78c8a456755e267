use crate::error::Result;
use crate::room::{RoomId, RoomKind, RoomStore};

/// Sorts the active rooms by area and marks the largest one as the boss room.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignBoss;

impl AssignBoss {
    /// Creates a new `AssignBoss` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the assignment. Returns the boss room, or `None` if no
    /// room is active. Every other active room is reset to the default kind.
    ///
    /// # Errors
    ///
    /// Returns an error if an active room is missing from the store.
    pub fn execute(&self, store: &mut RoomStore) -> Result<Option<RoomId>> {
        store.sort_active_by_area();
        let ids = store.active().to_vec();
        for &id in &ids {
            store.room_mut(id)?.set_kind(RoomKind::Default);
        }
        let Some(&boss) = ids.last() else {
            return Ok(None);
        };
        store.room_mut(boss)?.set_kind(RoomKind::Boss);
        Ok(Some(boss))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::room::{Colour, Room};

    #[test]
    fn largest_room_becomes_boss() {
        let colour = Colour {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.5,
        };
        let mut store = RoomStore::new();
        store.add_room(Room::new(0, Rect::new(0.0, 0.0, 10.0, 10.0), colour));
        let big = store.add_room(Room::new(1, Rect::new(20.0, 0.0, 30.0, 30.0), colour));
        store.add_room(Room::new(2, Rect::new(60.0, 0.0, 20.0, 20.0), colour));

        assert_eq!(AssignBoss::new().execute(&mut store).unwrap(), Some(big));
        assert_eq!(store.active().last(), Some(&big));
        let bosses = store
            .active_rooms()
            .filter(|(_, r)| r.kind() == RoomKind::Boss)
            .count();
        assert_eq!(bosses, 1);
    }

    #[test]
    fn no_rooms_no_boss() {
        let mut store = RoomStore::new();
        assert_eq!(AssignBoss::new().execute(&mut store).unwrap(), None);
    }
}
