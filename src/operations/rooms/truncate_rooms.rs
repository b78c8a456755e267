use crate::error::Result;
use crate::graph::Vertex;
use crate::room::RoomStore;

/// Outcome of splitting the active rooms into primaries and secondaries.
#[derive(Debug, Clone)]
pub struct Truncation {
    /// Centers of the surviving primary rooms, tagged with their room ids.
    pub vertices: Vec<Vertex>,
    /// Number of rooms moved into the deleted pool.
    pub deleted: usize,
    /// Set when fewer rooms existed than requested: `(requested, available)`.
    pub clamped: Option<(usize, usize)>,
}

/// Moves rooms from the end of the active pool into the deleted pool until
/// only `keep` remain.
///
/// The pool was sorted by area when the rooms were placed, so the rooms
/// removed are the largest ones at placement time.
#[derive(Debug, Clone, Copy)]
pub struct TruncateRooms {
    keep: usize,
}

impl TruncateRooms {
    /// Creates a new `TruncateRooms` operation.
    #[must_use]
    pub fn new(keep: usize) -> Self {
        Self { keep }
    }

    /// Executes the truncation and builds the vertex list of the survivors.
    ///
    /// # Errors
    ///
    /// Returns an error if an active room is missing from the store.
    pub fn execute(&self, store: &mut RoomStore) -> Result<Truncation> {
        let available = store.active().len();
        let clamped = (self.keep > available).then_some((self.keep, available));
        let keep = self.keep.min(available);

        let mut deleted = 0;
        while store.active().len() > keep {
            if store.delete_last_active().is_none() {
                break;
            }
            deleted += 1;
        }

        let vertices = store
            .active()
            .iter()
            .map(|&id| -> Result<Vertex> { Ok(Vertex::for_room(store.room(id)?.center(), id)) })
            .collect::<Result<Vec<_>>>()?;

        Ok(Truncation {
            vertices,
            deleted,
            clamped,
        })
    }
}
