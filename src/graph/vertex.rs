use crate::math::Point2;
use crate::room::RoomId;

/// A triangulation vertex: a room center, or a synthetic super-triangle corner.
///
/// Equality compares coordinates only; the room tag is carried along for
/// correlating graph edges back to rooms.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position of the vertex.
    pub point: Point2,
    /// Room this vertex was produced from, `None` for synthetic vertices.
    pub room: Option<RoomId>,
}

impl Vertex {
    /// Creates a vertex for the given room center.
    #[must_use]
    pub fn for_room(point: Point2, room: RoomId) -> Self {
        Self {
            point,
            room: Some(room),
        }
    }

    /// Creates a vertex with no room attached.
    #[must_use]
    pub fn free(x: f64, y: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            room: None,
        }
    }

    /// Hashable key for exact coordinate identity (`-0.0` and `0.0` collapse).
    #[must_use]
    pub fn key(&self) -> (u64, u64) {
        point_key(&self.point)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

/// Bit-exact hash key of a point. Adding `0.0` folds negative zero.
#[must_use]
pub fn point_key(p: &Point2) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}
