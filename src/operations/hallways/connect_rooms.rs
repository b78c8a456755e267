use rand::Rng;

use crate::error::Result;
use crate::graph::Edge;
use crate::hallway::Hallway;
use crate::math::Point2;
use crate::room::{Room, RoomStore};

/// Routes a corridor between two rooms.
///
/// Rooms whose centers share an X or Y coordinate get one straight segment.
/// Otherwise the corridor is L-shaped: one segment from each center to an
/// elbow on a corner of the centers' bounding box, picked 50/50 from the
/// `(max x, min y)` / `(min x, max y)` pair, or from the opposite diagonal
/// when a center sits on one of those corners. The elbow coin is flipped for
/// every connection, straight ones included. Segments already present are
/// not added again; an L-shaped pair is skipped whole if either half exists.
#[derive(Debug, Clone, Copy)]
pub struct ConnectRooms {
    width: u32,
}

impl ConnectRooms {
    /// Creates a new `ConnectRooms` operation producing hallways of `width`.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Connects two rooms, appending to `hallways`. Returns the number of
    /// segments added (0, 1 or 2).
    pub fn execute(
        &self,
        first: &Room,
        second: &Room,
        hallways: &mut Vec<Hallway>,
        rng: &mut impl Rng,
    ) -> usize {
        self.connect_points(first.center(), second.center(), hallways, rng)
    }

    /// Same as [`ConnectRooms::execute`], on bare center points.
    #[allow(clippy::float_cmp)]
    pub fn connect_points(
        &self,
        c1: Point2,
        c2: Point2,
        hallways: &mut Vec<Hallway>,
        rng: &mut impl Rng,
    ) -> usize {
        let smallest = Point2::new(c1.x.min(c2.x), c1.y.min(c2.y));
        let biggest = Point2::new(c1.x.max(c2.x), c1.y.max(c2.y));
        let first_corner = rng.gen_bool(0.5);

        if c1.x == c2.x || c1.y == c2.y {
            let straight = Hallway::new(smallest, biggest, self.width);
            if hallways.contains(&straight) {
                return 0;
            }
            hallways.push(straight);
            return 1;
        }

        let mut corners = [
            Point2::new(biggest.x, smallest.y),
            Point2::new(smallest.x, biggest.y),
        ];
        if corners.iter().any(|&corner| corner == c1 || corner == c2) {
            corners = [smallest, biggest];
        }
        let elbow = if first_corner { corners[0] } else { corners[1] };

        let first = Hallway::new(c1, elbow, self.width);
        let second = Hallway::new(c2, elbow, self.width);
        if hallways.contains(&first) || hallways.contains(&second) {
            return 0;
        }
        hallways.push(first);
        hallways.push(second);
        2
    }
}

/// Builds the hallways for a list of room connections.
#[derive(Debug, Clone, Copy)]
pub struct RouteHallways {
    connect: ConnectRooms,
}

impl RouteHallways {
    /// Creates a new `RouteHallways` operation producing hallways of `width`.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            connect: ConnectRooms::new(width),
        }
    }

    /// Routes a corridor for every connection whose endpoints both carry a
    /// room id. Corridors run between the rooms' current centers.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection references a room missing from the store.
    pub fn execute(
        &self,
        store: &RoomStore,
        connections: &[Edge],
        rng: &mut impl Rng,
    ) -> Result<Vec<Hallway>> {
        let mut hallways = Vec::new();
        for edge in connections {
            let (Some(a), Some(b)) = (edge.start().room, edge.end().room) else {
                continue;
            };
            let first = store.room(a)?;
            let second = store.room(b)?;
            self.connect.execute(first, second, &mut hallways, rng);
        }
        Ok(hallways)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::graph::Vertex;
    use crate::room::Colour;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn room_at(index: u32, center: Point2) -> Room {
        let colour = Colour {
            r: 0.1,
            g: 0.1,
            b: 0.1,
            a: 0.5,
        };
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.set_center(center);
        Room::new(index, rect, colour)
    }

    #[test]
    fn aligned_rooms_get_one_straight_segment() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut hallways = Vec::new();
        let op = ConnectRooms::new(6);

        assert_eq!(op.connect_points(p(50.0, 10.0), p(0.0, 10.0), &mut hallways, &mut rng), 1);
        assert_eq!(hallways[0], Hallway::new(p(0.0, 10.0), p(50.0, 10.0), 6));
        assert_eq!(hallways[0].width, 6);

        assert_eq!(op.connect_points(p(3.0, 0.0), p(3.0, 40.0), &mut hallways, &mut rng), 1);
        assert_eq!(hallways.len(), 2);
    }

    #[test]
    fn straight_and_l_routes_draw_alike() {
        let op = ConnectRooms::new(6);
        let mut straight_rng = ChaCha8Rng::seed_from_u64(8);
        let mut l_rng = ChaCha8Rng::seed_from_u64(8);

        op.connect_points(p(0.0, 0.0), p(0.0, 50.0), &mut Vec::new(), &mut straight_rng);
        op.connect_points(p(0.0, 0.0), p(30.0, 50.0), &mut Vec::new(), &mut l_rng);
        assert_eq!(straight_rng.gen::<u64>(), l_rng.gen::<u64>());
    }

    #[test]
    fn offset_rooms_get_l_shaped_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut hallways = Vec::new();
        let (c1, c2) = (p(0.0, 0.0), p(40.0, 30.0));

        assert_eq!(ConnectRooms::new(6).connect_points(c1, c2, &mut hallways, &mut rng), 2);
        assert_eq!(hallways.len(), 2);

        let elbow = hallways[0].end;
        assert!(elbow == p(40.0, 0.0) || elbow == p(0.0, 30.0));
        assert_eq!(hallways[0].start, c1);
        assert_eq!(hallways[1].start, c2);
        assert_eq!(hallways[1].end, elbow);
        // Both legs are axis-aligned.
        for h in &hallways {
            assert!(h.start.x == h.end.x || h.start.y == h.end.y);
        }
    }

    #[test]
    fn center_on_corner_uses_opposite_diagonal() {
        // c1 is the (max x, min y) corner of the bounding box.
        let (c1, c2) = (p(40.0, 0.0), p(0.0, 30.0));
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut hallways = Vec::new();
            ConnectRooms::new(6).connect_points(c1, c2, &mut hallways, &mut rng);
            let elbow = hallways[0].end;
            assert!(elbow == p(0.0, 0.0) || elbow == p(40.0, 30.0), "elbow {elbow:?}");
        }
    }

    #[test]
    fn repeated_connection_adds_no_duplicates() {
        let op = ConnectRooms::new(6);
        let a = room_at(0, p(0.0, 0.0));
        let b = room_at(1, p(0.0, 100.0));
        let c = room_at(2, p(60.0, 80.0));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut hallways = Vec::new();

        op.execute(&a, &b, &mut hallways, &mut rng);
        op.execute(&a, &b, &mut hallways, &mut rng);
        op.execute(&b, &a, &mut hallways, &mut rng);
        assert_eq!(hallways.len(), 1);

        for _ in 0..8 {
            op.execute(&a, &c, &mut hallways, &mut rng);
        }
        for (i, h) in hallways.iter().enumerate() {
            assert!(!hallways[i + 1..].contains(h), "duplicate hallway {h:?}");
        }
        // At most the straight segment plus one L pair per elbow choice.
        assert!(hallways.len() <= 5);
    }

    #[test]
    fn routes_every_connection() {
        let mut store = RoomStore::new();
        let a = store.add_room(room_at(0, p(0.0, 0.0)));
        let b = store.add_room(room_at(1, p(100.0, 0.0)));
        let c = store.add_room(room_at(2, p(50.0, 70.0)));
        let va = Vertex::for_room(p(0.0, 0.0), a);
        let vb = Vertex::for_room(p(100.0, 0.0), b);
        let vc = Vertex::for_room(p(50.0, 70.0), c);
        let connections = [Edge::new(va, vb), Edge::new(va, vc)];

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let hallways = RouteHallways::new(6)
            .execute(&store, &connections, &mut rng)
            .unwrap();
        assert_eq!(hallways.len(), 3);
    }

    #[test]
    fn connections_without_rooms_are_ignored() {
        let store = RoomStore::new();
        let connections = [Edge::new(Vertex::free(0.0, 0.0), Vertex::free(5.0, 5.0))];
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let hallways = RouteHallways::new(6)
            .execute(&store, &connections, &mut rng)
            .unwrap();
        assert!(hallways.is_empty());
    }
}
