use rand::Rng;

use crate::geometry::Rect;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a room in the room store.
    pub struct RoomId;
}

/// Rooms are spawned no lower than this below the bounds' bottom edge.
const BORDER_GAP: f64 = 20.0;

/// Pulls the spawn band down from the vertical center of the bounds.
const CENTER_BAND_OFFSET: f64 = 10.0;

/// Special role of a room in the finished layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomKind {
    #[default]
    Default,
    /// The largest primary room, marked once generation is done.
    Boss,
}

/// A cosmetic RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    /// Random colour with an alpha between 0.25 and 0.75.
    pub fn random_translucent(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.gen_range(0.0..=1.0),
            g: rng.gen_range(0.0..=1.0),
            b: rng.gen_range(0.0..=1.0),
            a: rng.gen_range(0.25..=0.75),
        }
    }
}

/// Region and size limits used when placing a fresh room.
#[derive(Debug, Clone, Copy)]
pub struct PlacementBounds {
    /// Width of the spawn region.
    pub width: f64,
    /// Height of the spawn region.
    pub height: f64,
    /// Smallest allowed room side.
    pub min_size: u32,
    /// Largest allowed room side.
    pub max_size: u32,
}

/// A placed rectangular room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    index: u32,
    rect: Rect,
    area: f64,
    colour: Colour,
    is_fleeing: bool,
    kind: RoomKind,
}

impl Room {
    /// Creates a room from an explicit rectangle.
    #[must_use]
    pub fn new(index: u32, rect: Rect, colour: Colour) -> Self {
        Self {
            index,
            rect,
            area: rect.area(),
            colour,
            is_fleeing: false,
            kind: RoomKind::Default,
        }
    }

    /// Places a room of random size at a random spot inside `bounds`.
    ///
    /// The horizontal position is uniform over the bounds' width. The
    /// vertical position is drawn from the band between just below the
    /// bottom edge and a little under the vertical center.
    pub fn initialize(bounds: &PlacementBounds, index: u32, rng: &mut impl Rng) -> Self {
        let width = f64::from(rng.gen_range(bounds.min_size..=bounds.max_size));
        let height = f64::from(rng.gen_range(bounds.min_size..=bounds.max_size));

        let left = if bounds.width > 0.0 {
            rng.gen_range(0.0..bounds.width)
        } else {
            0.0
        };

        let center_y = bounds.height / 2.0 + height / 2.0;
        let band = center_y - CENTER_BAND_OFFSET;
        let bottom = if band > 0.0 {
            rng.gen_range(0.0..band) - BORDER_GAP
        } else {
            -BORDER_GAP
        };

        let colour = Colour::random_translucent(rng);
        Self::new(index, Rect::new(left, bottom, width, height), colour)
    }

    /// Numeric id assigned at creation, never reused within a generation.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// `true` if the room was pushed by another room in the last separation pass.
    #[must_use]
    pub fn is_fleeing(&self) -> bool {
        self.is_fleeing
    }

    #[must_use]
    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Center of the room's rectangle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.rect.center()
    }

    pub(crate) fn set_center(&mut self, center: Point2) {
        self.rect.set_center(center);
    }

    pub(crate) fn set_fleeing(&mut self, fleeing: bool) {
        self.is_fleeing = fleeing;
    }

    pub(crate) fn set_kind(&mut self, kind: RoomKind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bounds() -> PlacementBounds {
        PlacementBounds {
            width: 1280.0,
            height: 720.0,
            min_size: 30,
            max_size: 80,
        }
    }

    #[test]
    fn initialize_respects_size_limits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for i in 0..200 {
            let room = Room::initialize(&bounds(), i, &mut rng);
            let rect = room.rect();
            assert!((30.0..=80.0).contains(&rect.width));
            assert!((30.0..=80.0).contains(&rect.height));
            assert!((room.area() - rect.width * rect.height).abs() < f64::EPSILON);
            assert_eq!(room.index(), i);
            assert_eq!(room.kind(), RoomKind::Default);
            assert!(!room.is_fleeing());
        }
    }

    #[test]
    fn initialize_places_inside_spawn_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for i in 0..200 {
            let room = Room::initialize(&bounds(), i, &mut rng);
            let rect = room.rect();
            assert!(rect.left >= 0.0 && rect.left < 1280.0);
            assert!(rect.bottom >= -BORDER_GAP);
            assert!(rect.bottom < 360.0 + 40.0 - CENTER_BAND_OFFSET - BORDER_GAP);
        }
    }

    #[test]
    fn colour_is_translucent() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let c = Colour::random_translucent(&mut rng);
            assert!((0.25..=0.75).contains(&c.a));
            assert!((0.0..=1.0).contains(&c.r));
        }
    }

    #[test]
    fn same_seed_same_room() {
        let a = Room::initialize(&bounds(), 0, &mut ChaCha8Rng::seed_from_u64(42));
        let b = Room::initialize(&bounds(), 0, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
