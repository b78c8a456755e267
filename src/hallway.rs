use crate::math::Point2;

/// Default corridor width handed to the renderer.
pub const DEFAULT_HALLWAY_WIDTH: u32 = 6;

/// A straight corridor segment between two points.
///
/// Two hallways are equal when they cover the same endpoint pair, in either
/// direction.
#[derive(Debug, Clone, Copy)]
pub struct Hallway {
    /// First endpoint.
    pub start: Point2,
    /// Second endpoint.
    pub end: Point2,
    /// Rendering width.
    pub width: u32,
}

impl Hallway {
    #[must_use]
    pub fn new(start: Point2, end: Point2, width: u32) -> Self {
        Self { start, end, width }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

impl PartialEq for Hallway {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}
