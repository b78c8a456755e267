use crate::math::intersect_2d::segment_rect_clip_2d;
use crate::math::Point2;

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub left: f64,
    /// Y coordinate of the bottom edge.
    pub bottom: f64,
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate of the top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.left + self.width / 2.0, self.bottom + self.height / 2.0)
    }

    /// Moves the rectangle so its center lies at `center`, keeping its size.
    pub fn set_center(&mut self, center: Point2) {
        self.left = center.x - self.width / 2.0;
        self.bottom = center.y - self.height / 2.0;
    }

    /// AABB overlap test on open intervals.
    ///
    /// Rectangles that only touch along an edge or a corner do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.bottom < other.top()
            && other.bottom < self.top()
    }

    /// Returns `true` if the segment `p0 -> p1` touches the closed rectangle.
    #[must_use]
    pub fn intersects_segment(&self, p0: &Point2, p1: &Point2) -> bool {
        let min = Point2::new(self.left, self.bottom);
        let max = Point2::new(self.right(), self.top());
        segment_rect_clip_2d(p0, p1, &min, &max).is_some()
    }
}
