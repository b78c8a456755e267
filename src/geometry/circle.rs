use crate::math::Point2;

/// A circle in the plane, used as a triangle circumcircle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strict containment: points on the circle itself are outside.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        (point - self.center).norm_squared() < self.radius * self.radius
    }
}
