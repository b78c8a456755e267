pub mod intersect_2d;

/// 2D point type (absolute position).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type (displacement).
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the unit vector along `v`, or `None` if `v` has (near) zero length.
#[must_use]
pub fn normalized(v: &Vector2) -> Option<Vector2> {
    let len = v.norm();
    if len < TOLERANCE || !len.is_finite() {
        return None;
    }
    Some(v / len)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}
