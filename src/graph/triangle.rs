use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::GeometryError;
use crate::geometry::Circle;
use crate::math::{distance, Point2};

/// Heron areas below this fraction of the longest side squared are treated
/// as collinear.
const DEGENERATE_AREA_RATIO: f64 = 1e-12;

/// An immutable triangle with cached edges and circumcircle.
#[derive(Debug, Clone)]
pub struct Triangle {
    a: Vertex,
    b: Vertex,
    c: Vertex,
    edges: [Edge; 3],
    circumcircle: Circle,
}

impl Triangle {
    /// Creates a triangle and computes its circumcircle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the vertices are (nearly)
    /// collinear or coincident, so that no finite circumcircle exists.
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Result<Self, GeometryError> {
        let circumcircle = circumcircle(&a.point, &b.point, &c.point)?;
        Ok(Self {
            a,
            b,
            c,
            edges: [Edge::new(a, b), Edge::new(a, c), Edge::new(b, c)],
            circumcircle,
        })
    }

    #[must_use]
    pub fn a(&self) -> &Vertex {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &Vertex {
        &self.b
    }

    #[must_use]
    pub fn c(&self) -> &Vertex {
        &self.c
    }

    /// The three vertices in `a, b, c` order.
    #[must_use]
    pub fn vertices(&self) -> [&Vertex; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// The edges in `ab, ac, bc` order.
    #[must_use]
    pub fn edges(&self) -> &[Edge; 3] {
        &self.edges
    }

    #[must_use]
    pub fn circumcircle(&self) -> &Circle {
        &self.circumcircle
    }

    /// Returns `true` if any corner coincides with `v`.
    #[must_use]
    pub fn has_vertex(&self, v: &Vertex) -> bool {
        self.a == *v || self.b == *v || self.c == *v
    }

    /// Returns `true` if this triangle shares any corner with `other`.
    #[must_use]
    pub fn shares_vertex_with(&self, other: &Triangle) -> bool {
        other.vertices().into_iter().any(|v| self.has_vertex(v))
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.c == other.c
    }
}

/// Computes the circumcircle through three points.
///
/// The radius comes from Heron's formula (`abc / 4K`), the center from the
/// perpendicular-bisector determinant.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for collinear or coincident points.
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn circumcircle(a: &Point2, b: &Point2, c: &Point2) -> Result<Circle, GeometryError> {
    let ab = distance(a, b);
    let ac = distance(a, c);
    let bc = distance(b, c);

    let s = (ab + ac + bc) / 2.0;
    let area = (s * (s - ab) * (s - ac) * (s - bc)).sqrt();
    let longest = ab.max(ac).max(bc);

    // `!(x > y)` also rejects NaN from a negative Heron product.
    if !(area > longest * longest * DEGENERATE_AREA_RATIO) {
        return Err(GeometryError::Degenerate(format!(
            "collinear triangle ({}, {}), ({}, {}), ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        )));
    }

    let radius = (ab * ac * bc) / (4.0 * area);

    let b_sq = b.y * b.y - a.y * a.y + b.x * b.x - a.x * a.x;
    let c_sq = c.y * c.y - a.y * a.y + c.x * c.x - a.x * a.x;
    let det_x = 2.0 * (c.x - a.x) * (b.y - a.y) - 2.0 * (b.x - a.x) * (c.y - a.y);
    let det_y = 2.0 * (c.y - a.y) * (b.x - a.x) - 2.0 * (b.y - a.y) * (c.x - a.x);
    let center = Point2::new(
        ((b.y - a.y) * c_sq - (c.y - a.y) * b_sq) / det_x,
        ((b.x - a.x) * c_sq - (c.x - a.x) * b_sq) / det_y,
    );

    if !(radius.is_finite() && center.x.is_finite() && center.y.is_finite()) {
        return Err(GeometryError::Degenerate(
            "circumcircle is not finite".into(),
        ));
    }

    Ok(Circle::new(center, radius))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::free(x, y)
    }

    #[test]
    fn circumcircle_of_isosceles() {
        let circle = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(5.0, 10.0),
        )
        .unwrap();
        assert_relative_eq!(circle.center().x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(circle.center().y, 3.75, epsilon = 1e-9);
        assert_relative_eq!(circle.radius(), 6.25, epsilon = 1e-9);
    }

    #[test]
    fn circumcircle_of_right_triangle_centers_on_hypotenuse() {
        let circle = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(6.0, 0.0),
            &Point2::new(0.0, 8.0),
        )
        .unwrap();
        assert_relative_eq!(circle.center().x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(circle.center().y, 4.0, epsilon = 1e-9);
        assert_relative_eq!(circle.radius(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let err = Triangle::new(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)).unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        assert!(Triangle::new(v(1.0, 1.0), v(1.0, 1.0), v(5.0, 2.0)).is_err());
    }

    #[test]
    fn edges_in_fixed_order() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(5.0, 10.0));
        let t = Triangle::new(a, b, c).unwrap();
        let [ab, ac, bc] = t.edges();
        assert_eq!(*ab, Edge::new(a, b));
        assert_eq!(*ac, Edge::new(a, c));
        assert_eq!(*bc, Edge::new(b, c));
    }

    #[test]
    fn equality_is_vertex_order_sensitive() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(5.0, 10.0));
        let t1 = Triangle::new(a, b, c).unwrap();
        let t2 = Triangle::new(a, b, c).unwrap();
        let t3 = Triangle::new(b, a, c).unwrap();
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn vertex_sharing() {
        let t1 = Triangle::new(v(0.0, 0.0), v(10.0, 0.0), v(5.0, 10.0)).unwrap();
        let t2 = Triangle::new(v(10.0, 0.0), v(20.0, 0.0), v(15.0, 10.0)).unwrap();
        let t3 = Triangle::new(v(30.0, 0.0), v(40.0, 0.0), v(35.0, 10.0)).unwrap();
        assert!(t1.has_vertex(&v(5.0, 10.0)));
        assert!(t1.shares_vertex_with(&t2));
        assert!(!t1.shares_vertex_with(&t3));
    }
}
