use std::collections::HashSet;

use tracing::{trace, warn};

use crate::error::{GeometryError, Result};
use crate::graph::{Edge, Triangle, Vertex};
use crate::math::{Point2, Vector2};

/// Super-triangle corners sit this many bounding-box sizes outside the points.
const SUPER_TRIANGLE_MARGIN: f64 = 100.0;

/// Perturbation step, as a fraction of the bounding-box size.
const PERTURBATION_SCALE: f64 = 1e-6;

/// Perturbed re-insertions tried before a vertex is skipped.
const PERTURBATION_ATTEMPTS: u32 = 4;

/// Result of a Bowyer-Watson triangulation.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    /// Triangles over the input vertices, super-triangle corners purged.
    pub triangles: Vec<Triangle>,
    /// Edges between input vertices whose every triangle was purged. Along a
    /// (near-)collinear run these are the only edges left.
    pub hull_edges: Vec<Edge>,
    /// The synthetic triangle that seeded the triangulation.
    pub super_triangle: Option<Triangle>,
    /// Vertices inserted at a slightly shifted position (original coordinates).
    pub perturbed: Vec<Vertex>,
    /// Vertices left out: exact duplicates, or still degenerate after perturbation.
    pub skipped: Vec<Vertex>,
}

/// Incremental Delaunay triangulation (Bowyer-Watson) of a vertex list.
#[derive(Debug, Clone)]
pub struct Triangulate<'a> {
    vertices: &'a [Vertex],
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(vertices: &'a [Vertex]) -> Self {
        Self { vertices }
    }

    /// Executes the triangulation.
    ///
    /// Vertices are inserted in input order. An insertion that would create a
    /// collinear triangle is rolled back and retried with a small
    /// deterministic shift; if every retry fails the vertex is skipped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if no enclosing super-triangle can
    /// be built (non-finite input coordinates).
    pub fn execute(&self) -> Result<Triangulation> {
        let mut result = Triangulation::default();
        if self.vertices.is_empty() {
            return Ok(result);
        }

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            if seen.insert(vertex.key()) {
                unique.push(*vertex);
            } else {
                warn!(x = vertex.point.x, y = vertex.point.y, "skipping duplicate vertex");
                result.skipped.push(*vertex);
            }
        }

        let (super_triangle, size) = super_triangle(&unique)?;
        let mut triangles = vec![super_triangle.clone()];

        for vertex in &unique {
            match insert_with_retries(&mut triangles, *vertex, size) {
                Insertion::Inserted => {}
                Insertion::Perturbed => {
                    warn!(x = vertex.point.x, y = vertex.point.y, "perturbed degenerate vertex");
                    result.perturbed.push(*vertex);
                }
                Insertion::Skipped => {
                    warn!(x = vertex.point.x, y = vertex.point.y, "skipping degenerate vertex");
                    result.skipped.push(*vertex);
                }
            }
        }

        let (kept, purged): (Vec<Triangle>, Vec<Triangle>) = triangles
            .into_iter()
            .partition(|t| !t.shares_vertex_with(&super_triangle));
        let mut seen = HashSet::new();
        result.hull_edges = purged
            .iter()
            .flat_map(|t| t.edges().iter().copied())
            .filter(|e| !super_triangle.has_vertex(e.start()) && !super_triangle.has_vertex(e.end()))
            .filter(|e| seen.insert(e.key()))
            .collect();
        trace!(
            triangles = kept.len(),
            hull_edges = result.hull_edges.len(),
            "triangulation complete"
        );

        result.triangles = kept;
        result.super_triangle = Some(super_triangle);
        Ok(result)
    }
}

/// Outcome of inserting one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Insertion {
    Inserted,
    /// Inserted at a shifted position.
    Perturbed,
    Skipped,
}

/// Inserts `vertex`, falling back to up to [`PERTURBATION_ATTEMPTS`] shifted
/// copies of it. `triangles` is untouched when the vertex is skipped.
fn insert_with_retries(triangles: &mut Vec<Triangle>, vertex: Vertex, size: f64) -> Insertion {
    if insert_vertex(triangles, vertex).is_ok() {
        return Insertion::Inserted;
    }
    let inserted = (1..=PERTURBATION_ATTEMPTS).any(|attempt| {
        let shifted = Vertex {
            point: vertex.point + perturbation(attempt, size),
            room: vertex.room,
        };
        insert_vertex(triangles, shifted).is_ok()
    });
    if inserted {
        Insertion::Perturbed
    } else {
        Insertion::Skipped
    }
}

/// Inserts one vertex, leaving `triangles` untouched on failure.
fn insert_vertex(triangles: &mut Vec<Triangle>, vertex: Vertex) -> std::result::Result<(), GeometryError> {
    let bad: Vec<usize> = triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| t.circumcircle().contains(&vertex.point))
        .map(|(i, _)| i)
        .collect();

    if bad.is_empty() {
        return Err(GeometryError::Degenerate(
            "vertex lies on or outside every circumcircle".into(),
        ));
    }

    // Cavity boundary: edges of bad triangles not shared with another bad triangle.
    let mut polygon: Vec<Edge> = Vec::new();
    for &i in &bad {
        for edge in triangles[i].edges() {
            let shared = bad
                .iter()
                .filter(|&&j| j != i)
                .any(|&j| triangles[j].edges().contains(edge));
            if !shared {
                polygon.push(*edge);
            }
        }
    }

    let fresh = polygon
        .iter()
        .map(|edge| Triangle::new(*edge.start(), *edge.end(), vertex))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut index = 0;
    triangles.retain(|_| {
        let keep = bad.binary_search(&index).is_err();
        index += 1;
        keep
    });
    triangles.extend(fresh);
    Ok(())
}

/// Builds a triangle enclosing every vertex strictly in its interior.
///
/// One corner sits far above the top edge of the bounding box, one far to the
/// right and one far to the left, both below the bottom edge. Returns the
/// triangle and the bounding-box size used for the offsets.
fn super_triangle(vertices: &[Vertex]) -> std::result::Result<(Triangle, f64), GeometryError> {
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for v in vertices {
        min.x = min.x.min(v.point.x);
        min.y = min.y.min(v.point.y);
        max.x = max.x.max(v.point.x);
        max.y = max.y.max(v.point.y);
    }

    let size = (max.x - min.x).max(max.y - min.y).max(1.0);
    if !size.is_finite() {
        return Err(GeometryError::Degenerate(
            "cannot bound non-finite vertices".into(),
        ));
    }
    let margin = SUPER_TRIANGLE_MARGIN * size;
    let mid_x = (min.x + max.x) / 2.0;

    let top = Vertex::free(mid_x, max.y + margin);
    let right = Vertex::free(max.x + margin, min.y - size);
    let left = Vertex::free(min.x - margin, min.y - size);
    Ok((Triangle::new(top, right, left)?, size))
}

/// Deterministic shift for the given retry, growing with each attempt.
fn perturbation(attempt: u32, size: f64) -> Vector2 {
    let step = f64::from(attempt) * PERTURBATION_SCALE * size;
    let angle = f64::from(attempt) * 2.399_963; // golden angle, radians
    Vector2::new(angle.cos(), angle.sin()) * step
}
