pub mod edge;
pub mod triangle;
pub mod vertex;

pub use edge::{Edge, EdgeKey};
pub use triangle::{circumcircle, Triangle};
pub use vertex::{point_key, Vertex};

use std::collections::HashSet;

/// Graph state built up by the triangulation, spanning-tree and
/// connection-selection stages.
///
/// Each field is written once by its stage and read by later stages and by
/// the debug overlay. [`Graph::set_points`] drops all derived results.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    points: Vec<Vertex>,
    super_triangle: Option<Triangle>,
    triangles: Vec<Triangle>,
    edges: Vec<Edge>,
    mst_edges: Vec<Edge>,
    room_connections: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the input points and drops every derived result.
    pub fn set_points(&mut self, points: Vec<Vertex>) {
        *self = Self {
            points,
            ..Self::default()
        };
    }

    /// Stores a triangulation result and rebuilds the edge pool from its
    /// triangles plus the `hull_edges` that lost their triangles to the
    /// super-triangle purge.
    pub fn set_triangulation(
        &mut self,
        super_triangle: Option<Triangle>,
        triangles: Vec<Triangle>,
        hull_edges: &[Edge],
    ) {
        self.super_triangle = super_triangle;
        self.edges = collect_edge_pool(&triangles, hull_edges);
        self.triangles = triangles;
        self.mst_edges.clear();
        self.room_connections.clear();
    }

    pub fn set_mst_edges(&mut self, edges: Vec<Edge>) {
        self.mst_edges = edges;
    }

    pub fn set_room_connections(&mut self, edges: Vec<Edge>) {
        self.room_connections = edges;
    }

    /// Input vertices (room centers of the primary rooms).
    #[must_use]
    pub fn points(&self) -> &[Vertex] {
        &self.points
    }

    /// The synthetic triangle that seeded the last triangulation.
    #[must_use]
    pub fn super_triangle(&self) -> Option<&Triangle> {
        self.super_triangle.as_ref()
    }

    /// Final triangles, with every super-triangle triangle purged.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Unique triangulation edges sorted by ascending weight.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges of the minimum spanning forest.
    #[must_use]
    pub fn mst_edges(&self) -> &[Edge] {
        &self.mst_edges
    }

    /// Spanning-forest edges plus the retained extra edges.
    #[must_use]
    pub fn room_connections(&self) -> &[Edge] {
        &self.room_connections
    }
}

/// Collects the unique edges of `triangles` followed by `hull_edges`,
/// sorted by ascending weight.
///
/// Edges are taken per triangle in `ab, ac, bc` order, then the hull edges in
/// their given order; the first occurrence of each undirected edge is kept
/// and the sort is stable, so equal-weight edges keep their discovery order.
#[must_use]
pub fn collect_edge_pool(triangles: &[Triangle], hull_edges: &[Edge]) -> Vec<Edge> {
    let mut seen: HashSet<EdgeKey> = HashSet::new();
    let mut edges: Vec<Edge> = triangles
        .iter()
        .flat_map(|t| t.edges().iter().copied())
        .chain(hull_edges.iter().copied())
        .filter(|e| seen.insert(e.key()))
        .collect();
    edges.sort_by(Edge::cmp_weight);
    edges
}
