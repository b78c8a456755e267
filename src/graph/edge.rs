use std::cmp::Ordering;

use super::vertex::Vertex;
use crate::math::distance;

/// An undirected, weighted connection between two vertices.
///
/// Endpoints are stored in lexicographic `(x, y)` order, so `(A, B)` and
/// `(B, A)` build the same edge and compare equal. Equality compares
/// endpoints; [`Edge::cmp_weight`] orders by Euclidean length only.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    start: Vertex,
    end: Vertex,
    weight: f64,
}

impl Edge {
    /// Creates the canonical edge between `a` and `b`.
    #[must_use]
    pub fn new(a: Vertex, b: Vertex) -> Self {
        let (start, end) = if lexicographic(&a, &b) == Ordering::Greater {
            (b, a)
        } else {
            (a, b)
        };
        Self {
            start,
            end,
            weight: distance(&start.point, &end.point),
        }
    }

    /// The lexicographically smaller endpoint.
    #[must_use]
    pub fn start(&self) -> &Vertex {
        &self.start
    }

    /// The lexicographically larger endpoint.
    #[must_use]
    pub fn end(&self) -> &Vertex {
        &self.end
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Hashable identity of the edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        (self.start.key(), self.end.key())
    }

    /// Orders edges by weight, ascending.
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

/// Exact endpoint identity of an [`Edge`].
pub type EdgeKey = ((u64, u64), (u64, u64));

fn lexicographic(a: &Vertex, b: &Vertex) -> Ordering {
    a.point
        .x
        .total_cmp(&b.point.x)
        .then_with(|| a.point.y.total_cmp(&b.point.y))
}
