use std::collections::HashMap;

use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use crate::graph::Edge;

/// Extracts a minimum spanning forest from a weighted edge pool (Kruskal).
///
/// Edges are visited in ascending weight; ties keep their pool order. An
/// edge is kept iff its endpoints are not yet in the same component.
#[derive(Debug, Clone)]
pub struct SpanningTree<'a> {
    edges: &'a [Edge],
}

impl<'a> SpanningTree<'a> {
    /// Creates a new `SpanningTree` operation over `edges`.
    #[must_use]
    pub fn new(edges: &'a [Edge]) -> Self {
        Self { edges }
    }

    /// Executes the extraction, returning the kept edges in visiting order.
    #[must_use]
    pub fn execute(&self) -> Vec<Edge> {
        let mut order: Vec<&Edge> = self.edges.iter().collect();
        order.sort_by(|a, b| a.cmp_weight(b));

        let mut index: HashMap<(u64, u64), usize> = HashMap::new();
        for edge in &order {
            for vertex in [edge.start(), edge.end()] {
                let next = index.len();
                index.entry(vertex.key()).or_insert(next);
            }
        }

        let mut components = QuickUnionUf::<UnionBySize>::new(index.len());
        order
            .into_iter()
            .filter(|edge| {
                let a = index[&edge.start().key()];
                let b = index[&edge.end().key()];
                components.union(a, b)
            })
            .copied()
            .collect()
    }
}
