use std::collections::HashSet;

use rand::Rng;

use crate::graph::{Edge, EdgeKey};

/// Picks the room connections that hallways get built for: every
/// spanning-tree edge, plus each remaining triangulation edge with
/// probability `chance`, to put some loops back into the layout.
#[derive(Debug, Clone, Copy)]
pub struct SelectConnections {
    chance: f64,
}

impl SelectConnections {
    /// Creates a new `SelectConnections` operation.
    ///
    /// `chance` is clamped to `[0, 1]`; NaN keeps no extra edges.
    #[must_use]
    pub fn new(chance: f64) -> Self {
        let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        Self { chance }
    }

    /// Executes the selection. Spanning-tree edges come first, in their
    /// order, followed by the retained extras in pool order.
    pub fn execute(&self, pool: &[Edge], tree: &[Edge], rng: &mut impl Rng) -> Vec<Edge> {
        let in_tree: HashSet<EdgeKey> = tree.iter().map(Edge::key).collect();
        let mut connections = tree.to_vec();
        for edge in pool {
            if in_tree.contains(&edge.key()) {
                continue;
            }
            if rng.gen_bool(self.chance) {
                connections.push(*edge);
            }
        }
        connections
    }
}
