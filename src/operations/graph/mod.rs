mod select_connections;
mod spanning_tree;
mod triangulate;

pub use select_connections::SelectConnections;
pub use spanning_tree::SpanningTree;
pub use triangulate::{Triangulate, Triangulation};
