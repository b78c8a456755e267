pub mod graph;
pub mod hallways;
pub mod rooms;
