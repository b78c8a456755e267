pub mod error;
pub mod generation;
pub mod geometry;
pub mod graph;
pub mod hallway;
pub mod math;
pub mod operations;
pub mod room;

pub use error::{LayoutError, Result};
pub use generation::{Dungeon, GenerationConfig, GenerationWarning, Snapshot, Stage};
