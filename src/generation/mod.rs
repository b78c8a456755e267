pub mod config;
pub mod dungeon;
pub mod stage;
pub mod step;

pub use config::GenerationConfig;
pub use dungeon::{Dungeon, Snapshot};
pub use stage::Stage;
pub use step::{step, GenerationState, GenerationWarning};
