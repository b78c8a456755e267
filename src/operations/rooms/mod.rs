mod assign_boss;
mod place_rooms;
mod reinsert_rooms;
mod separate_rooms;
mod truncate_rooms;

pub use assign_boss::AssignBoss;
pub use place_rooms::PlaceRooms;
pub use reinsert_rooms::ReinsertRooms;
pub use separate_rooms::{rooms_overlapping, SeparateRooms};
pub use truncate_rooms::{TruncateRooms, Truncation};
