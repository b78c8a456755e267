mod connect_rooms;

pub use connect_rooms::{ConnectRooms, RouteHallways};
