use thiserror::Error;

use crate::room::RoomId;

/// Top-level error type for dungeon layout generation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the room arena.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("room not found: {0:?}")]
    NotFound(RoomId),

    #[error("room {0:?} is not in the {1} pool")]
    NotInPool(RoomId, &'static str),
}

/// Errors raised while validating a generation configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
