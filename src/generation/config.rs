use crate::error::ConfigError;
use crate::hallway::DEFAULT_HALLWAY_WIDTH;
use crate::room::PlacementBounds;

/// Parameters controlling dungeon generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Width of the room spawn region.
    pub bounds_width: f64,
    /// Height of the room spawn region.
    pub bounds_height: f64,
    /// Smallest room side.
    pub min_room_size: u32,
    /// Largest room side.
    pub max_room_size: u32,
    /// Number of primary rooms kept after separation.
    pub min_room_count: u32,
    /// Rooms spawned per primary room; the surplus become secondary rooms.
    pub rooms_per_primary: u32,
    /// Repulsion reach as a multiple of `max_room_size`.
    pub tightness: f64,
    /// Extra repulsion reach added on top of the tightness term.
    pub separation_gap: f64,
    /// Distance a repelled room moves per separation pass.
    pub separation_speed: f64,
    /// Separation passes allowed before giving up on overlap removal.
    pub max_separation_ticks: u32,
    /// Probability of keeping each non-tree triangulation edge.
    pub extra_connection_chance: f64,
    /// Rendering width of each hallway.
    pub hallway_width: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bounds_width: 1280.0,
            bounds_height: 720.0,
            min_room_size: 30,
            max_room_size: 80,
            min_room_count: 6,
            rooms_per_primary: 7,
            tightness: 1.5,
            separation_gap: 2.0,
            separation_speed: 3.0,
            max_separation_ticks: 10_000,
            extra_connection_chance: 0.125,
            hallway_width: DEFAULT_HALLWAY_WIDTH,
        }
    }
}

impl GenerationConfig {
    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` naming the first bad parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::InvalidConfig(msg.into()));

        if !(self.bounds_width > 0.0 && self.bounds_width.is_finite())
            || !(self.bounds_height > 0.0 && self.bounds_height.is_finite())
        {
            return invalid("bounds must be positive and finite");
        }
        if self.min_room_size == 0 {
            return invalid("min_room_size must be positive");
        }
        if self.min_room_size > self.max_room_size {
            return invalid("min_room_size must not exceed max_room_size");
        }
        if self.min_room_count == 0 {
            return invalid("min_room_count must be positive");
        }
        if self.rooms_per_primary == 0 {
            return invalid("rooms_per_primary must be positive");
        }
        if !(self.tightness >= 0.0 && self.tightness.is_finite()) {
            return invalid("tightness must be non-negative and finite");
        }
        if !(self.separation_gap >= 0.0 && self.separation_gap.is_finite()) {
            return invalid("separation_gap must be non-negative and finite");
        }
        if !(self.separation_speed > 0.0 && self.separation_speed.is_finite()) {
            return invalid("separation_speed must be positive and finite");
        }
        if !(0.0..=1.0).contains(&self.extra_connection_chance) {
            return invalid("extra_connection_chance must be within [0, 1]");
        }
        Ok(())
    }

    /// Number of rooms spawned at the start of a pass.
    #[must_use]
    pub fn generated_room_count(&self) -> u32 {
        self.min_room_count.saturating_mul(self.rooms_per_primary)
    }

    /// Spawn region and size limits for room placement.
    #[must_use]
    pub fn placement_bounds(&self) -> PlacementBounds {
        PlacementBounds {
            width: self.bounds_width,
            height: self.bounds_height,
            min_size: self.min_room_size,
            max_size: self.max_room_size,
        }
    }
}
