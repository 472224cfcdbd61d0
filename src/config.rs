//! Game tunables
//!
//! Every constant the simulation depends on lives here so hosts can override
//! it at construction. Validation happens once, before any state exists.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Invalid constructor parameters. Fatal: rejected before a session exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension, speed, or duration that must be positive was not
    NonPositive(&'static str),
    /// Obstacle count must be at least 1
    ZeroObstacles,
    /// The gap window does not fit between the floor and the field top
    GapTooLarge { gap_size: f32, band: f32 },
    /// Bird start position is outside the playable band
    StartOutOfBounds,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::ZeroObstacles => write!(f, "obstacle_count must be at least 1"),
            ConfigError::GapTooLarge { gap_size, band } => {
                write!(f, "gap_size {gap_size} exceeds playable band {band}")
            }
            ConfigError::StartOutOfBounds => write!(f, "bird start is outside the playable band"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration
///
/// Defaults match the classic tuning: 800x600 field, 96px floor, five
/// obstacles spaced one quarter-field apart, 200px gap windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Downward acceleration (units/s^2)
    pub gravity: f32,
    /// Vertical velocity set by a flap (units/s)
    pub flap_impulse: f32,
    /// Number of obstacles alive at all times
    pub obstacle_count: usize,
    /// Horizontal distance between obstacle spawn positions
    pub obstacle_spacing: f32,
    /// Obstacle pillar width
    pub obstacle_width: f32,
    /// Leftward obstacle scroll speed (units/s)
    pub obstacle_speed: f32,
    /// Height of the passable window cut out of each obstacle
    pub gap_size: f32,
    /// Top of the floor band; the bird dies below it
    pub floor_height: f32,
    /// Playfield width
    pub field_width: f32,
    /// Playfield height; the bird dies above it
    pub field_height: f32,
    /// Bird spawn position (bottom-left corner)
    pub bird_start: Vec2,
    /// Bird sprite bounds
    pub bird_size: Vec2,
    /// Seconds spent in the Dying phase before the session resets
    pub dying_duration: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 300.0,
            flap_impulse: 150.0,
            obstacle_count: 5,
            obstacle_spacing: 200.0,
            obstacle_width: 64.0,
            obstacle_speed: 100.0,
            gap_size: 200.0,
            floor_height: 96.0,
            field_width: 800.0,
            field_height: 600.0,
            bird_start: Vec2::new(20.0, 252.0),
            bird_size: Vec2::new(48.0, 36.0),
            dying_duration: 6.0,
        }
    }
}

impl GameConfig {
    /// Check every parameter the simulation divides by, scrolls with, or
    /// samples from. Called by `GameState::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(value: f32, field: &'static str) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::NonPositive(field))
            }
        }

        positive(self.gravity, "gravity")?;
        positive(self.flap_impulse, "flap_impulse")?;
        positive(self.obstacle_spacing, "obstacle_spacing")?;
        positive(self.obstacle_width, "obstacle_width")?;
        positive(self.obstacle_speed, "obstacle_speed")?;
        positive(self.gap_size, "gap_size")?;
        positive(self.floor_height, "floor_height")?;
        positive(self.field_width, "field_width")?;
        positive(self.field_height, "field_height")?;
        positive(self.bird_size.x, "bird_size.x")?;
        positive(self.bird_size.y, "bird_size.y")?;
        positive(self.dying_duration, "dying_duration")?;

        if self.obstacle_count == 0 {
            return Err(ConfigError::ZeroObstacles);
        }

        let band = self.field_height - self.floor_height;
        if self.gap_size >= band {
            return Err(ConfigError::GapTooLarge {
                gap_size: self.gap_size,
                band,
            });
        }

        let start_ok = self.bird_start.y >= self.floor_height
            && self.bird_start.y + self.bird_size.y <= self.field_height
            && self.bird_start.x >= 0.0
            && self.bird_start.x + self.bird_size.x <= self.field_width;
        if !start_ok {
            return Err(ConfigError::StartOutOfBounds);
        }

        Ok(())
    }

    /// Inclusive range of legal gap centers: the full gap window must fit
    /// between the floor and the field top.
    pub fn gap_center_band(&self) -> (f32, f32) {
        let half = self.gap_size / 2.0;
        (self.floor_height + half, self.field_height - half)
    }
}
