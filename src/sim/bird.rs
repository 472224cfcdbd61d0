//! The player-controlled bird
//!
//! Pure state: position, vertical velocity, sprite bounds. Gravity and flap
//! impulses are the only forces; fall speed is deliberately unclamped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bird entity. `pos` is the bottom-left corner of the sprite box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity, positive upward (units/s)
    pub velocity_y: f32,
    /// Sprite bounding box
    pub size: Vec2,
}

impl Bird {
    pub fn new(start: Vec2, size: Vec2) -> Self {
        Self {
            pos: start,
            velocity_y: 0.0,
            size,
        }
    }

    /// Set velocity to the flap impulse. Repeated calls just reset the
    /// velocity; impulses never accumulate.
    pub fn apply_flap(&mut self, impulse: f32) {
        self.velocity_y = impulse;
    }

    /// Semi-implicit Euler step: velocity first, then position.
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        self.velocity_y -= gravity * dt;
        self.pos.y += self.velocity_y * dt;
    }

    /// Return to the start position with zero velocity.
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
        self.velocity_y = 0.0;
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}
