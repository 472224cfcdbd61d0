//! Immutable render feed
//!
//! Plain-data copies of everything a presentation layer needs per frame. The
//! core never draws; hosts read snapshots and render however they like.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GamePhase;

/// One obstacle as the renderer sees it: pillar from floor to field top with
/// a gap window cut out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub x: f32,
    pub gap_center: f32,
    pub gap_size: f32,
    pub width: f32,
}

/// Per-tick view of the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Bird bottom-left corner
    pub bird_pos: Vec2,
    pub bird_velocity_y: f32,
    pub obstacles: Vec<ObstacleSnapshot>,
}
