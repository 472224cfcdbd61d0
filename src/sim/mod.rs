//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (delta time passed in, never measured)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//!
//! Presentation layers consume the `Snapshot` render feed and the
//! `GameEvent`s returned by `tick`; nothing mutates game state from outside.

pub mod bird;
pub mod collision;
pub mod obstacles;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{CollisionResult, evaluate};
pub use obstacles::{Obstacle, ObstacleField};
pub use snapshot::{ObstacleSnapshot, Snapshot};
pub use state::{GamePhase, GameState};
pub use tick::{GameEvent, TickError, TickInput, tick};
