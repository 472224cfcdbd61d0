//! Cloud Hopper - a flappy-bird style arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, obstacles, collisions, scoring)
//! - `config`: Validated game tunables
//! - `clock`: Fixed-timestep frame clock
//!
//! The crate is headless. A presentation layer (renderer, audio, input) drives
//! `sim::tick` with a `TickInput`, reads back `Snapshot`s for drawing, and maps
//! the returned `GameEvent`s to sounds and UI effects.

pub mod clock;
pub mod config;
pub mod sim;

pub use clock::FrameClock;
pub use config::{ConfigError, GameConfig};

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
}
