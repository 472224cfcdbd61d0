//! Session state
//!
//! Everything the simulation owns lives in `GameState`; nothing outside the
//! crate mutates it except through `tick`. The RNG is seeded once per state
//! so gap placement replays identically for a fixed seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};

use super::bird::Bird;
use super::obstacles::ObstacleField;
use super::snapshot::{ObstacleSnapshot, Snapshot};

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start: waiting for a `start` input
    Idle,
    /// Active gameplay
    Playing,
    /// Post-hit grace window; gameplay is frozen until the timer elapses
    Dying,
}

/// Complete session state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter, advancing in Playing and Dying
    pub time_ticks: u64,
    pub bird: Bird,
    pub obstacles: ObstacleField,
    /// Overlap state from the previous tick; scoring fires on the falling edge
    pub(crate) was_overlapping: bool,
    /// Seconds remaining in the Dying phase
    pub(crate) dying_timer: f32,
}

impl GameState {
    /// Validate the config and build an idle session.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let bird = Bird::new(config.bird_start, config.bird_size);
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            bird,
            obstacles: ObstacleField::new(),
            was_overlapping: false,
            dying_timer: 0.0,
            config,
        })
    }

    /// Reset score/bird/obstacles and enter Playing. Cancels a pending
    /// Dying timer, so a restart during the game-over window takes effect
    /// immediately.
    pub(crate) fn start_session(&mut self) {
        self.score = 0;
        self.was_overlapping = false;
        self.dying_timer = 0.0;
        self.bird.reset(self.config.bird_start);
        self.obstacles.spawn_all(&self.config, &mut self.rng);
        self.phase = GamePhase::Playing;
        log::info!("session started (seed {})", self.seed);
    }

    /// Immutable render feed for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            score: self.score,
            bird_pos: self.bird.pos,
            bird_velocity_y: self.bird.velocity_y,
            obstacles: self
                .obstacles
                .obstacles()
                .iter()
                .map(|o| ObstacleSnapshot {
                    x: o.x,
                    gap_center: o.gap_center,
                    gap_size: self.config.gap_size,
                    width: self.config.obstacle_width,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(GameConfig::default(), 1).unwrap();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.bird.pos, GameConfig::default().bird_start);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.obstacle_count = 0;
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_start_session_populates_field() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.start_session();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.obstacles.len(), state.config.obstacle_count);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.start_session();
        state.score = 3;

        let snapshot = state.snapshot();
        assert_eq!(snapshot.score, 3);
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.bird_pos, state.bird.pos);
        assert_eq!(snapshot.obstacles.len(), state.config.obstacle_count);
        assert_eq!(snapshot.obstacles[0].width, state.config.obstacle_width);
    }
}
