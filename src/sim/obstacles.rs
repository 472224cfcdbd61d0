//! Scrolling gap obstacles
//!
//! A fixed pool of pillars scrolls left; the left-most one is recycled to the
//! right edge with a freshly rolled gap center once the right-most has
//! cleared the spacing threshold. Exactly `obstacle_count` obstacles exist
//! for the lifetime of a session, giving an infinite stream without
//! allocation after spawn.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// One gap pillar. Spans vertically from the floor to the field top with a
/// passable window of `config.gap_size` centered at `gap_center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge, decreasing over time
    pub x: f32,
    /// Vertical center of the passable window, fixed until recycled
    pub gap_center: f32,
}

/// The set of active obstacles for a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub(crate) obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Discard any existing obstacles and place `obstacle_count` fresh ones
    /// at staggered positions off the right edge of the field.
    pub fn spawn_all(&mut self, config: &GameConfig, rng: &mut Pcg32) {
        let (lo, hi) = config.gap_center_band();
        self.obstacles.clear();
        self.obstacles.reserve(config.obstacle_count);
        for i in 0..config.obstacle_count {
            self.obstacles.push(Obstacle {
                x: config.field_width + i as f32 * config.obstacle_spacing,
                gap_center: rng.random_range(lo..=hi),
            });
        }
    }

    /// Scroll every obstacle left by `speed*dt`, then recycle the left-most
    /// obstacle to the right edge once the right-most has moved a full
    /// spacing inside the field. Ties on minimum x go to the first obstacle
    /// in iteration order, which keeps runs reproducible for a fixed seed.
    pub fn advance(&mut self, dt: f32, config: &GameConfig, rng: &mut Pcg32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= config.obstacle_speed * dt;
        }

        if self.obstacles.is_empty() {
            return;
        }
        let right_most_x = self
            .obstacles
            .iter()
            .map(|o| o.x)
            .fold(f32::NEG_INFINITY, f32::max);

        if right_most_x <= config.field_width - config.obstacle_spacing {
            let mut left_most = 0;
            for (i, obstacle) in self.obstacles.iter().enumerate() {
                if obstacle.x < self.obstacles[left_most].x {
                    left_most = i;
                }
            }
            let (lo, hi) = config.gap_center_band();
            let recycled = &mut self.obstacles[left_most];
            recycled.x = config.field_width;
            recycled.gap_center = rng.random_range(lo..=hi);
            log::debug!(
                "recycled obstacle {left_most} to x={} gap_center={}",
                recycled.x,
                recycled.gap_center
            );
        }
    }
}
