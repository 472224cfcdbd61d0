//! Collision detection for the bird against obstacles and field bounds
//!
//! Pure functions over value state: no side effects, no mutation. A bird box
//! overlapping an obstacle box is not lethal by itself; only leaving the gap
//! window (or breaching the floor/ceiling) kills. Overlap alone is reported
//! separately because scoring keys off the overlap falling edge.

use crate::config::GameConfig;

use super::bird::Bird;
use super::obstacles::Obstacle;

/// Result of one collision evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    /// Bird box overlaps at least one obstacle box (gap or not)
    pub overlapping: bool,
    /// Lethal this tick: outside a gap window while overlapping, or
    /// floor/ceiling breach
    pub hit: bool,
}

/// Axis-aligned rectangle intersection on half-open spans.
#[inline]
fn boxes_overlap(
    a_min: (f32, f32),
    a_max: (f32, f32),
    b_min: (f32, f32),
    b_max: (f32, f32),
) -> bool {
    a_min.0 < b_max.0 && a_max.0 > b_min.0 && a_min.1 < b_max.1 && a_max.1 > b_min.1
}

/// Classify the bird against every obstacle plus the field bounds.
pub fn evaluate(bird: &Bird, obstacles: &[Obstacle], config: &GameConfig) -> CollisionResult {
    let mut result = CollisionResult::default();
    let half_gap = config.gap_size / 2.0;

    for obstacle in obstacles {
        // Obstacle pillars span from the floor to the field top; the gap is
        // the cut-out, so the bounding box ignores it.
        let overlaps = boxes_overlap(
            (bird.left(), bird.bottom()),
            (bird.right(), bird.top()),
            (obstacle.x, config.floor_height),
            (obstacle.x + config.obstacle_width, config.field_height),
        );
        if !overlaps {
            continue;
        }
        result.overlapping = true;

        let below_gap = bird.bottom() < obstacle.gap_center - half_gap;
        let above_gap = bird.top() > obstacle.gap_center + half_gap;
        if below_gap || above_gap {
            result.hit = true;
        }
    }

    // Floor and ceiling kill regardless of obstacle overlap
    if bird.bottom() < config.floor_height || bird.top() > config.field_height {
        result.hit = true;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn bird_at(x: f32, y: f32) -> Bird {
        Bird::new(Vec2::new(x, y), Vec2::new(48.0, 36.0))
    }

    fn obstacle_at(x: f32, gap_center: f32) -> Obstacle {
        Obstacle { x, gap_center }
    }

    #[test]
    fn test_inside_gap_overlaps_without_hit() {
        let config = config();
        // Gap centered at 300 spans [200, 400]; bird box [282, 318] is inside
        let bird = bird_at(100.0, 282.0);
        let obstacles = [obstacle_at(90.0, 300.0)];

        let result = evaluate(&bird, &obstacles, &config);
        assert!(result.overlapping);
        assert!(!result.hit);
    }

    #[test]
    fn test_below_gap_window_is_lethal() {
        let config = config();
        // Bird bottom 150 < gap bottom 200
        let bird = bird_at(100.0, 150.0);
        let obstacles = [obstacle_at(90.0, 300.0)];

        let result = evaluate(&bird, &obstacles, &config);
        assert!(result.overlapping);
        assert!(result.hit);
    }

    #[test]
    fn test_above_gap_window_is_lethal() {
        let config = config();
        // Bird top 436 > gap top 400
        let bird = bird_at(100.0, 400.0);
        let obstacles = [obstacle_at(90.0, 300.0)];

        let result = evaluate(&bird, &obstacles, &config);
        assert!(result.overlapping);
        assert!(result.hit);
    }

    #[test]
    fn test_no_horizontal_overlap_no_collision() {
        let config = config();
        let bird = bird_at(100.0, 150.0);
        // Obstacle entirely to the right of the bird
        let obstacles = [obstacle_at(500.0, 300.0)];

        let result = evaluate(&bird, &obstacles, &config);
        assert!(!result.overlapping);
        assert!(!result.hit);
    }

    #[test]
    fn test_floor_breach_without_obstacles() {
        let config = config();
        let bird = bird_at(20.0, 95.0); // bottom below floor at 96

        let result = evaluate(&bird, &[], &config);
        assert!(!result.overlapping);
        assert!(result.hit);
    }

    #[test]
    fn test_ceiling_breach_without_obstacles() {
        let config = config();
        let bird = bird_at(20.0, 570.0); // top 606 above field top at 600

        let result = evaluate(&bird, &[], &config);
        assert!(result.hit);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let config = config();
        // Bird right edge exactly at obstacle left edge
        let bird = bird_at(100.0, 282.0);
        let obstacles = [obstacle_at(148.0, 300.0)];

        let result = evaluate(&bird, &obstacles, &config);
        assert!(!result.overlapping);
    }

    #[test]
    fn test_worst_obstacle_wins() {
        let config = config();
        // Overlapping two obstacles: inside the first gap, outside the second
        let bird = bird_at(100.0, 282.0);
        let obstacles = [obstacle_at(90.0, 300.0), obstacle_at(120.0, 480.0)];

        let result = evaluate(&bird, &obstacles, &config);
        assert!(result.overlapping);
        assert!(result.hit);
    }
}
