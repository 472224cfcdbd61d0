//! Fixed timestep simulation tick
//!
//! One call advances the session by one step: flap input, bird integration,
//! obstacle scroll, collision classification, scoring, and the phase state
//! machine. Events describing what happened are returned to the caller;
//! presentation layers map them to sounds and UI effects.

use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Discrete flap press this tick
    pub flap: bool,
    /// Start (or restart) a session
    pub start: bool,
}

/// Semantic events emitted by the core, in the order they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A flap impulse was applied
    Flap,
    /// An obstacle was cleared; carries the new score
    Score(u32),
    /// Lethal collision this tick
    Hit,
    /// The session ended; carries the final score
    GameOver(u32),
    /// The Dying window elapsed and the session returned to Idle
    Reset,
}

/// Rejected tick call. State is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickError {
    /// dt was negative or non-finite
    InvalidDt(f32),
}

impl std::fmt::Display for TickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickError::InvalidDt(dt) => write!(f, "invalid tick delta: {dt}"),
        }
    }
}

impl std::error::Error for TickError {}

/// Advance the session by one fixed timestep.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
) -> Result<Vec<GameEvent>, TickError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(TickError::InvalidDt(dt));
    }

    let mut events = Vec::new();

    // Start is accepted from Idle and from Dying; restarting mid-death
    // cancels the pending reset timer.
    if input.start && matches!(state.phase, GamePhase::Idle | GamePhase::Dying) {
        state.start_session();
    }

    match state.phase {
        GamePhase::Idle => {}

        GamePhase::Playing => {
            state.time_ticks += 1;

            if input.flap {
                state.bird.apply_flap(state.config.flap_impulse);
                events.push(GameEvent::Flap);
            }

            state.bird.integrate(dt, state.config.gravity);
            state.obstacles.advance(dt, &state.config, &mut state.rng);

            let result =
                collision::evaluate(&state.bird, state.obstacles.obstacles(), &state.config);

            if result.hit {
                events.push(GameEvent::Hit);
                events.push(GameEvent::GameOver(state.score));
                state.phase = GamePhase::Dying;
                state.dying_timer = state.config.dying_duration;
                log::info!(
                    "game over at tick {} with score {}",
                    state.time_ticks,
                    state.score
                );
            } else {
                // Score on the falling edge: the bird was inside an obstacle
                // box last tick and is clear of every box now.
                if state.was_overlapping && !result.overlapping {
                    state.score += 1;
                    events.push(GameEvent::Score(state.score));
                }
                state.was_overlapping = result.overlapping;
            }
        }

        GamePhase::Dying => {
            // Gameplay is frozen; only the reset timer runs. Any motion the
            // player sees here is presentation-layer tweening.
            state.time_ticks += 1;
            state.dying_timer -= dt;
            if state.dying_timer <= 0.0 {
                state.dying_timer = 0.0;
                state.phase = GamePhase::Idle;
                events.push(GameEvent::Reset);
            }
        }
    }

    Ok(events)
}
