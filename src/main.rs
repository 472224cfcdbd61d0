//! Cloud Hopper entry point
//!
//! Headless demo driver: runs the simulation at a fixed 60 Hz with a trivial
//! autopilot, logs the event stream, and optionally dumps the final snapshot
//! as JSON. Doubles as a reference for wiring a real presentation layer: feed
//! elapsed time to the clock, tick once per step, consume events.
//!
//! Usage: cloud-hopper [seed] [seconds] [--json]

use cloud_hopper::consts::SIM_DT;
use cloud_hopper::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use cloud_hopper::{FrameClock, GameConfig};

/// Flap whenever the bird is falling below the nearest upcoming gap center.
/// Deliberately imperfect: deaths exercise the Dying/Reset path too.
fn autopilot(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Idle => TickInput {
            start: true,
            ..Default::default()
        },
        GamePhase::Playing => {
            let bird_center = state.bird.bottom() + state.bird.size.y / 2.0;
            let target = state
                .obstacles
                .obstacles()
                .iter()
                .filter(|o| o.x + state.config.obstacle_width > state.bird.left())
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .map(|o| o.gap_center)
                .unwrap_or(state.config.bird_start.y);

            TickInput {
                flap: state.bird.velocity_y <= 0.0 && bird_center < target,
                start: false,
            }
        }
        GamePhase::Dying => TickInput::default(),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut numbers = args.iter().filter(|a| !a.starts_with("--"));
    let seed = numbers
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    let seconds: f32 = numbers.next().and_then(|a| a.parse().ok()).unwrap_or(60.0);

    let mut state = match GameState::new(GameConfig::default(), seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("bad configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Cloud Hopper (headless) seed {seed}, running {seconds}s of game time");

    let mut clock = FrameClock::standard();
    let mut sessions = 0u32;
    let mut best_score = 0u32;
    let total_ticks = (seconds / SIM_DT) as u64;
    let mut ran = 0u64;

    let frame_dt = clock.step_dt();
    while ran < total_ticks {
        // Headless: pretend each frame took exactly one step of wall time
        let steps = clock.advance(frame_dt);
        for _ in 0..steps {
            ran += 1;
            let input = autopilot(&state);
            let events = match tick(&mut state, &input, SIM_DT) {
                Ok(events) => events,
                Err(e) => {
                    log::error!("tick rejected: {e}");
                    std::process::exit(1);
                }
            };
            for event in events {
                match event {
                    GameEvent::Score(score) => log::info!("score: {score}"),
                    GameEvent::GameOver(score) => {
                        sessions += 1;
                        best_score = best_score.max(score);
                        log::info!("game over: session {sessions} scored {score}");
                    }
                    GameEvent::Reset => log::debug!("session reset"),
                    GameEvent::Flap | GameEvent::Hit => {}
                }
            }
        }
    }

    log::info!(
        "done: {ran} ticks, {sessions} completed sessions, best score {best_score}"
    );

    if json {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(out) => println!("{out}"),
            Err(e) => log::error!("snapshot serialization failed: {e}"),
        }
    }
}
