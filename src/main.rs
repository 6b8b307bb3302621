//! Cubicle Escape entry point
//!
//! The browser build drives the game through `cubicle_escape::web`. Natively
//! this runs a scripted headless session, handy for checking determinism and
//! tuning files without a canvas.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cubicle_escape::Tuning;
    use cubicle_escape::consts::*;
    use cubicle_escape::sim::{Action, GameEvent, GamePhase, GameState, KeyMap, TickInput, tick};

    /// Five minutes of game time
    const MAX_TICKS: u32 = 5 * 60 * TICKS_PER_SECOND;
    /// Tap jump this often while walking
    const JUMP_INTERVAL: u32 = 40;

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let seed = match args.next().map(|s| s.parse::<u64>()) {
            Some(Ok(seed)) => seed,
            Some(Err(e)) => {
                log::warn!("Invalid seed ({}), using 0", e);
                0
            }
            None => 0,
        };

        let tuning_json = args.next().and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                None
            }
        });
        let tuning = Tuning::load_or_default(tuning_json.as_deref());

        let mut state = GameState::with_tuning(seed, tuning);
        log::info!("Game initialized with seed: {}", seed);

        let mut deaths = 0u32;
        let mut hits = 0u32;
        let mut last_phase = state.phase;

        for t in 0..MAX_TICKS {
            let input = script(&state, t);
            tick(&mut state, &input);

            for event in state.drain_events() {
                match event {
                    GameEvent::Death => deaths += 1,
                    GameEvent::Hit => hits += 1,
                    _ => {}
                }
            }

            if state.phase != last_phase {
                log::debug!("tick {}: {:?} on level {}", t, state.phase, state.current_level);
                last_phase = state.phase;
            }
            if state.phase == GamePhase::GameOver {
                log::info!("{} {}", ENDING_TITLE, ENDING_SUBTITLE);
                break;
            }
        }

        log::info!(
            "Session over: level {}, {} deaths, {} enemies knocked out",
            state.current_level,
            deaths,
            hits
        );

        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
    }

    /// Walk right, hop regularly, throw whatever is picked up
    fn script(state: &GameState, t: u32) -> TickInput {
        let jump = t % JUMP_INTERVAL == 0;
        TickInput {
            keyboard: KeyMap::default()
                .with(Action::Right, true)
                .with(Action::Jump, jump),
            start: state.phase == GamePhase::Menu,
            throw: state.player.held_item.is_some(),
            ..Default::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cubicle Escape (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::init, this is just to satisfy the compiler
}
