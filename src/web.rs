//! Browser bridge
//!
//! The page owns the canvas, the audio elements and the frame loop; it calls
//! `tick()` once per animation frame and reads everything back as JSON.

use wasm_bindgen::prelude::*;

use crate::levels;
use crate::sim::{Action, GameState, TickInput, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Cubicle Escape starting...");
}

fn to_js(result: serde_json::Result<String>) -> Result<String, JsValue> {
    result.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// A running game plus the input gathered since the last frame
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WebGame {
        Self::with_tuning(seed, None)
    }

    /// Seed from the wall clock
    #[wasm_bindgen(js_name = fromClock)]
    pub fn from_clock() -> WebGame {
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);
        Self::new(seed)
    }

    /// Start with balance overrides; bad JSON falls back to defaults
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(seed: u64, tuning_json: Option<String>) -> WebGame {
        let tuning = Tuning::load_or_default(tuning_json.as_deref());
        WebGame {
            state: GameState::with_tuning(seed, tuning),
            input: TickInput::default(),
        }
    }

    /// Forward a key or on-screen button. `name` is a `KeyboardEvent.key`
    /// value; `touch` selects the touch-control source.
    #[wasm_bindgen(js_name = setKey)]
    pub fn set_key(&mut self, name: &str, down: bool, touch: bool) {
        if let Some(action) = Action::from_key(name) {
            let source = if touch {
                &mut self.input.touch
            } else {
                &mut self.input.keyboard
            };
            source.set(action, down);
            return;
        }

        if !down {
            return;
        }
        match name {
            "x" | "X" => self.input.throw = true,
            "Escape" => self.input.menu = true,
            "Enter" => self.input.start = true,
            _ => {}
        }
    }

    #[wasm_bindgen(js_name = pressStart)]
    pub fn press_start(&mut self) {
        self.input.start = true;
    }

    #[wasm_bindgen(js_name = pressThrow)]
    pub fn press_throw(&mut self) {
        self.input.throw = true;
    }

    #[wasm_bindgen(js_name = pressEscape)]
    pub fn press_escape(&mut self) {
        self.input.menu = true;
    }

    /// Advance one frame; one-shot presses are consumed
    pub fn tick(&mut self) {
        tick(&mut self.state, &self.input);
        self.input.start = false;
        self.input.throw = false;
        self.input.menu = false;
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        to_js(serde_json::to_string(&self.state))
    }

    /// Audio cues since the previous call
    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        to_js(serde_json::to_string(&self.state.drain_events()))
    }

    /// Colour scheme for the current level
    #[wasm_bindgen(js_name = paletteJson)]
    pub fn palette_json(&self) -> Result<String, JsValue> {
        to_js(serde_json::to_string(&levels::palette(
            self.state.current_level,
        )))
    }

    #[wasm_bindgen(js_name = showsLevelInfo)]
    pub fn shows_level_info(&self) -> bool {
        self.state.shows_level_info()
    }
}
