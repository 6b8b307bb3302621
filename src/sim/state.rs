//! Game state and top-level phases
//!
//! Everything the renderer and audio host need to observe lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::entities::{Item, Player};
use super::level::{Camera, Level};
use crate::consts::*;
use crate::levels;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Level intro card
    Intro,
    /// Active gameplay
    Playing,
    /// Reserved; nothing transitions here yet
    Paused,
    /// Reserved; dialog is shown as an overlay during Playing
    Dialog,
    /// Caught by an enemy, level restarts shortly
    Death,
    /// Reached the exit
    LevelComplete,
    /// All levels done
    GameOver,
}

/// Discrete cues for the audio host, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    Jump,
    Throw,
    /// Thrown item struck an enemy
    Hit,
    Pickup,
    Death,
    LevelComplete,
    /// A level (re)started; hosts switch background music on this
    LevelStart { level: u8 },
    MusicStop,
}

const DEATH_MESSAGES: &[&str] = &[
    "Not again...",
    "*Sigh*",
    "Why me?",
    "I need a vacation.",
    "Maybe tomorrow...",
    "This is fine.",
    "Deep breaths.",
    "Count to ten...",
    "Keep smiling.",
    "Almost had it.",
];

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Ticks since the current phase was entered
    pub state_timer: u32,
    /// Current level number (1-based)
    pub current_level: u8,
    pub level: Level,
    pub player: Player,
    pub camera: Camera,
    /// Items in flight
    pub thrown_items: Vec<Item>,
    /// Enemy line currently on screen
    pub current_dialog: Option<&'static str>,
    pub dialog_timer: u32,
    /// Intro or death line for the overlay
    pub message: &'static str,
    /// Player airborne state at the end of the previous playing tick
    pub(crate) was_jumping: bool,
    /// Cues raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game sitting on the menu, with level 1 loaded
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::new(1, levels::descriptor(1), &mut rng);
        Self {
            seed,
            rng,
            tuning,
            phase: GamePhase::Menu,
            state_timer: 0,
            current_level: 1,
            level,
            player: Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            camera: Camera::default(),
            thrown_items: Vec::new(),
            current_dialog: None,
            dialog_timer: 0,
            message: INTRO_MESSAGE,
            was_jumping: false,
            events: Vec::new(),
        }
    }

    /// Rebuild the world for a level from its static descriptor
    pub fn init_level(&mut self, level: u8) {
        let level = if (1..=FINAL_LEVEL).contains(&level) {
            level
        } else {
            log::warn!("Unknown level {}, loading level 1", level);
            1
        };
        let desc = levels::descriptor(level);
        self.current_level = level;
        self.level = Level::new(level, desc, &mut self.rng);
        self.player = Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.camera = Camera::default();
        self.thrown_items.clear();
        self.was_jumping = false;
        self.events.push(GameEvent::LevelStart { level });
        log::info!("Level {}: {} ({})", level, desc.name, desc.time_label);
    }

    /// Restart the current level from scratch and show its intro
    pub fn reset_level(&mut self) {
        self.init_level(self.current_level);
        self.enter_intro();
        self.current_dialog = None;
        self.dialog_timer = 0;
    }

    /// Switch phase and restart the phase timer
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
        self.state_timer = 0;
    }

    pub(crate) fn enter_intro(&mut self) {
        self.set_phase(GamePhase::Intro);
        self.message = INTRO_MESSAGE;
    }

    pub(crate) fn pick_death_message(&mut self) -> &'static str {
        DEATH_MESSAGES[self.rng.random_range(0..DEATH_MESSAGES.len())]
    }

    /// Intro card reveals the level name and time after a short delay
    pub fn shows_level_info(&self) -> bool {
        self.phase == GamePhase::Intro && self.state_timer > self.tuning.intro_info_ticks
    }

    /// Hand the queued audio cues to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
