//! Cubicle Escape - A side-scrolling office platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `levels`: Static level catalog and per-level palettes
//! - `tuning`: Data-driven game balance
//! - `web`: Browser bridge (wasm32 only)

pub mod levels;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use levels::{LevelDescriptor, Palette};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per host frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Viewport dimensions (world units, fixed internal resolution)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 24.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;

    /// Enemy hitbox
    pub const ENEMY_WIDTH: f32 = 24.0;
    pub const ENEMY_HEIGHT: f32 = 32.0;

    /// Items are square
    pub const ITEM_SIZE: f32 = 16.0;

    /// Exit door hitbox
    pub const EXIT_WIDTH: f32 = 40.0;
    pub const EXIT_HEIGHT: f32 = 60.0;

    /// Physics defaults (units per tick, units per tick²)
    pub const GRAVITY: f32 = 0.6;
    pub const PLAYER_SPEED: f32 = 4.5;
    pub const PLAYER_JUMP_FORCE: f32 = 13.0;
    pub const THROW_SPEED: f32 = 5.0;
    pub const THROW_LIFT: f32 = 3.0;
    pub const THROWN_GRAVITY_SCALE: f32 = 0.5;

    /// Thrown items are discarded outside this horizontal band.
    /// Fixed world-size assumption, independent of level width.
    pub const THROWN_MIN_X: f32 = -100.0;
    pub const THROWN_MAX_X: f32 = 3000.0;

    /// Tick durations
    pub const ITEM_RESPAWN_TICKS: u32 = 600;
    pub const ENEMY_DIALOG_TICKS: u32 = 300;
    pub const DIALOG_DISPLAY_TICKS: u32 = 180;
    pub const INTRO_TICKS: u32 = 180;
    pub const INTRO_INFO_TICKS: u32 = 120;
    pub const DEATH_TICKS: u32 = 120;
    pub const LEVEL_COMPLETE_TICKS: u32 = 180;

    /// Width of the dialog trigger band inside the camera's right edge
    pub const DIALOG_TRIGGER_WIDTH: f32 = 100.0;

    /// Number of levels in the campaign
    pub const FINAL_LEVEL: u8 = 5;

    /// Shown on every intro card
    pub const INTRO_MESSAGE: &str = "Here we go again.";
    /// Ending screen text
    pub const ENDING_TITLE: &str = "FREEDOM!";
    pub const ENDING_SUBTITLE: &str = "See you tomorrow.";
}
