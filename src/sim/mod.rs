//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Seeded RNG only
//! - Stable iteration order (platforms, enemies and items in level order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entities;
pub mod input;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Bounds, Rect, intersects, overlaps};
pub use entities::{
    Enemy, EnemyKind, Exit, Item, ItemKind, Platform, PlatformKind, Player,
};
pub use input::{Action, KeyMap, KeyState};
pub use level::{Camera, Level};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
