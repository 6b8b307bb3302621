//! Data-driven game balance
//!
//! Every physics constant and tick duration the simulation reads lives here.
//! Defaults reproduce the shipped game; hosts may override any subset from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values (units per tick, durations in ticks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied to the player every tick
    pub gravity: f32,
    /// Horizontal walking speed
    pub player_speed: f32,
    /// Initial upward velocity of a jump
    pub jump_force: f32,
    /// Horizontal speed of a thrown item
    pub throw_speed: f32,
    /// Initial upward velocity of a thrown item
    pub throw_lift: f32,
    /// Thrown items fall with `gravity * thrown_gravity_scale`
    pub thrown_gravity_scale: f32,
    pub thrown_min_x: f32,
    pub thrown_max_x: f32,
    /// A picked-up world item comes back once its counter exceeds this
    pub item_respawn_ticks: u32,
    /// Enemies pick a new dialog line once their counter exceeds this
    pub enemy_dialog_ticks: u32,
    /// How long a triggered dialog stays on screen
    pub dialog_display_ticks: u32,
    /// Band inside the camera's right edge that triggers enemy dialog
    pub dialog_trigger_width: f32,
    pub intro_ticks: u32,
    /// Intro card reveals the level name/time after this many ticks
    pub intro_info_ticks: u32,
    pub death_ticks: u32,
    pub level_complete_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            throw_speed: THROW_SPEED,
            throw_lift: THROW_LIFT,
            thrown_gravity_scale: THROWN_GRAVITY_SCALE,
            thrown_min_x: THROWN_MIN_X,
            thrown_max_x: THROWN_MAX_X,
            item_respawn_ticks: ITEM_RESPAWN_TICKS,
            enemy_dialog_ticks: ENEMY_DIALOG_TICKS,
            dialog_display_ticks: DIALOG_DISPLAY_TICKS,
            dialog_trigger_width: DIALOG_TRIGGER_WIDTH,
            intro_ticks: INTRO_TICKS,
            intro_info_ticks: INTRO_INFO_TICKS,
            death_ticks: DEATH_TICKS,
            level_complete_ticks: LEVEL_COMPLETE_TICKS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse overrides if given, falling back to defaults on bad input
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning JSON ({}), using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Gravity applied to items in flight
    #[inline]
    pub fn thrown_gravity(&self) -> f32 {
        self.gravity * self.thrown_gravity_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.6);
        assert_eq!(t.jump_force, 13.0);
        assert_eq!(t.item_respawn_ticks, 600);
        assert!((t.thrown_gravity() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 1.0, "intro_ticks": 10 }"#).unwrap();
        assert_eq!(t.gravity, 1.0);
        assert_eq!(t.intro_ticks, 10);
        assert_eq!(t.player_speed, PLAYER_SPEED);
        assert_eq!(t.death_ticks, DEATH_TICKS);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Tuning::from_json("{ nope").is_err());
        assert_eq!(Tuning::load_or_default(Some("{ nope")), Tuning::default());
        assert_eq!(Tuning::load_or_default(None), Tuning::default());
    }

    #[test]
    fn test_round_trip_through_json() {
        let t = Tuning {
            throw_speed: 7.5,
            ..Default::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }
}
