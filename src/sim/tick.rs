//! Fixed timestep simulation tick
//!
//! Core game loop that advances the state machine one frame at a time.
//! Durations are tick counts, so wall-clock speed follows the host frame rate.

use super::collision::overlaps;
use super::entities::Item;
use super::input::KeyMap;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held keys reported by the keyboard
    pub keyboard: KeyMap,
    /// Held keys reported by on-screen touch buttons
    pub touch: KeyMap,
    /// Start button on the menu (one-shot)
    pub start: bool,
    /// Throw the held item (one-shot)
    pub throw: bool,
    /// Escape back to the menu (one-shot)
    pub menu: bool,
}

impl GameState {
    /// Leave the menu and begin level 1. Returns false outside the menu.
    pub fn start_game(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.init_level(1);
        self.enter_intro();
        self.current_dialog = None;
        self.dialog_timer = 0;
        true
    }

    /// Throw the held item from the player's leading edge.
    /// Only works while playing with something in hand.
    pub fn throw_item(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(kind) = self.player.held_item.take() else {
            return false;
        };

        let item = Item::thrown(
            self.player.hand_position(),
            kind,
            self.player.facing(),
            &self.tuning,
        );
        log::debug!("Threw {:?} from {:?}", kind, item.pos);
        self.thrown_items.push(item);
        self.events.push(GameEvent::Throw);
        true
    }

    /// Abandon the current run and go back to the title screen
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase == GamePhase::Menu {
            return false;
        }
        self.set_phase(GamePhase::Menu);
        self.events.push(GameEvent::MusicStop);
        true
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // One-shot inputs arrive between frames, before the timer advances
    if input.menu {
        state.return_to_menu();
    }
    if input.start {
        state.start_game();
    }
    if input.throw {
        state.throw_item();
    }

    state.state_timer += 1;

    match state.phase {
        GamePhase::Menu | GamePhase::Paused | GamePhase::Dialog | GamePhase::GameOver => {}

        GamePhase::Intro => {
            if state.state_timer > state.tuning.intro_ticks {
                state.set_phase(GamePhase::Playing);
            }
        }

        GamePhase::Playing => update_playing(state, input),

        GamePhase::Death => {
            if state.state_timer > state.tuning.death_ticks {
                state.reset_level();
            }
        }

        GamePhase::LevelComplete => {
            if state.state_timer > state.tuning.level_complete_ticks {
                if state.current_level < FINAL_LEVEL {
                    state.init_level(state.current_level + 1);
                    state.enter_intro();
                } else {
                    log::info!("All levels cleared: {}", ENDING_TITLE);
                    state.set_phase(GamePhase::GameOver);
                }
            }
        }
    }
}

fn update_playing(state: &mut GameState, input: &TickInput) {
    let keys = KeyMap::merge(&input.keyboard, &input.touch);

    // Player first, then the world reacts to where the player ended up
    state
        .player
        .update(&keys, &state.level.platforms, &state.tuning);
    if state.player.is_jumping && !state.was_jumping {
        state.events.push(GameEvent::Jump);
    }
    state.was_jumping = state.player.is_jumping;

    state.level.update(&mut state.rng, &state.tuning);
    state.camera.update(&state.player, state.level.width);

    update_thrown_items(state);
    check_pickups(state);
    trigger_dialog(state);

    if state.level.enemies.iter().any(|e| e.hits(&state.player)) {
        state.set_phase(GamePhase::Death);
        state.message = state.pick_death_message();
        state.events.push(GameEvent::Death);
        log::debug!("Caught: {}", state.message);
    }

    if state.dialog_timer > 0 {
        state.dialog_timer -= 1;
        if state.dialog_timer == 0 {
            state.current_dialog = None;
        }
    }

    // Checked even after a death this tick; reaching the door wins
    if overlaps(&state.level.exit, &state.player) {
        state.set_phase(GamePhase::LevelComplete);
        state.events.push(GameEvent::LevelComplete);
    }
}

/// Fly thrown items; each one takes out at most one enemy
fn update_thrown_items(state: &mut GameState) {
    let GameState {
        thrown_items,
        level,
        tuning,
        events,
        ..
    } = state;

    thrown_items.retain_mut(|item| {
        if !item.update(tuning) {
            return false;
        }
        if let Some(enemy) = level.enemies.iter_mut().find(|e| e.hits(&*item)) {
            enemy.active = false;
            events.push(GameEvent::Hit);
            log::debug!("{:?} knocked out by {:?}", enemy.kind, item.kind);
            return false;
        }
        true
    });
}

fn check_pickups(state: &mut GameState) {
    for item in &mut state.level.items {
        if item.active
            && !item.thrown
            && overlaps(&state.player, &*item)
            && state.player.pickup_item(item)
        {
            item.take();
            state.events.push(GameEvent::Pickup);
            log::debug!("Picked up {:?}", item.kind);
        }
    }
}

/// Enemies scrolling in from the right speak once per level
fn trigger_dialog(state: &mut GameState) {
    let right_edge = state.camera.right_edge();
    let trigger_zone = right_edge - state.tuning.dialog_trigger_width;

    for enemy in &mut state.level.enemies {
        if enemy.active
            && !enemy.has_shown_dialog
            && enemy.pos.x < right_edge
            && enemy.pos.x > trigger_zone
        {
            state.current_dialog = Some(enemy.dialog);
            state.dialog_timer = state.tuning.dialog_display_ticks;
            enemy.has_shown_dialog = true;
            log::debug!("{:?} says: {}", enemy.kind, enemy.dialog);
        }
    }
}
