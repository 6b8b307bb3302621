//! Per-level world container and the side-scrolling camera

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::entities::{Enemy, Exit, Item, Platform, Player};
use crate::consts::*;
use crate::levels::LevelDescriptor;
use crate::tuning::Tuning;

/// Mutable world state for one attempt at one level.
///
/// Rebuilt wholesale from its descriptor on every start, reset or advance.
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    pub number: u8,
    pub name: &'static str,
    pub time_label: &'static str,
    /// Horizontal extent, used to clamp the camera
    pub width: f32,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub exit: Exit,
}

impl Level {
    pub fn new<R: Rng>(number: u8, desc: &LevelDescriptor, rng: &mut R) -> Self {
        Self {
            number,
            name: desc.name,
            time_label: desc.time_label,
            width: desc.width,
            platforms: desc
                .platforms
                .iter()
                .map(|p| Platform::new(p.x, p.y, p.width, p.height, p.kind))
                .collect(),
            enemies: desc
                .enemies
                .iter()
                .map(|e| Enemy::new(e.x, e.y, e.kind, e.patrol_start, e.patrol_end, rng))
                .collect(),
            items: desc
                .items
                .iter()
                .map(|i| Item::new(i.x, i.y, i.kind))
                .collect(),
            exit: Exit {
                pos: Vec2::new(desc.exit.x, desc.exit.y),
            },
        }
    }

    /// Patrol enemies and run world item respawn timers
    pub fn update<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) {
        for enemy in &mut self.enemies {
            enemy.update(rng, tuning);
        }
        for item in &mut self.items {
            item.update(tuning);
        }
    }
}

/// Horizontal-only camera that snaps to the player every tick
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Camera {
    pub pos: Vec2,
}

impl Camera {
    /// Keep the player a third of the way in, never showing past either level edge
    pub fn update(&mut self, player: &Player, level_width: f32) {
        let target_x = player.pos.x - CANVAS_WIDTH / 3.0;
        self.pos.x = target_x.min(level_width - CANVAS_WIDTH).max(0.0);
    }

    /// World x of the right edge of the view
    pub fn right_edge(&self) -> f32 {
        self.pos.x + CANVAS_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_level_built_from_descriptor() {
        let mut rng = Pcg32::seed_from_u64(1);
        let desc = levels::descriptor(1);
        let level = Level::new(1, desc, &mut rng);

        assert_eq!(level.name, "The Cubicle Maze");
        assert_eq!(level.width, 2400.0);
        assert_eq!(level.platforms.len(), desc.platforms.len());
        assert_eq!(level.enemies.len(), 4);
        assert_eq!(level.items.len(), 6);
        assert!(level.enemies.iter().all(|e| e.active && !e.has_shown_dialog));
        assert!(level.items.iter().all(|i| i.active && !i.thrown));
        assert_eq!(level.exit.pos, Vec2::new(2280.0, 470.0));
    }

    #[test]
    fn test_level_update_moves_enemies() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut level = Level::new(1, levels::descriptor(1), &mut rng);
        let before: Vec<f32> = level.enemies.iter().map(|e| e.pos.x).collect();

        level.update(&mut rng, &Tuning::default());

        for (enemy, x) in level.enemies.iter().zip(before) {
            assert_eq!(enemy.pos.x, x + enemy.speed);
        }
    }

    #[test]
    fn test_camera_clamps_to_level() {
        let mut camera = Camera::default();

        camera.update(&Player::new(100.0, 400.0), 2400.0);
        assert_eq!(camera.pos.x, 0.0);

        let x = 1000.0;
        camera.update(&Player::new(x, 400.0), 2400.0);
        assert!((camera.pos.x - (x - CANVAS_WIDTH / 3.0)).abs() < 1e-3);

        camera.update(&Player::new(2390.0, 400.0), 2400.0);
        assert_eq!(camera.pos.x, 2400.0 - CANVAS_WIDTH);
        assert_eq!(camera.right_edge(), 2400.0);
    }

    #[test]
    fn test_camera_narrow_level_pins_left() {
        let mut camera = Camera::default();
        camera.update(&Player::new(700.0, 400.0), 600.0);
        assert_eq!(camera.pos.x, 0.0);
    }
}
