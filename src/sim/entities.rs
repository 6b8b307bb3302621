//! Player, enemies, items and static level geometry
//!
//! Each entity owns its per-tick update rule. Positions are top-left corners
//! in world units with y growing downward; velocities are units per tick.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::collision::{Bounds, Rect, intersects};
use super::input::KeyState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Platform surface kinds (affects drawing only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformKind {
    Desk,
    Cabinet,
    Floor,
}

/// Static collision geometry
#[derive(Debug, Clone, Serialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            kind,
        }
    }
}

impl Bounds for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// The level's exit door
#[derive(Debug, Clone, Serialize)]
pub struct Exit {
    pub pos: Vec2,
}

impl Bounds for Exit {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, EXIT_WIDTH, EXIT_HEIGHT)
    }
}

/// Throwable office supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    Coffee,
    Folder,
    Plant,
}

/// The player character
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub is_jumping: bool,
    pub is_ducking: bool,
    pub facing_right: bool,
    pub held_item: Option<ItemKind>,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            is_jumping: false,
            is_ducking: false,
            facing_right: true,
            held_item: None,
        }
    }

    /// +1 when facing right, -1 when facing left
    pub fn facing(&self) -> f32 {
        if self.facing_right { 1.0 } else { -1.0 }
    }

    /// Where a thrown item leaves the player: leading edge, half height
    pub fn hand_position(&self) -> Vec2 {
        let x = if self.facing_right {
            self.pos.x + PLAYER_WIDTH
        } else {
            self.pos.x
        };
        Vec2::new(x, self.pos.y + PLAYER_HEIGHT / 2.0)
    }

    /// Advance one tick: input, gravity, integration, then platform resolution
    pub fn update(&mut self, keys: &KeyState, platforms: &[Platform], tuning: &Tuning) {
        // No momentum; ducking (from last tick) pins the player in place
        self.vel.x = 0.0;
        if !self.is_ducking {
            if keys.left {
                self.vel.x = -tuning.player_speed;
                self.facing_right = false;
            }
            if keys.right {
                self.vel.x = tuning.player_speed;
                self.facing_right = true;
            }
        }

        self.is_ducking = keys.down && !self.is_jumping;

        if (keys.up || keys.jump) && !self.is_jumping {
            self.vel.y = -tuning.jump_force;
            self.is_jumping = true;
        }

        self.vel.y += tuning.gravity;
        self.pos += self.vel;

        // Airborne until a landing below proves otherwise
        self.is_jumping = true;
        for platform in platforms {
            self.resolve_platform(&platform.rect);
        }

        // Implicit floor at the bottom of the viewport
        if self.pos.y > CANVAS_HEIGHT {
            self.pos.y = CANVAS_HEIGHT - PLAYER_HEIGHT;
            self.vel.y = 0.0;
            self.is_jumping = false;
        }
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
    }

    /// Push the player out of one platform. Overlaps are resolved one platform
    /// at a time in list order, so being wedged between two platforms can
    /// resolve differently depending on their order.
    fn resolve_platform(&mut self, platform: &Rect) {
        if !intersects(&self.bounds(), platform) {
            return;
        }

        let bottom = self.pos.y + PLAYER_HEIGHT;
        if self.vel.y > 0.0 && bottom - self.vel.y <= platform.top() {
            // Landed on top
            self.pos.y = platform.top() - PLAYER_HEIGHT;
            self.vel.y = 0.0;
            self.is_jumping = false;
        } else if self.vel.y < 0.0 && self.pos.y - self.vel.y >= platform.bottom() {
            // Head bump from below
            self.pos.y = platform.bottom();
            self.vel.y = 0.0;
        } else if self.vel.x > 0.0 {
            self.pos.x = platform.left() - PLAYER_WIDTH;
        } else if self.vel.x < 0.0 {
            self.pos.x = platform.right();
        }
    }

    /// Take an item if both hands are free
    pub fn pickup_item(&mut self, item: &Item) -> bool {
        if self.held_item.is_some() {
            return false;
        }
        self.held_item = Some(item.kind);
        true
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Boss,
    Colleague,
    Customer,
}

const BOSS_LINES: &[&str] = &[
    "We need to talk!",
    "Got a minute?",
    "Performance review time!",
    "Stay late today?",
    "About your TPS reports...",
    "Circle back on this?",
    "Let's touch base.",
    "Before you go...",
    "One more thing...",
    "This will be quick...",
    "Just to clarify...",
    "Team building Saturday!",
    "Synergy meeting at 4!",
    "KPIs are down.",
    "Quarterly goals?",
    "Strategic alignment needed.",
    "Stakeholder concerns...",
    "Revenue projections?",
    "Bandwidth issue here.",
    "Paradigm shift required!",
    "Core competencies lacking.",
    "Value proposition unclear.",
    "Low hanging fruit first.",
    "Think outside the box!",
    "Moving forward...",
    "Action items needed.",
    "Deliverables by Friday?",
    "ROI not looking good.",
    "Best practices review.",
    "Optimization required!",
    "Scalability concerns...",
];

const COLLEAGUE_LINES: &[&str] = &[
    "Quick check-in?",
    "Coffee break?",
    "Did you get my email?",
    "Got a sec?",
    "This will only take a minute...",
    "Sorry to bother you, but...",
    "Can you help me with...?",
    "Real quick question...",
    "Just wondering if...",
    "Do you know where...?",
    "Printer's jammed again...",
    "WiFi down for you too?",
    "Lunch plans?",
    "Meeting notes?",
    "Can you cover for me?",
    "Password reset help?",
    "Excel formula question...",
    "How do I...?",
    "Did you see the memo?",
    "Conference call at 2?",
    "Shared drive access?",
    "VPN not working...",
    "Client called...",
    "Budget spreadsheet?",
    "Time sheet reminder!",
    "Office supplies order?",
    "IT ticket number?",
    "Holiday schedule?",
    "Parking spot issue...",
    "Temperature okay?",
];

const CUSTOMER_LINES: &[&str] = &[
    "This is URGENT!",
    "I need this NOW!",
    "Can I speak to your manager?",
    "This is unacceptable!",
    "I want a refund!",
    "I've been waiting FOREVER!",
    "Let me speak to someone competent!",
    "Just one question...",
    "Why is this taking so long?",
    "I was promised...",
    "This is ridiculous!",
    "Your website said...",
    "I'm a loyal customer!",
    "I'll take my business elsewhere!",
    "Social media complaint incoming!",
    "Corporate will hear about this!",
    "I demand compensation!",
    "This is false advertising!",
    "The other company does it!",
    "I know my rights!",
    "Transfer me immediately!",
    "Supervisor. NOW.",
    "Twenty minutes on hold!",
    "Nobody told me that!",
    "This is discrimination!",
    "I'm calling my lawyer!",
    "One star review!",
    "Cancel my account!",
    "Never shopping here again!",
    "Worst service ever!",
];

impl EnemyKind {
    /// Patrol speed in units per tick
    pub fn speed(&self) -> f32 {
        match self {
            EnemyKind::Boss => 0.5,
            EnemyKind::Colleague => 1.5,
            EnemyKind::Customer => 2.5,
        }
    }

    /// Lines this kind of enemy says
    pub fn dialog_pool(&self) -> &'static [&'static str] {
        match self {
            EnemyKind::Boss => BOSS_LINES,
            EnemyKind::Colleague => COLLEAGUE_LINES,
            EnemyKind::Customer => CUSTOMER_LINES,
        }
    }

    pub fn random_line<R: Rng>(&self, rng: &mut R) -> &'static str {
        let pool = self.dialog_pool();
        pool[rng.random_range(0..pool.len())]
    }
}

/// A patrolling coworker
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub patrol_start: f32,
    pub patrol_end: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub speed: f32,
    pub dialog: &'static str,
    pub dialog_timer: u32,
    /// False once hit by a thrown item; never comes back within the level
    pub active: bool,
    pub has_shown_dialog: bool,
}

impl Enemy {
    pub fn new<R: Rng>(
        x: f32,
        y: f32,
        kind: EnemyKind,
        patrol_start: f32,
        patrol_end: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            patrol_start,
            patrol_end,
            direction: 1.0,
            speed: kind.speed(),
            dialog: kind.random_line(rng),
            dialog_timer: 0,
            active: true,
            has_shown_dialog: false,
        }
    }

    /// Patrol one step and rotate the dialog line
    pub fn update<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) {
        if !self.active {
            return;
        }

        self.pos.x += self.speed * self.direction;
        if self.pos.x <= self.patrol_start {
            self.direction = 1.0;
            self.pos.x = self.patrol_start;
        } else if self.pos.x >= self.patrol_end {
            self.direction = -1.0;
            self.pos.x = self.patrol_end;
        }

        self.dialog_timer += 1;
        if self.dialog_timer > tuning.enemy_dialog_ticks {
            self.dialog = self.kind.random_line(rng);
            self.dialog_timer = 0;
        }
    }

    /// Collision test that ignores defeated enemies
    pub fn hits(&self, other: &impl Bounds) -> bool {
        self.active && intersects(&self.bounds(), &other.bounds())
    }
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

/// A world item resting in the level, or one in flight after a throw.
///
/// `active` and `thrown` are never both true: world items are active while
/// available, thrown items are inactive for their whole flight.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub pos: Vec2,
    pub kind: ItemKind,
    pub active: bool,
    pub thrown: bool,
    pub vel: Vec2,
    pub respawn_timer: u32,
}

impl Item {
    /// An available item placed in the level
    pub fn new(x: f32, y: f32, kind: ItemKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            active: true,
            thrown: false,
            vel: Vec2::ZERO,
            respawn_timer: 0,
        }
    }

    /// A fresh item launched from `pos` in `direction` (±1)
    pub fn thrown(pos: Vec2, kind: ItemKind, direction: f32, tuning: &Tuning) -> Self {
        Self {
            pos,
            kind,
            active: false,
            thrown: true,
            vel: Vec2::new(direction * tuning.throw_speed, -tuning.throw_lift),
            respawn_timer: 0,
        }
    }

    /// Mark a world item as taken; it starts counting down to respawn
    pub fn take(&mut self) {
        self.active = false;
        self.respawn_timer = 0;
    }

    /// Advance one tick. Returns false once a thrown item has left play and
    /// should be discarded; world items always stay.
    pub fn update(&mut self, tuning: &Tuning) -> bool {
        if self.thrown {
            self.vel.y += tuning.thrown_gravity();
            self.pos += self.vel;
            return self.in_flight_bounds(tuning);
        }

        if !self.active {
            self.respawn_timer += 1;
            if self.respawn_timer > tuning.item_respawn_ticks {
                self.active = true;
                self.respawn_timer = 0;
            }
        }
        true
    }

    fn in_flight_bounds(&self, tuning: &Tuning) -> bool {
        self.pos.y <= CANVAS_HEIGHT
            && self.pos.x >= tuning.thrown_min_x
            && self.pos.x <= tuning.thrown_max_x
    }
}

impl Bounds for Item {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ITEM_SIZE, ITEM_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn floor() -> Vec<Platform> {
        vec![Platform::new(0.0, 550.0, 2400.0, 50.0, PlatformKind::Floor)]
    }

    #[test]
    fn test_player_lands_on_platform() {
        let tuning = Tuning::default();
        let platforms = vec![Platform::new(50.0, 440.0, 200.0, 20.0, PlatformKind::Desk)];
        let mut player = Player::new(100.0, 405.0);
        player.vel.y = 5.0;
        player.is_jumping = true;

        player.update(&KeyState::default(), &platforms, &tuning);

        assert_eq!(player.pos.y, 408.0);
        assert_eq!(player.pos.y + PLAYER_HEIGHT, platforms[0].rect.top());
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_player_resting_stays_grounded() {
        let tuning = Tuning::default();
        let mut player = Player::new(100.0, 550.0 - PLAYER_HEIGHT);
        for _ in 0..10 {
            player.update(&KeyState::default(), &floor(), &tuning);
            assert!(!player.is_jumping);
            assert_eq!(player.pos.y, 550.0 - PLAYER_HEIGHT);
        }
    }

    #[test]
    fn test_player_bumps_head() {
        let tuning = Tuning::default();
        let ceiling = vec![Platform::new(50.0, 380.0, 200.0, 20.0, PlatformKind::Desk)];
        let mut player = Player::new(100.0, 402.0);
        player.vel.y = -5.0;
        player.is_jumping = true;

        player.update(&KeyState::default(), &ceiling, &tuning);

        assert_eq!(player.pos.y, 400.0);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_player_blocked_by_wall() {
        let tuning = Tuning::default();
        let wall = Platform::new(130.0, 300.0, 60.0, 300.0, PlatformKind::Cabinet);
        let mut platforms = floor();
        platforms.push(wall);
        let mut player = Player::new(104.0, 550.0 - PLAYER_HEIGHT);
        let right = KeyState {
            right: true,
            ..Default::default()
        };

        player.update(&right, &platforms, &tuning);
        assert_eq!(player.pos.x, 130.0 - PLAYER_WIDTH);

        let mut player = Player::new(192.0, 550.0 - PLAYER_HEIGHT);
        let left = KeyState {
            left: true,
            ..Default::default()
        };
        player.update(&left, &platforms, &tuning);
        assert_eq!(player.pos.x, 190.0);
        assert!(!player.facing_right);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let tuning = Tuning::default();
        let mut player = Player::new(100.0, 550.0 - PLAYER_HEIGHT);
        let jump = KeyState {
            jump: true,
            ..Default::default()
        };

        player.update(&jump, &floor(), &tuning);
        assert!(player.is_jumping);
        assert!((player.vel.y - (-13.0 + 0.6)).abs() < 1e-5);

        // Holding jump mid-air does not re-launch
        let vy = player.vel.y;
        player.update(&jump, &floor(), &tuning);
        assert!((player.vel.y - (vy + 0.6)).abs() < 1e-5);
    }

    #[test]
    fn test_ducking_suppresses_walking() {
        let tuning = Tuning::default();
        let mut player = Player::new(100.0, 550.0 - PLAYER_HEIGHT);
        let duck_right = KeyState {
            down: true,
            right: true,
            ..Default::default()
        };

        // First tick still walks (ducking latches at the end of input handling)
        player.update(&duck_right, &floor(), &tuning);
        assert!(player.is_ducking);
        let x = player.pos.x;

        player.update(&duck_right, &floor(), &tuning);
        assert_eq!(player.pos.x, x);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_implicit_floor_and_left_clamp() {
        let tuning = Tuning::default();
        let mut player = Player::new(2.0, 595.0);
        player.vel.y = 10.0;
        let left = KeyState {
            left: true,
            ..Default::default()
        };

        player.update(&left, &[], &tuning);

        assert_eq!(player.pos.y, CANVAS_HEIGHT - PLAYER_HEIGHT);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.is_jumping);
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_pickup_only_with_free_hands() {
        let mut player = Player::new(0.0, 0.0);
        let coffee = Item::new(0.0, 0.0, ItemKind::Coffee);
        let plant = Item::new(0.0, 0.0, ItemKind::Plant);

        assert!(player.pickup_item(&coffee));
        assert_eq!(player.held_item, Some(ItemKind::Coffee));
        assert!(!player.pickup_item(&plant));
        assert_eq!(player.held_item, Some(ItemKind::Coffee));
    }

    #[test]
    fn test_colleague_patrol_flips_at_end() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let mut enemy = Enemy::new(350.0, 518.0, EnemyKind::Colleague, 250.0, 420.0, &mut rng);

        for _ in 0..46 {
            enemy.update(&mut rng, &tuning);
            assert_eq!(enemy.direction, 1.0);
        }
        assert_eq!(enemy.pos.x, 419.0);

        enemy.update(&mut rng, &tuning);
        assert_eq!(enemy.pos.x, 420.0);
        assert_eq!(enemy.direction, -1.0);
    }

    #[test]
    fn test_enemy_speed_table() {
        assert_eq!(EnemyKind::Boss.speed(), 0.5);
        assert_eq!(EnemyKind::Colleague.speed(), 1.5);
        assert_eq!(EnemyKind::Customer.speed(), 2.5);
    }

    #[test]
    fn test_enemy_dialog_rerolls_from_pool() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let mut enemy = Enemy::new(100.0, 0.0, EnemyKind::Customer, 0.0, 500.0, &mut rng);
        assert!(CUSTOMER_LINES.contains(&enemy.dialog));

        for _ in 0..tuning.enemy_dialog_ticks {
            enemy.update(&mut rng, &tuning);
        }
        assert_eq!(enemy.dialog_timer, tuning.enemy_dialog_ticks);

        enemy.update(&mut rng, &tuning);
        assert_eq!(enemy.dialog_timer, 0);
        assert!(CUSTOMER_LINES.contains(&enemy.dialog));
    }

    #[test]
    fn test_defeated_enemy_is_inert() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let mut enemy = Enemy::new(100.0, 100.0, EnemyKind::Boss, 0.0, 500.0, &mut rng);
        enemy.active = false;
        enemy.update(&mut rng, &tuning);
        assert_eq!(enemy.pos.x, 100.0);

        let player = Player::new(100.0, 100.0);
        assert!(!enemy.hits(&player));
    }

    #[test]
    fn test_world_item_respawns() {
        let tuning = Tuning::default();
        let mut item = Item::new(200.0, 470.0, ItemKind::Coffee);
        item.take();

        for _ in 0..tuning.item_respawn_ticks {
            assert!(item.update(&tuning));
            assert!(!item.active);
        }
        item.update(&tuning);
        assert!(item.active);
        assert_eq!(item.pos, Vec2::new(200.0, 470.0));
    }

    #[test]
    fn test_thrown_item_leaves_bottom() {
        let tuning = Tuning::default();
        let mut item = Item::thrown(Vec2::new(124.0, 416.0), ItemKind::Folder, 1.0, &tuning);
        assert_eq!(item.vel, Vec2::new(5.0, -3.0));
        assert!(!item.active);

        let mut ticks = 0;
        while item.update(&tuning) {
            ticks += 1;
            assert!(item.pos.y <= CANVAS_HEIGHT);
            assert!(ticks < 1000);
        }
        assert!(item.pos.y > CANVAS_HEIGHT);
    }

    #[test]
    fn test_thrown_item_leaves_sides() {
        let tuning = Tuning::default();
        let mut item = Item::thrown(Vec2::new(-98.0, 100.0), ItemKind::Plant, -1.0, &tuning);
        assert!(!item.update(&tuning));

        let mut item = Item::thrown(Vec2::new(2998.0, 100.0), ItemKind::Plant, 1.0, &tuning);
        assert!(!item.update(&tuning));
    }

    proptest! {
        #[test]
        fn prop_patrol_stays_in_bounds(
            start in 0f32..2000.0,
            span in 10f32..500.0,
            offset in 0f32..1.0,
            kind in prop_oneof![
                Just(EnemyKind::Boss),
                Just(EnemyKind::Colleague),
                Just(EnemyKind::Customer),
            ],
            ticks in 1usize..1500,
        ) {
            let tuning = Tuning::default();
            let mut rng = rng();
            let end = start + span;
            let x = start + span * offset;
            let mut enemy = Enemy::new(x, 0.0, kind, start, end, &mut rng);

            for _ in 0..ticks {
                let before = enemy.direction;
                enemy.update(&mut rng, &tuning);
                prop_assert!(enemy.pos.x >= start && enemy.pos.x <= end);
                if enemy.direction != before {
                    prop_assert!(enemy.pos.x == start || enemy.pos.x == end);
                }
            }
        }
    }
}
