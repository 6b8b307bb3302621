//! Static level catalog
//!
//! Five hand-authored office levels. The simulation reads the geometry and
//! spawns; the palette is render-side configuration carried alongside.

use serde::Serialize;

use crate::sim::entities::{EnemyKind, ItemKind, PlatformKind};

/// Platform placement
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
}

/// Enemy spawn with its patrol range
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub patrol_start: f32,
    pub patrol_end: f32,
}

/// World item placement
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ItemSpawn {
    pub x: f32,
    pub y: f32,
    pub kind: ItemKind,
}

/// Exit door position
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExitSpec {
    pub x: f32,
    pub y: f32,
}

/// Per-level colour scheme (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub darkest: u32,
    pub dark: u32,
    pub medium: u32,
    pub light: u32,
    pub beige: u32,
    pub lightest: u32,
    pub floor_dark: u32,
    pub floor_light: u32,
    pub accent: u32,
}

/// Everything needed to build a level
#[derive(Debug, Serialize)]
pub struct LevelDescriptor {
    pub name: &'static str,
    /// In-game clock shown on the intro card
    pub time_label: &'static str,
    pub width: f32,
    pub platforms: &'static [PlatformSpec],
    pub enemies: &'static [EnemySpawn],
    pub items: &'static [ItemSpawn],
    pub exit: ExitSpec,
    pub palette: Palette,
}

/// Descriptor for a level number; unknown numbers fall back to level 1
pub fn descriptor(level: u8) -> &'static LevelDescriptor {
    match level {
        1 => &LEVEL_1,
        2 => &LEVEL_2,
        3 => &LEVEL_3,
        4 => &LEVEL_4,
        5 => &LEVEL_5,
        _ => {
            log::warn!("Unknown level {}, falling back to level 1", level);
            &LEVEL_1
        }
    }
}

/// Palette the renderer should use for a level
pub fn palette(level: u8) -> Palette {
    descriptor(level).palette
}

const fn floor(x: f32, y: f32, width: f32, height: f32) -> PlatformSpec {
    PlatformSpec { x, y, width, height, kind: PlatformKind::Floor }
}

const fn desk(x: f32, y: f32, width: f32, height: f32) -> PlatformSpec {
    PlatformSpec { x, y, width, height, kind: PlatformKind::Desk }
}

const fn cabinet(x: f32, y: f32, width: f32, height: f32) -> PlatformSpec {
    PlatformSpec { x, y, width, height, kind: PlatformKind::Cabinet }
}

const fn enemy(x: f32, y: f32, kind: EnemyKind, patrol_start: f32, patrol_end: f32) -> EnemySpawn {
    EnemySpawn { x, y, kind, patrol_start, patrol_end }
}

const fn item(x: f32, y: f32, kind: ItemKind) -> ItemSpawn {
    ItemSpawn { x, y, kind }
}

use EnemyKind::{Boss, Colleague, Customer};
use ItemKind::{Coffee, Folder, Plant};

// Grey corporate tones
static LEVEL_1: LevelDescriptor = LevelDescriptor {
    name: "The Cubicle Maze",
    time_label: "8:47 AM",
    width: 2400.0,
    platforms: &[
        floor(0.0, 550.0, 2400.0, 50.0),
        desk(50.0, 480.0, 100.0, 20.0),
        // Jump over the first colleague
        desk(250.0, 500.0, 80.0, 20.0),
        // Cabinet wall
        cabinet(450.0, 490.0, 60.0, 60.0),
        cabinet(450.0, 430.0, 60.0, 60.0),
        cabinet(450.0, 370.0, 60.0, 60.0),
        desk(550.0, 450.0, 80.0, 20.0),
        desk(700.0, 480.0, 100.0, 20.0),
        desk(850.0, 450.0, 80.0, 20.0),
        desk(1050.0, 480.0, 80.0, 20.0),
        desk(1300.0, 500.0, 100.0, 20.0),
        // Boss area
        desk(1500.0, 470.0, 80.0, 20.0),
        desk(1650.0, 440.0, 80.0, 20.0),
        desk(1800.0, 480.0, 100.0, 20.0),
        desk(2050.0, 500.0, 150.0, 20.0),
    ],
    enemies: &[
        enemy(350.0, 518.0, Colleague, 280.0, 420.0),
        enemy(750.0, 448.0, Colleague, 700.0, 850.0),
        enemy(1180.0, 518.0, Colleague, 1100.0, 1280.0),
        enemy(1950.0, 518.0, Boss, 1850.0, 2200.0),
    ],
    items: &[
        item(200.0, 470.0, Coffee),
        item(560.0, 420.0, Coffee),
        item(900.0, 420.0, Folder),
        item(1060.0, 450.0, Coffee),
        item(1510.0, 440.0, Folder),
        item(1810.0, 450.0, Coffee),
    ],
    exit: ExitSpec { x: 2280.0, y: 470.0 },
    palette: Palette {
        darkest: 0x1a1a1a,
        dark: 0x3d3d3d,
        medium: 0x5a5a5a,
        light: 0x8b8b8b,
        beige: 0xb0b0b0,
        lightest: 0xe8e8e8,
        floor_dark: 0x2a2a2a,
        floor_light: 0xd0d0d0,
        accent: 0x9a9a9a,
    },
};

// Blue/cyan office lights
static LEVEL_2: LevelDescriptor = LevelDescriptor {
    name: "The Corridor of Meetings",
    time_label: "10:23 AM",
    width: 3000.0,
    platforms: &[
        floor(0.0, 550.0, 3000.0, 50.0),
        desk(50.0, 480.0, 100.0, 20.0),
        // Stair steps
        desk(250.0, 500.0, 80.0, 20.0),
        desk(380.0, 460.0, 80.0, 20.0),
        desk(510.0, 420.0, 80.0, 20.0),
        desk(700.0, 490.0, 100.0, 20.0),
        desk(850.0, 500.0, 80.0, 20.0),
        // Cabinet wall
        cabinet(1050.0, 490.0, 60.0, 60.0),
        cabinet(1050.0, 430.0, 60.0, 60.0),
        cabinet(1050.0, 370.0, 60.0, 60.0),
        desk(1150.0, 450.0, 90.0, 20.0),
        desk(1300.0, 490.0, 80.0, 20.0),
        desk(1450.0, 460.0, 80.0, 20.0),
        desk(1600.0, 490.0, 80.0, 20.0),
        desk(1800.0, 500.0, 100.0, 20.0),
        desk(1950.0, 470.0, 80.0, 20.0),
        desk(2100.0, 500.0, 100.0, 20.0),
        desk(2300.0, 480.0, 120.0, 20.0),
        desk(2500.0, 500.0, 150.0, 20.0),
    ],
    enemies: &[
        enemy(350.0, 518.0, Colleague, 250.0, 480.0),
        enemy(780.0, 518.0, Boss, 700.0, 950.0),
        enemy(1160.0, 418.0, Colleague, 1150.0, 1240.0),
        enemy(1400.0, 518.0, Colleague, 1300.0, 1650.0),
        enemy(1810.0, 468.0, Colleague, 1800.0, 1900.0),
        enemy(2020.0, 518.0, Boss, 1950.0, 2150.0),
        enemy(2400.0, 448.0, Customer, 2300.0, 2650.0),
    ],
    items: &[
        item(260.0, 470.0, Coffee),
        item(520.0, 390.0, Plant),
        item(860.0, 470.0, Coffee),
        item(1160.0, 420.0, Folder),
        item(1460.0, 430.0, Coffee),
        item(1810.0, 470.0, Folder),
        item(2110.0, 470.0, Coffee),
        item(2310.0, 450.0, Plant),
    ],
    exit: ExitSpec { x: 2850.0, y: 470.0 },
    palette: Palette {
        darkest: 0x0a1a1a,
        dark: 0x1a3d3d,
        medium: 0x2a5a5a,
        light: 0x4a8b8b,
        beige: 0x6ac4c4,
        lightest: 0xa8e8e8,
        floor_dark: 0x152a2a,
        floor_light: 0x8ad4d4,
        accent: 0x5ab4b4,
    },
};

// Warm presentation room
static LEVEL_3: LevelDescriptor = LevelDescriptor {
    name: "Conference Room Hell",
    time_label: "2:15 PM",
    width: 2800.0,
    platforms: &[
        floor(0.0, 550.0, 2800.0, 50.0),
        desk(50.0, 480.0, 100.0, 20.0),
        desk(200.0, 500.0, 80.0, 20.0),
        // Presentation screen
        cabinet(400.0, 350.0, 120.0, 80.0),
        cabinet(400.0, 430.0, 120.0, 120.0),
        // Conference tables
        desk(600.0, 450.0, 600.0, 30.0),
        desk(1250.0, 450.0, 600.0, 30.0),
        // Chairs
        desk(1950.0, 490.0, 60.0, 20.0),
        desk(2070.0, 460.0, 60.0, 20.0),
        desk(2190.0, 490.0, 60.0, 20.0),
        desk(2400.0, 500.0, 150.0, 20.0),
    ],
    enemies: &[
        enemy(300.0, 518.0, Boss, 200.0, 520.0),
        enemy(750.0, 418.0, Colleague, 650.0, 1100.0),
        enemy(1400.0, 418.0, Colleague, 1300.0, 1800.0),
        enemy(1900.0, 518.0, Colleague, 1850.0, 1950.0),
        enemy(2000.0, 458.0, Customer, 1950.0, 2120.0),
        enemy(2240.0, 518.0, Customer, 2150.0, 2400.0),
    ],
    items: &[
        item(210.0, 470.0, Folder),
        item(800.0, 420.0, Coffee),
        item(1100.0, 420.0, Coffee),
        item(1500.0, 420.0, Folder),
        item(2080.0, 430.0, Coffee),
        item(2410.0, 470.0, Plant),
    ],
    exit: ExitSpec { x: 2700.0, y: 470.0 },
    palette: Palette {
        darkest: 0x1a1010,
        dark: 0x3d2020,
        medium: 0x5a3030,
        light: 0x8b5555,
        beige: 0xc49090,
        lightest: 0xe8c8c8,
        floor_dark: 0x2a1a1a,
        floor_light: 0xd4b0b0,
        accent: 0xb47474,
    },
};

// Yellow/green food service
static LEVEL_4: LevelDescriptor = LevelDescriptor {
    name: "The Kitchen Chaos",
    time_label: "12:37 PM",
    width: 2700.0,
    platforms: &[
        floor(0.0, 550.0, 2700.0, 50.0),
        desk(50.0, 480.0, 100.0, 20.0),
        desk(200.0, 500.0, 60.0, 20.0),
        // Fridge
        cabinet(320.0, 490.0, 80.0, 60.0),
        desk(460.0, 470.0, 80.0, 20.0),
        desk(600.0, 490.0, 100.0, 30.0),
        desk(750.0, 500.0, 90.0, 20.0),
        desk(900.0, 500.0, 90.0, 20.0),
        // Microwave
        cabinet(1050.0, 480.0, 60.0, 40.0),
        desk(1170.0, 500.0, 80.0, 20.0),
        // Dining table
        desk(1300.0, 470.0, 500.0, 30.0),
        desk(1850.0, 490.0, 80.0, 30.0),
        desk(1980.0, 460.0, 80.0, 30.0),
        desk(2110.0, 490.0, 80.0, 30.0),
        desk(2250.0, 500.0, 150.0, 20.0),
        desk(2450.0, 480.0, 100.0, 20.0),
    ],
    enemies: &[
        enemy(250.0, 518.0, Colleague, 200.0, 400.0),
        enemy(610.0, 458.0, Colleague, 600.0, 760.0),
        enemy(1220.0, 518.0, Colleague, 1170.0, 1290.0),
        enemy(1450.0, 438.0, Colleague, 1350.0, 1750.0),
        enemy(1990.0, 428.0, Customer, 1980.0, 2120.0),
        enemy(2350.0, 518.0, Boss, 2250.0, 2550.0),
    ],
    items: &[
        item(210.0, 470.0, Coffee),
        item(470.0, 440.0, Coffee),
        item(760.0, 470.0, Folder),
        item(1060.0, 450.0, Coffee),
        item(1450.0, 440.0, Coffee),
        item(1650.0, 440.0, Folder),
        item(1990.0, 430.0, Plant),
        item(2460.0, 450.0, Coffee),
    ],
    exit: ExitSpec { x: 2600.0, y: 450.0 },
    palette: Palette {
        darkest: 0x1a1a0a,
        dark: 0x3d3d1a,
        medium: 0x5a5a2a,
        light: 0x8b8b4a,
        beige: 0xc4c46a,
        lightest: 0xe8e8a8,
        floor_dark: 0x2a2a15,
        floor_light: 0xd4d48a,
        accent: 0xb4b45a,
    },
};

// Dark red executive floor
static LEVEL_5: LevelDescriptor = LevelDescriptor {
    name: "The Exit Strategy",
    time_label: "5:47 PM",
    width: 3200.0,
    platforms: &[
        floor(0.0, 550.0, 3200.0, 50.0),
        desk(50.0, 480.0, 100.0, 20.0),
        desk(250.0, 500.0, 80.0, 20.0),
        // Luxury desk
        desk(380.0, 460.0, 150.0, 40.0),
        // Bookshelf wall
        cabinet(600.0, 470.0, 100.0, 80.0),
        cabinet(600.0, 390.0, 100.0, 80.0),
        cabinet(600.0, 310.0, 100.0, 80.0),
        desk(750.0, 450.0, 80.0, 20.0),
        desk(900.0, 490.0, 100.0, 30.0),
        desk(1050.0, 500.0, 120.0, 20.0),
        cabinet(1250.0, 490.0, 100.0, 60.0),
        cabinet(1250.0, 430.0, 100.0, 60.0),
        desk(1400.0, 460.0, 80.0, 30.0),
        cabinet(1550.0, 490.0, 100.0, 60.0),
        desk(1700.0, 450.0, 90.0, 40.0),
        desk(1850.0, 480.0, 120.0, 40.0),
        desk(2050.0, 500.0, 100.0, 20.0),
        desk(2220.0, 470.0, 100.0, 50.0),
        desk(2400.0, 490.0, 150.0, 30.0),
        desk(2650.0, 500.0, 120.0, 20.0),
        desk(2850.0, 480.0, 150.0, 40.0),
    ],
    enemies: &[
        enemy(390.0, 428.0, Boss, 380.0, 520.0),
        enemy(800.0, 518.0, Colleague, 750.0, 890.0),
        enemy(1100.0, 518.0, Boss, 1000.0, 1230.0),
        enemy(1410.0, 428.0, Customer, 1400.0, 1480.0),
        enemy(1750.0, 518.0, Colleague, 1700.0, 1850.0),
        enemy(1860.0, 448.0, Boss, 1850.0, 1970.0),
        enemy(2230.0, 438.0, Customer, 2220.0, 2350.0),
        // Final boss guards the exit
        enemy(2700.0, 518.0, Boss, 2550.0, 3000.0),
    ],
    items: &[
        item(260.0, 470.0, Folder),
        item(610.0, 280.0, Plant),
        item(760.0, 420.0, Coffee),
        item(1060.0, 470.0, Folder),
        item(1410.0, 430.0, Coffee),
        item(1710.0, 420.0, Plant),
        item(1860.0, 450.0, Folder),
        item(2230.0, 440.0, Coffee),
        item(2660.0, 470.0, Plant),
    ],
    exit: ExitSpec { x: 3050.0, y: 450.0 },
    palette: Palette {
        darkest: 0x1a0a0a,
        dark: 0x3d1a1a,
        medium: 0x5a2a2a,
        light: 0x8b4a4a,
        beige: 0xc47070,
        lightest: 0xe8b8b8,
        floor_dark: 0x2a1010,
        floor_light: 0xd49090,
        accent: 0xb45a5a,
    },
};
