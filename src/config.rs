//! Tunables shared across the game.

use crate::entities::{PartId, PartSlot, Stats};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const WINDOW_MIN_WIDTH: i32 = 640;
pub const WINDOW_MIN_HEIGHT: i32 = 480;
pub const TARGET_FPS: u32 = 60;

pub const MAX_TANKS: usize = 128;
pub const MAX_PARTS_PER_TANK: usize = 16;
pub const MAX_PART_TYPES: usize = 64;

/// Two parts sharing a slot collide when their angle offsets differ by less
/// than this many degrees.
pub const ANGLE_OFFSET_TOLERANCE: f32 = 0.01;

pub const TANK_BODY_SIZE: f32 = 40.0;

/// Stats every tank starts from before parts are applied.
pub const BASE_TANK_STATS: Stats = Stats {
    max_health: 100.0,
    health_regen: 1.0,
    move_speed: 200.0,
    rotation_speed: 3.0,
    damage: 0.0,
    reload_speed: 1.0,
    projectile_speed: 400.0,
    body_damage: 10.0,
};

pub const RARITY_STEP: f32 = 0.25;
pub const HIGH_RARITY_BONUS: f32 = 0.5;
pub const UPGRADE_STEP: f32 = 0.1;

pub const CRAFT_PANEL_WIDTH: f32 = 300.0;
pub const CRAFT_PANEL_MARGIN: f32 = 20.0;
pub const SLOT_BUTTON_SIZE: f32 = 60.0;
pub const SLOT_BUTTON_SPACING: f32 = 70.0;
pub const SLOT_CLUSTER_TOP: f32 = 150.0;
pub const PART_LIST_TOP: f32 = 250.0;
pub const PART_ROW_HEIGHT: f32 = 50.0;
pub const PART_ROW_GAP: f32 = 5.0;
pub const PART_LIST_VISIBLE_TOP: f32 = 240.0;
pub const PART_LIST_VISIBLE_BOTTOM: f32 = 60.0;
pub const SCROLL_STEP: f32 = 30.0;
pub const PREVIEW_SPIN_DEG: f32 = 30.0;

/// The player rolls out with a Basic Cannon up front.
pub const STARTING_PART: (PartId, PartSlot) = (0, PartSlot::Front);

pub const DEFAULT_AI_TANKS: usize = 3;
pub const AI_SPAWN_RADIUS: f32 = 320.0;

pub const GRID_SPACING: i32 = 50;

/// Runtime options chosen at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub seed: u64,
    pub ai_tanks: usize,
    pub spawn_radius: f32,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            ai_tanks: DEFAULT_AI_TANKS,
            spawn_radius: AI_SPAWN_RADIUS,
        }
    }
}
