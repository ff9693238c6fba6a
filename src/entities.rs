use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use glam::Vec2;

use crate::color::Rgba;

/// Index into the part catalog. Ids are handed out in registration order.
pub type PartId = usize;

/// Additive block of gameplay attributes. The all-zero value is the identity
/// for addition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub max_health: f32,
    pub health_regen: f32,
    pub move_speed: f32,
    pub rotation_speed: f32,
    pub damage: f32,
    pub reload_speed: f32,
    pub projectile_speed: f32,
    pub body_damage: f32,
}

impl Stats {
    pub const ZERO: Stats = Stats {
        max_health: 0.0,
        health_regen: 0.0,
        move_speed: 0.0,
        rotation_speed: 0.0,
        damage: 0.0,
        reload_speed: 0.0,
        projectile_speed: 0.0,
        body_damage: 0.0,
    };
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            max_health: self.max_health + rhs.max_health,
            health_regen: self.health_regen + rhs.health_regen,
            move_speed: self.move_speed + rhs.move_speed,
            rotation_speed: self.rotation_speed + rhs.rotation_speed,
            damage: self.damage + rhs.damage,
            reload_speed: self.reload_speed + rhs.reload_speed,
            projectile_speed: self.projectile_speed + rhs.projectile_speed,
            body_damage: self.body_damage + rhs.body_damage,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Stats {
    type Output = Stats;

    fn mul(self, factor: f32) -> Stats {
        Stats {
            max_health: self.max_health * factor,
            health_regen: self.health_regen * factor,
            move_speed: self.move_speed * factor,
            rotation_speed: self.rotation_speed * factor,
            damage: self.damage * factor,
            reload_speed: self.reload_speed * factor,
            projectile_speed: self.projectile_speed * factor,
            body_damage: self.body_damage * factor,
        }
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::ZERO, Add::add)
    }
}

/// Attachment points on a tank hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartSlot {
    Front,
    Back,
    Left,
    Right,
    Top,
}

impl PartSlot {
    pub const ALL: [PartSlot; 5] = [
        PartSlot::Front,
        PartSlot::Back,
        PartSlot::Left,
        PartSlot::Right,
        PartSlot::Top,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PartSlot::Front => "Front",
            PartSlot::Back => "Back",
            PartSlot::Left => "Left",
            PartSlot::Right => "Right",
            PartSlot::Top => "Top",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartType {
    None,
    Cannon,
    Launcher,
    Shield,
    Booster,
    DroneBay,
}

impl PartType {
    pub const ALL: [PartType; 6] = [
        PartType::None,
        PartType::Cannon,
        PartType::Launcher,
        PartType::Shield,
        PartType::Booster,
        PartType::DroneBay,
    ];
}

/// Quality tier. Ordered, so `rarity >= Rarity::Epic` reads naturally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn index(self) -> usize {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Catalog template for a part. Never changes once registered.
#[derive(Clone, Debug, PartialEq)]
pub struct PartDefinition {
    pub id: PartId,
    pub kind: PartType,
    pub name: &'static str,
    pub base_bonus: Stats,
    pub size: f32,
    pub color: Rgba,
}

/// A part bolted onto one tank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartInstance {
    pub definition_id: PartId,
    pub slot: PartSlot,
    /// Extra aim offset in degrees, lets several parts share a slot.
    pub angle_offset: f32,
    pub reload_timer: f32,
    pub rarity: Rarity,
    pub upgrade_level: u32,
}

impl PartInstance {
    pub fn new(definition_id: PartId, slot: PartSlot) -> Self {
        Self {
            definition_id,
            slot,
            angle_offset: 0.0,
            reload_timer: 0.0,
            rarity: Rarity::Common,
            upgrade_level: 0,
        }
    }
}

/// Pool-assigned tank identifier. Zero never names a live tank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TankId(pub u32);

impl TankId {
    pub const INVALID: TankId = TankId(0);

    pub fn is_valid(self) -> bool {
        self != TankId::INVALID
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tank {
    pub id: TankId,
    pub active: bool,
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    /// Degrees.
    pub aim_angle: f32,
    pub base_stats: Stats,
    pub current_stats: Stats,
    pub health: f32,
    pub body_color: Rgba,
    pub body_size: f32,
    pub parts: Vec<PartInstance>,
    pub is_player: bool,
}
