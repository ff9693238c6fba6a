use log::{debug, error, info};
use thiserror::Error;

use crate::color::Rgba;
use crate::config::MAX_PART_TYPES;
use crate::entities::{PartDefinition, PartId, PartType, Rarity, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("part catalog is full ({capacity} definitions)")]
    Full { capacity: usize },
}

/// Ordered registry of part templates. Registration order is both the id
/// order and the order the crafting list shows.
#[derive(Clone, Debug, Default)]
pub struct PartCatalog {
    definitions: Vec<PartDefinition>,
}

impl PartCatalog {
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// The stock set of parts the game ships with.
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        for (kind, name, bonus, size, color) in standard_parts() {
            // The stock list is far below capacity.
            if let Err(err) = catalog.register(kind, name, bonus, size, color) {
                error!("stock part {name} rejected: {err}");
            }
        }
        info!("part catalog ready with {} definitions", catalog.len());
        catalog
    }

    pub fn register(
        &mut self,
        kind: PartType,
        name: &'static str,
        base_bonus: Stats,
        size: f32,
        color: Rgba,
    ) -> Result<PartId, CatalogError> {
        if self.definitions.len() >= MAX_PART_TYPES {
            return Err(CatalogError::Full {
                capacity: MAX_PART_TYPES,
            });
        }
        let id = self.definitions.len();
        self.definitions.push(PartDefinition {
            id,
            kind,
            name,
            base_bonus,
            size,
            color,
        });
        debug!("registered part {id}: {name} ({})", type_name(kind));
        Ok(id)
    }

    pub fn get(&self, id: PartId) -> Option<&PartDefinition> {
        self.definitions.get(id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartDefinition> {
        self.definitions.iter()
    }
}

fn standard_parts() -> [(PartType, &'static str, Stats, f32, Rgba); 7] {
    [
        (
            PartType::Cannon,
            "Basic Cannon",
            Stats {
                damage: 10.0,
                reload_speed: 1.0,
                projectile_speed: 400.0,
                ..Stats::ZERO
            },
            20.0,
            Rgba::DARKGREEN,
        ),
        (
            PartType::Cannon,
            "Sniper Cannon",
            Stats {
                damage: 25.0,
                reload_speed: 0.5,
                projectile_speed: 600.0,
                ..Stats::ZERO
            },
            15.0,
            Rgba::DARKBLUE,
        ),
        (
            PartType::Cannon,
            "Machine Gun",
            Stats {
                damage: 4.0,
                reload_speed: 3.0,
                projectile_speed: 350.0,
                ..Stats::ZERO
            },
            12.0,
            Rgba::ORANGE,
        ),
        (
            PartType::Launcher,
            "Rocket Launcher",
            Stats {
                damage: 40.0,
                reload_speed: 0.3,
                projectile_speed: 250.0,
                ..Stats::ZERO
            },
            25.0,
            Rgba::RED,
        ),
        (
            PartType::Shield,
            "Shield Generator",
            Stats {
                max_health: 50.0,
                health_regen: 2.0,
                ..Stats::ZERO
            },
            18.0,
            Rgba::SKYBLUE,
        ),
        (
            PartType::Booster,
            "Thruster",
            Stats {
                move_speed: 50.0,
                rotation_speed: 0.5,
                ..Stats::ZERO
            },
            16.0,
            Rgba::YELLOW,
        ),
        (
            PartType::DroneBay,
            "Drone Bay",
            Stats {
                damage: 5.0,
                ..Stats::ZERO
            },
            22.0,
            Rgba::PURPLE,
        ),
    ]
}

pub fn type_name(kind: PartType) -> &'static str {
    match kind {
        PartType::None => "None",
        PartType::Cannon => "Cannon",
        PartType::Launcher => "Launcher",
        PartType::Shield => "Shield",
        PartType::Booster => "Booster",
        PartType::DroneBay => "Drone Bay",
    }
}

pub fn rarity_color(rarity: Rarity) -> Rgba {
    match rarity {
        Rarity::Common => Rgba::GRAY,
        Rarity::Uncommon => Rgba::GREEN,
        Rarity::Rare => Rgba::BLUE,
        Rarity::Epic => Rgba::PURPLE,
        Rarity::Legendary => Rgba::GOLD,
    }
}

/// Short headline stat shown next to a part in the picker.
pub fn quick_stat_label(definition: &PartDefinition) -> String {
    let bonus = &definition.base_bonus;
    if bonus.damage > 0.0 {
        format!("DMG: {:.0}", bonus.damage)
    } else if bonus.max_health > 0.0 {
        format!("HP: +{:.0}", bonus.max_health)
    } else if bonus.move_speed > 0.0 {
        format!("SPD: +{:.0}", bonus.move_speed)
    } else {
        String::new()
    }
}
