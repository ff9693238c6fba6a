use crate::config::{HIGH_RARITY_BONUS, RARITY_STEP, UPGRADE_STEP};
use crate::entities::{PartInstance, Rarity, Stats};

use super::catalog::PartCatalog;

/// 1 + 0.25 per tier, plus a flat 0.5 from Epic upwards.
pub fn rarity_multiplier(rarity: Rarity) -> f32 {
    let mut multiplier = 1.0 + rarity.index() as f32 * RARITY_STEP;
    if rarity >= Rarity::Epic {
        multiplier += HIGH_RARITY_BONUS;
    }
    multiplier
}

pub fn upgrade_multiplier(upgrade_level: u32) -> f32 {
    1.0 + upgrade_level as f32 * UPGRADE_STEP
}

/// Stat contribution of a part once rarity and upgrades are applied.
/// A part whose definition cannot be found contributes nothing.
pub fn effective_bonus(part: &PartInstance, catalog: &PartCatalog) -> Stats {
    let Some(definition) = catalog.get(part.definition_id) else {
        return Stats::ZERO;
    };
    let total = rarity_multiplier(part.rarity) * upgrade_multiplier(part.upgrade_level);
    definition.base_bonus * total
}
