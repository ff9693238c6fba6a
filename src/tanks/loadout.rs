use log::debug;

use crate::config::{ANGLE_OFFSET_TOLERANCE, MAX_PARTS_PER_TANK};
use crate::entities::{PartInstance, PartSlot, Tank};
use crate::parts::{effective_bonus, PartCatalog};

use super::TankError;

impl Tank {
    /// Adds `part` unless the tank is full or the slot/angle pair is taken.
    /// On failure the tank is untouched.
    pub fn attach_part(
        &mut self,
        part: PartInstance,
        catalog: &PartCatalog,
    ) -> Result<(), TankError> {
        if self.parts.len() >= MAX_PARTS_PER_TANK {
            return Err(TankError::PartsFull {
                capacity: MAX_PARTS_PER_TANK,
            });
        }
        let occupied = self.parts.iter().any(|existing| {
            existing.slot == part.slot
                && (existing.angle_offset - part.angle_offset).abs() < ANGLE_OFFSET_TOLERANCE
        });
        if occupied {
            return Err(TankError::SlotOccupied {
                slot: part.slot,
                angle_offset: part.angle_offset,
            });
        }

        self.parts.push(part);
        self.recalc_stats(catalog);
        debug!(
            "tank {:?}: attached part {} to {} slot",
            self.id,
            part.definition_id,
            part.slot.name()
        );
        Ok(())
    }

    /// Removes the first part mounted in `slot`, whatever its angle offset.
    /// Remaining parts keep their order.
    pub fn remove_part(
        &mut self,
        slot: PartSlot,
        catalog: &PartCatalog,
    ) -> Result<PartInstance, TankError> {
        let index = self
            .parts
            .iter()
            .position(|part| part.slot == slot)
            .ok_or(TankError::SlotEmpty(slot))?;
        let removed = self.parts.remove(index);
        self.recalc_stats(catalog);
        debug!(
            "tank {:?}: removed part {} from {} slot",
            self.id,
            removed.definition_id,
            slot.name()
        );
        Ok(removed)
    }

    /// Rebuilds current stats from base stats and every attached part, then
    /// pulls health down if the ceiling dropped.
    pub fn recalc_stats(&mut self, catalog: &PartCatalog) {
        self.current_stats = self
            .parts
            .iter()
            .fold(self.base_stats, |stats, part| {
                stats + effective_bonus(part, catalog)
            });
        self.health = self.health.min(self.current_stats.max_health);
    }

    pub fn part_in_slot(&self, slot: PartSlot) -> Option<&PartInstance> {
        self.parts.iter().find(|part| part.slot == slot)
    }
}
