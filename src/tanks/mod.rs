//! Fixed-capacity tank pool and everything that mutates a tank.

mod loadout;
mod movement;
mod spawn;

use glam::Vec2;
use log::{debug, warn};
use thiserror::Error;

use crate::config::MAX_TANKS;
use crate::entities::{PartInstance, PartSlot, Tank, TankId};
use crate::parts::PartCatalog;

pub use movement::{update_tank, TankInput};
pub use spawn::spawn_ai_tanks;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TankError {
    #[error("tank pool is full ({capacity} tanks)")]
    PoolFull { capacity: usize },
    #[error("no active tank with id {0:?}")]
    NotFound(TankId),
    #[error("tank already carries {capacity} parts")]
    PartsFull { capacity: usize },
    #[error("{} slot already holds a part at {angle_offset} degrees", .slot.name())]
    SlotOccupied { slot: PartSlot, angle_offset: f32 },
    #[error("{} slot is empty", .0.name())]
    SlotEmpty(PartSlot),
    #[error("tank ids exhausted")]
    IdsExhausted,
}

/// Pre-allocated tank storage. Slots are recycled, ids are not: every
/// successful `create` hands out a fresh id, so a stale id never resolves to
/// the tank that later reused its slot.
pub struct TankPool {
    slots: Vec<Tank>,
    live: usize,
    next_id: u32,
    player: Option<TankId>,
}

impl TankPool {
    pub fn new() -> Self {
        Self {
            slots: vec![Tank::default(); MAX_TANKS],
            live: 0,
            next_id: 1,
            player: None,
        }
    }

    /// Drops every tank and restarts id assignment at 1.
    pub fn reset(&mut self) {
        self.slots.fill(Tank::default());
        self.live = 0;
        self.next_id = 1;
        self.player = None;
    }

    pub fn create(
        &mut self,
        position: Vec2,
        is_player: bool,
        catalog: &PartCatalog,
    ) -> Result<TankId, TankError> {
        let capacity = self.slots.len();
        let Some(following) = self.next_id.checked_add(1) else {
            warn!("tank id counter exhausted");
            return Err(TankError::IdsExhausted);
        };
        let Some(slot) = self.slots.iter_mut().find(|tank| !tank.active) else {
            warn!("tank pool exhausted at {capacity} tanks");
            return Err(TankError::PoolFull { capacity });
        };

        let id = TankId(self.next_id);
        self.next_id = following;
        *slot = spawn::fresh_tank(id, position, is_player);
        slot.recalc_stats(catalog);
        slot.health = slot.current_stats.max_health;

        if is_player {
            if let Some(previous) = self.player {
                debug!("player tank {previous:?} superseded by {id:?}");
            }
            self.player = Some(id);
        }
        self.live += 1;
        debug!("created tank {id:?} at ({:.0}, {:.0})", position.x, position.y);
        Ok(id)
    }

    /// Frees the tank's slot. Its storage is left as-is until reused.
    pub fn destroy(&mut self, id: TankId) -> Result<(), TankError> {
        let tank = self.get_mut(id).ok_or(TankError::NotFound(id))?;
        tank.active = false;
        if self.player == Some(id) {
            self.player = None;
        }
        self.live -= 1;
        debug!("destroyed tank {id:?}");
        Ok(())
    }

    pub fn get(&self, id: TankId) -> Option<&Tank> {
        self.slots
            .iter()
            .find(|tank| tank.active && tank.id == id)
    }

    pub fn get_mut(&mut self, id: TankId) -> Option<&mut Tank> {
        self.slots
            .iter_mut()
            .find(|tank| tank.active && tank.id == id)
    }

    pub fn player_id(&self) -> Option<TankId> {
        self.player
    }

    pub fn player(&self) -> Option<&Tank> {
        self.player.and_then(|id| self.get(id))
    }

    /// The whole backing store, inactive slots included.
    pub fn slots(&self) -> &[Tank] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Tank> {
        self.slots.iter().filter(|tank| tank.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut Tank> {
        self.slots.iter_mut().filter(|tank| tank.active)
    }

    pub fn attach_part(
        &mut self,
        id: TankId,
        part: PartInstance,
        catalog: &PartCatalog,
    ) -> Result<(), TankError> {
        self.get_mut(id)
            .ok_or(TankError::NotFound(id))?
            .attach_part(part, catalog)
    }

    pub fn remove_part(
        &mut self,
        id: TankId,
        slot: PartSlot,
        catalog: &PartCatalog,
    ) -> Result<PartInstance, TankError> {
        self.get_mut(id)
            .ok_or(TankError::NotFound(id))?
            .remove_part(slot, catalog)
    }

    /// Advances one tank by a frame. Unknown ids are ignored.
    pub fn update(&mut self, id: TankId, input: &TankInput, dt: f32) {
        if let Some(tank) = self.get_mut(id) {
            update_tank(tank, input, dt);
        }
    }
}

impl Default for TankPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_TANK_STATS;
    use crate::math::vec2;

    #[test]
    fn new_tank_starts_from_base_stats_at_full_health() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let id = pool.create(vec2(5.0, -3.0), false, &catalog).unwrap();
        let tank = pool.get(id).unwrap();
        assert_eq!(id, TankId(1));
        assert_eq!(tank.base_stats, BASE_TANK_STATS);
        assert_eq!(tank.current_stats, BASE_TANK_STATS);
        assert_eq!(tank.health, 100.0);
        assert_eq!(tank.position, vec2(5.0, -3.0));
        assert!(tank.parts.is_empty());
    }

    #[test]
    fn ids_are_monotonic_and_not_reused() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let first = pool.create(Vec2::ZERO, false, &catalog).unwrap();
        pool.destroy(first).unwrap();
        let second = pool.create(Vec2::ZERO, false, &catalog).unwrap();
        assert_eq!(second, TankId(2));
        assert!(pool.get(first).is_none());
        assert!(pool.get(second).is_some());
    }

    #[test]
    fn pool_exhaustion_fails_without_side_effects() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        for _ in 0..MAX_TANKS {
            pool.create(Vec2::ZERO, false, &catalog).unwrap();
        }
        assert_eq!(pool.live_count(), MAX_TANKS);
        let err = pool.create(Vec2::ZERO, false, &catalog).unwrap_err();
        assert_eq!(err, TankError::PoolFull { capacity: MAX_TANKS });
        assert_eq!(pool.live_count(), MAX_TANKS);
        assert_eq!(pool.iter_active().count(), MAX_TANKS);
    }

    #[test]
    fn destroyed_slot_is_reused() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let ids: Vec<_> = (0..MAX_TANKS)
            .map(|_| pool.create(Vec2::ZERO, false, &catalog).unwrap())
            .collect();
        pool.destroy(ids[7]).unwrap();
        let replacement = pool.create(vec2(1.0, 1.0), false, &catalog).unwrap();
        assert_eq!(pool.slots()[7].id, replacement);
        assert_eq!(pool.live_count(), MAX_TANKS);
    }

    #[test]
    fn second_player_supersedes_first() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let first = pool.create(Vec2::ZERO, true, &catalog).unwrap();
        let second = pool.create(Vec2::ZERO, true, &catalog).unwrap();
        assert_eq!(pool.player_id(), Some(second));
        let orphan = pool.get(first).unwrap();
        assert!(orphan.active);
        assert!(orphan.is_player);
    }

    #[test]
    fn destroying_player_clears_reference() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let player = pool.create(Vec2::ZERO, true, &catalog).unwrap();
        pool.destroy(player).unwrap();
        assert!(pool.player().is_none());
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.destroy(player), Err(TankError::NotFound(player)));
    }

    #[test]
    fn exhausted_id_counter_fails_without_touching_the_pool() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        pool.next_id = u32::MAX - 1;
        let last = pool.create(Vec2::ZERO, false, &catalog).unwrap();
        assert_eq!(last, TankId(u32::MAX - 1));

        assert_eq!(
            pool.create(Vec2::ZERO, false, &catalog),
            Err(TankError::IdsExhausted)
        );
        assert_eq!(pool.live_count(), 1);
        assert_eq!(pool.next_id, u32::MAX);
    }

    #[test]
    fn slots_expose_full_capacity() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        pool.create(Vec2::ZERO, false, &catalog).unwrap();
        assert_eq!(pool.slots().len(), MAX_TANKS);
        assert_eq!(pool.capacity(), MAX_TANKS);
        assert_eq!(pool.slots().iter().filter(|tank| tank.active).count(), 1);
    }

    #[test]
    fn reset_forgets_everything() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        pool.create(Vec2::ZERO, true, &catalog).unwrap();
        pool.create(Vec2::ZERO, false, &catalog).unwrap();
        pool.reset();
        assert_eq!(pool.live_count(), 0);
        assert!(pool.player_id().is_none());
        assert_eq!(pool.create(Vec2::ZERO, false, &catalog).unwrap(), TankId(1));
    }

    #[test]
    fn pool_level_part_calls_reject_unknown_tanks() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let ghost = TankId(42);
        assert_eq!(
            pool.attach_part(ghost, PartInstance::new(0, PartSlot::Front), &catalog),
            Err(TankError::NotFound(ghost))
        );
        assert_eq!(
            pool.remove_part(ghost, PartSlot::Front, &catalog),
            Err(TankError::NotFound(ghost))
        );
        pool.update(ghost, &TankInput::default(), 0.016);
    }
}
