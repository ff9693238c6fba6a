use std::f32::consts::PI;

use glam::Vec2;
use log::warn;
use rand::{rngs::SmallRng, Rng};

use crate::color::Rgba;
use crate::config::{BASE_TANK_STATS, MAX_PARTS_PER_TANK, TANK_BODY_SIZE};
use crate::entities::{Tank, TankId};
use crate::math::vec2_from_angle;
use crate::parts::PartCatalog;

use super::TankPool;

pub(super) fn fresh_tank(id: TankId, position: Vec2, is_player: bool) -> Tank {
    Tank {
        id,
        active: true,
        position,
        velocity: Vec2::ZERO,
        rotation: 0.0,
        aim_angle: 0.0,
        base_stats: BASE_TANK_STATS,
        current_stats: BASE_TANK_STATS,
        health: 0.0,
        body_color: if is_player { Rgba::MAROON } else { Rgba::DARKGRAY },
        body_size: TANK_BODY_SIZE,
        parts: Vec::with_capacity(MAX_PARTS_PER_TANK),
        is_player,
    }
}

/// Scatters `count` computer-controlled tanks on a ring around the origin.
/// Stops early if the pool runs out of room.
pub fn spawn_ai_tanks(
    pool: &mut TankPool,
    rng: &mut SmallRng,
    count: usize,
    radius: f32,
    catalog: &PartCatalog,
) -> Vec<TankId> {
    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let angle = rng.random_range(0.0..(PI * 2.0));
        let distance = radius * rng.random_range(0.6..1.0);
        match pool.create(vec2_from_angle(angle) * distance, false, catalog) {
            Ok(id) => spawned.push(id),
            Err(err) => {
                warn!("stopped spawning AI tanks after {}: {err}", spawned.len());
                break;
            }
        }
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_TANKS;
    use rand::SeedableRng;

    #[test]
    fn ai_tanks_land_on_the_ring() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let mut rng = SmallRng::seed_from_u64(7);
        let ids = spawn_ai_tanks(&mut pool, &mut rng, 5, 300.0, &catalog);
        assert_eq!(ids.len(), 5);
        for id in ids {
            let tank = pool.get(id).unwrap();
            let distance = tank.position.length();
            assert!((179.9..=300.1).contains(&distance), "distance {distance}");
            assert!(!tank.is_player);
            assert_eq!(tank.body_color, Rgba::DARKGRAY);
        }
        assert!(pool.player_id().is_none());
    }

    #[test]
    fn spawning_stops_at_pool_capacity() {
        let catalog = PartCatalog::standard();
        let mut pool = TankPool::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let ids = spawn_ai_tanks(&mut pool, &mut rng, MAX_TANKS + 10, 100.0, &catalog);
        assert_eq!(ids.len(), MAX_TANKS);
        assert_eq!(pool.live_count(), MAX_TANKS);
    }
}
