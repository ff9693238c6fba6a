use glam::Vec2;

use crate::entities::Tank;
use crate::math::vec2_angle_deg;

/// Per-frame control sample for one tank.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TankInput {
    pub move_dir: Vec2,
    /// World-space point the turret should face.
    pub aim_pos: Vec2,
}

/// One simulation step: move, aim, tick part cooldowns, regenerate.
/// Inactive tanks are skipped.
pub fn update_tank(tank: &mut Tank, input: &TankInput, dt: f32) {
    if !tank.active {
        return;
    }

    tank.velocity = input.move_dir.normalize_or_zero() * tank.current_stats.move_speed;
    tank.position += tank.velocity * dt;
    if tank.velocity != Vec2::ZERO {
        tank.rotation = vec2_angle_deg(tank.velocity);
    }

    tank.aim_angle = vec2_angle_deg(input.aim_pos - tank.position);

    // May overshoot below zero by up to one frame.
    for part in &mut tank.parts {
        if part.reload_timer > 0.0 {
            part.reload_timer -= dt;
        }
    }

    regenerate(tank, dt);
}

fn regenerate(tank: &mut Tank, dt: f32) {
    let ceiling = tank.current_stats.max_health;
    if tank.health < ceiling {
        tank.health = (tank.health + tank.current_stats.health_regen * dt).min(ceiling);
    }
}
